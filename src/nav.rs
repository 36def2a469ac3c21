use std::{fmt, str::FromStr};

use thiserror::Error;

/// The five content regions of the page, in scroll-tracking priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM anchor id of the section.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Accueil",
            Section::About => "À propos",
            Section::Skills => "Compétences",
            Section::Projects => "Projets",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
}

impl FromStr for Section {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| NavError::UnknownSection(s.to_string()))
    }
}

/// Pixel constants driving the scroll tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    /// Line below the viewport top that a section must straddle to be active.
    pub reference_line: f64,
    /// Vertical offset past which the navigation bar switches to its solid style.
    pub scrolled_threshold: f64,
}

impl ScrollConfig {
    pub const DEFAULT: ScrollConfig = ScrollConfig {
        reference_line: 100.0,
        scrolled_threshold: 50.0,
    };
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Viewport-relative vertical extent of a section, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// First section (in `Section::ALL` order) whose bounds straddle `line`.
/// Sections `locate` cannot find are skipped.
pub fn section_at<F>(line: f64, locate: F) -> Option<Section>
where
    F: Fn(Section) -> Option<SectionBounds>,
{
    Section::ALL
        .into_iter()
        .find(|&section| locate(section).is_some_and(|b| b.straddles(line)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub menu_open: bool,
    pub active: Section,
    pub scrolled: bool,
    pub loaded: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Optimistic update applied when the user picks a section.
    pub fn navigate(&mut self, section: Section) {
        self.active = section;
        self.menu_open = false;
    }

    /// Handles a navigation request for the anchor `id`. `scroll` brings the section into
    /// view and reports whether its anchor exists; state only changes once it has scrolled.
    pub fn request<F>(&mut self, id: &str, scroll: F) -> Result<Option<Section>, NavError>
    where
        F: FnOnce(Section) -> bool,
    {
        let section = id.parse::<Section>()?;
        if !scroll(section) {
            return Ok(None);
        }
        self.navigate(section);
        Ok(Some(section))
    }

    pub fn on_scroll<F>(&mut self, offset_y: f64, config: &ScrollConfig, locate: F)
    where
        F: Fn(Section) -> Option<SectionBounds>,
    {
        self.scrolled = offset_y > config.scrolled_threshold;
        if let Some(section) = section_at(config.reference_line, locate) {
            self.active = section;
        }
    }

    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(sections: &[(Section, f64, f64)]) -> impl Fn(Section) -> Option<SectionBounds> + '_ {
        move |s| {
            sections
                .iter()
                .find(|(sec, _, _)| *sec == s)
                .map(|&(_, top, bottom)| SectionBounds { top, bottom })
        }
    }

    #[test]
    fn test_section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        assert_eq!(
            "blog".parse::<Section>(),
            Err(NavError::UnknownSection("blog".to_string()))
        );
        // keys are case sensitive
        assert!("Home".parse::<Section>().is_err());
        assert!("".parse::<Section>().is_err());
    }

    #[test]
    fn test_navigate_sets_active_and_closes_menu() {
        let priors = [
            NavState::default(),
            NavState {
                menu_open: true,
                active: Section::Contact,
                scrolled: true,
                loaded: true,
            },
            NavState {
                menu_open: false,
                active: Section::Skills,
                scrolled: false,
                loaded: true,
            },
        ];
        for prior in priors {
            for section in Section::ALL {
                let mut state = prior;
                state.navigate(section);
                assert_eq!(state.active, section);
                assert!(!state.menu_open);
                assert_eq!(state.scrolled, prior.scrolled);
                assert_eq!(state.loaded, prior.loaded);
            }
        }
    }

    #[test]
    fn test_request_unknown_id_leaves_state_unchanged() {
        let mut state = NavState {
            menu_open: true,
            active: Section::About,
            ..Default::default()
        };
        let before = state;
        let mut scrolled_to = None;
        let res = state.request("resume", |s| {
            scrolled_to = Some(s);
            true
        });
        assert_eq!(res, Err(NavError::UnknownSection("resume".to_string())));
        assert_eq!(scrolled_to, None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_request_missing_anchor_leaves_state_unchanged() {
        let mut state = NavState {
            menu_open: true,
            active: Section::About,
            ..Default::default()
        };
        let before = state;
        let res = state.request("projects", |_| false);
        assert_eq!(res, Ok(None));
        assert_eq!(state, before);
        assert!(state.menu_open);
    }

    #[test]
    fn test_request_scrolls_then_navigates() {
        for section in Section::ALL {
            let mut state = NavState {
                menu_open: true,
                active: Section::Contact,
                ..Default::default()
            };
            let mut scrolled_to = None;
            let res = state.request(section.id(), |s| {
                scrolled_to = Some(s);
                true
            });
            assert_eq!(res, Ok(Some(section)));
            assert_eq!(scrolled_to, Some(section));
            assert_eq!(state.active, section);
            assert!(!state.menu_open);
        }
    }

    #[test]
    fn test_scrolled_threshold_boundary() {
        let config = ScrollConfig::DEFAULT;
        let mut state = NavState::default();
        let none = |_: Section| None::<SectionBounds>;

        state.on_scroll(0.0, &config, none);
        assert!(!state.scrolled);
        state.on_scroll(50.0, &config, none);
        assert!(!state.scrolled);
        state.on_scroll(51.0, &config, none);
        assert!(state.scrolled);
        state.on_scroll(50.5, &config, none);
        assert!(state.scrolled);
        state.on_scroll(10.0, &config, none);
        assert!(!state.scrolled);
    }

    #[test]
    fn test_first_straddling_section_wins() {
        // overlapping bounds: both about and skills straddle the line
        let sections = [
            (Section::Home, -900.0, -100.0),
            (Section::About, -100.0, 300.0),
            (Section::Skills, 50.0, 900.0),
            (Section::Projects, 900.0, 1800.0),
            (Section::Contact, 1800.0, 2700.0),
        ];
        assert_eq!(section_at(100.0, layout(&sections)), Some(Section::About));
    }

    #[test]
    fn test_reference_line_edges_are_inclusive() {
        let top_edge = [(Section::Projects, 100.0, 800.0)];
        assert_eq!(section_at(100.0, layout(&top_edge)), Some(Section::Projects));

        let bottom_edge = [(Section::Contact, -500.0, 100.0)];
        assert_eq!(section_at(100.0, layout(&bottom_edge)), Some(Section::Contact));

        let just_below = [(Section::Contact, 100.5, 800.0)];
        assert_eq!(section_at(100.0, layout(&just_below)), None);
    }

    #[test]
    fn test_scroll_retains_active_when_nothing_matches() {
        let mut state = NavState {
            active: Section::Skills,
            ..Default::default()
        };
        let sections = [
            (Section::Home, 200.0, 900.0),
            (Section::About, 900.0, 1600.0),
        ];
        state.on_scroll(120.0, &ScrollConfig::DEFAULT, layout(&sections));
        assert_eq!(state.active, Section::Skills);
        assert!(state.scrolled);

        // missing anchors behave the same
        state.on_scroll(0.0, &ScrollConfig::DEFAULT, |_| None);
        assert_eq!(state.active, Section::Skills);
        assert!(!state.scrolled);
    }

    #[test]
    fn test_scroll_updates_active() {
        let mut state = NavState::default();
        let sections = [
            (Section::Home, -1400.0, -600.0),
            (Section::About, -600.0, 50.0),
            (Section::Skills, 50.0, 850.0),
        ];
        state.on_scroll(1450.0, &ScrollConfig::DEFAULT, layout(&sections));
        assert_eq!(state.active, Section::Skills);
        assert!(state.is_active(Section::Skills));
        assert!(!state.is_active(Section::Home));
    }

    #[test]
    fn test_custom_scroll_config() {
        let config = ScrollConfig {
            reference_line: 10.0,
            scrolled_threshold: 200.0,
        };
        let sections = [
            (Section::Home, -500.0, 50.0),
            (Section::About, 50.0, 600.0),
        ];
        let mut state = NavState::default();
        state.on_scroll(150.0, &config, layout(&sections));
        assert!(!state.scrolled);
        assert_eq!(state.active, Section::Home);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for open in [false, true] {
            let mut state = NavState {
                menu_open: open,
                ..Default::default()
            };
            state.toggle_menu();
            assert_eq!(state.menu_open, !open);
            state.toggle_menu();
            assert_eq!(state.menu_open, open);
        }
    }

    #[test]
    fn test_mark_loaded() {
        let mut state = NavState::default();
        assert!(!state.loaded);
        state.mark_loaded();
        state.mark_loaded();
        assert!(state.loaded);
    }
}
