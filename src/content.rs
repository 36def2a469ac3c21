//! Static page content: who, what and where to reach.

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Server,
    Code,
    Database,
    Mail,
    Phone,
    MapPin,
    Github,
    Linkedin,
    GraduationCap,
    Briefcase,
    ChevronDown,
    ExternalLink,
    Menu,
    Close,
}

impl Icon {
    /// Icon font class; brand glyphs come from devicon, the rest from `input.css`.
    pub fn class(self) -> &'static str {
        match self {
            Icon::Server => "extra-server",
            Icon::Code => "extra-code",
            Icon::Database => "extra-database",
            Icon::Mail => "extra-email",
            Icon::Phone => "extra-phone",
            Icon::MapPin => "extra-location",
            Icon::Github => "devicon-github-plain",
            Icon::Linkedin => "devicon-linkedin-plain",
            Icon::GraduationCap => "extra-graduation",
            Icon::Briefcase => "extra-briefcase",
            Icon::ChevronDown => "extra-chevron-down",
            Icon::ExternalLink => "extra-link",
            Icon::Menu => "extra-menu",
            Icon::Close => "extra-close",
        }
    }
}

pub struct Identity {
    pub name: &'static str,
    pub short_name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub role_highlight: &'static str,
    pub degree: &'static str,
    pub profile_image: &'static str,
}

pub const IDENTITY: Identity = Identity {
    name: "Moctar Cherif BICHARA",
    short_name: "Moctar B.",
    initials: "MB",
    role: "Développeur ",
    role_highlight: "Full-Stack",
    degree: "Master 1 Ingénierie du Développement Logiciel",
    profile_image: "/profile.jpg",
};

pub const FAVICON: &str = "/favicon.svg";

pub struct Badge {
    pub label: &'static str,
    pub theme: Theme,
}

pub const HERO_BADGES: &[Badge] = &[
    Badge {
        label: "Java",
        theme: Theme::Blue,
    },
    Badge {
        label: "Spring Boot",
        theme: Theme::Cyan,
    },
    Badge {
        label: "React",
        theme: Theme::Purple,
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub theme: Theme,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: "4+",
        label: "Projets",
        theme: Theme::Blue,
    },
    Stat {
        value: "10+",
        label: "Technologies",
        theme: Theme::Cyan,
    },
    Stat {
        value: "2",
        label: "Ans d'exp",
        theme: Theme::Purple,
    },
];

pub struct TimelineEntry {
    pub title: &'static str,
    pub place: &'static str,
    pub period: &'static str,
    pub detail: Option<&'static str>,
}

pub const EDUCATION: &[TimelineEntry] = &[
    TimelineEntry {
        title: "Master Ingénierie du développement logiciel",
        place: "Aix Marseille Université",
        period: "2025-2027",
        detail: None,
    },
    TimelineEntry {
        title: "Licence Informatique",
        place: "Université Clermont Auvergne",
        period: "2024-2025",
        detail: None,
    },
];

pub const EXPERIENCE: &[TimelineEntry] = &[
    TimelineEntry {
        title: "Tuteur en Java",
        place: "ChadHubDigit",
        period: "2024-2025",
        detail: Some("Encadrement algorithmique, Java à distance"),
    },
    TimelineEntry {
        title: "Développeur Web",
        place: "ChadHubDigit",
        period: "2023-2024",
        detail: Some("Java, React.js, API REST, CI"),
    },
];

pub struct SkillCategory {
    pub name: &'static str,
    pub icon: Icon,
    pub theme: Theme,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Backend",
        icon: Icon::Server,
        theme: Theme::Blue,
        skills: &[
            "Java",
            "Spring Boot",
            "Python",
            "PHP",
            "Laravel",
            "C/C++",
            "Kafka",
        ],
    },
    SkillCategory {
        name: "Frontend",
        icon: Icon::Code,
        theme: Theme::Cyan,
        skills: &["JavaScript", "React.js", "Vue.js", "Angular"],
    },
    SkillCategory {
        name: "Database",
        icon: Icon::Database,
        theme: Theme::Purple,
        skills: &["SQL", "MySQL", "MongoDB", "Oracle"],
    },
    SkillCategory {
        name: "DevOps",
        icon: Icon::Server,
        theme: Theme::Green,
        skills: &["Git", "Docker", "GitLab CI", "AWS"],
    },
];

/// Methodologies, tools and languages listed under the skill grid.
pub struct Practice {
    pub title: &'static str,
    pub theme: Theme,
    pub items: &'static [&'static str],
}

pub const PRACTICES: &[Practice] = &[
    Practice {
        title: "Méthodologies",
        theme: Theme::Blue,
        items: &["Agile (Scrum)", "TDD", "CI/CD"],
    },
    Practice {
        title: "Outils",
        theme: Theme::Cyan,
        items: &["Git", "Docker", "UML", "JUnit"],
    },
    Practice {
        title: "Langues",
        theme: Theme::Purple,
        items: &["Français", "Anglais"],
    },
];

pub struct Project {
    pub title: &'static str,
    pub tech: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub repository: Option<&'static str>,
}

impl Project {
    /// Outbound links rendered on the project card.
    pub fn links(&self) -> Vec<&'static str> {
        self.repository.into_iter().collect()
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Réservation Vols",
        tech: "Java • MySQL",
        description: "Système de réservation de vols avec API REST et interface moderne",
        icon: "✈️",
        repository: Some("https://github.com/benmoctar/tp4-reservation-vols"),
    },
    Project {
        title: "Othello Game",
        tech: "Java • Test • Game Logic",
        description: "Implémentation du jeu de société Othello",
        icon: "🎮",
        repository: Some("https://github.com/benmoctar/othello-game-27"),
    },
    Project {
        title: "Mars Rover Challenge",
        tech: "Java • Test • CI/CD",
        description: "Simulation de navigation pour mars-rover",
        icon: "🚀",
        repository: Some("https://github.com/benmoctar/Mars-Rover-Bichara-Moctar-Cherif"),
    },
    Project {
        title: "Mini-Projet Complexité",
        tech: "Algorithm • Data Structures",
        description: "Analyse de complexité algorithmique",
        icon: "📊",
        repository: Some("https://github.com/benmoctar/Mini-Projets_complexite_2025"),
    },
];

/// Where a contact card points. A card is either a link or a plain label, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTarget {
    Link(&'static str),
    DisplayOnly,
}

impl ContactTarget {
    pub fn href(self) -> Option<&'static str> {
        match self {
            ContactTarget::Link(href) => Some(href),
            ContactTarget::DisplayOnly => None,
        }
    }

    /// Web links open in a new tab; `mailto:` and `tel:` stay in place.
    pub fn opens_new_tab(self) -> bool {
        self.href().is_some_and(|href| href.starts_with("http"))
    }
}

pub struct ContactMethod {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: Icon,
    pub theme: Theme,
    pub target: ContactTarget,
}

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        label: "Email",
        value: "bicharamoctarcherif@gmail.com",
        icon: Icon::Mail,
        theme: Theme::Blue,
        target: ContactTarget::Link("mailto:bicharamoctarcherif@gmail.com"),
    },
    ContactMethod {
        label: "Téléphone",
        value: "07 44 89 63 33",
        icon: Icon::Phone,
        theme: Theme::Cyan,
        target: ContactTarget::Link("tel:0744896333"),
    },
    ContactMethod {
        label: "Localisation",
        value: "Marseille, France",
        icon: Icon::MapPin,
        theme: Theme::Purple,
        target: ContactTarget::DisplayOnly,
    },
    ContactMethod {
        label: "GitHub",
        value: "benmoctar",
        icon: Icon::Github,
        theme: Theme::Gray,
        target: ContactTarget::Link("https://github.com/benmoctar"),
    },
];

/// Full-width card under the contact grid.
pub const LINKEDIN: ContactMethod = ContactMethod {
    label: "LinkedIn",
    value: "Bichara Moctar Cherif Ambadi",
    icon: Icon::Linkedin,
    theme: Theme::Blue,
    target: ContactTarget::Link(
        "https://www.linkedin.com/in/bichara-moctar-cherif-ambadi-248ba3223/",
    ),
};

pub const PROFILE_SUMMARY: &str = "Passionné par le développement logiciel, je recherche un ";
pub const INTERNSHIP: &str = "stage de 3 à 5 mois dès Mai 2026";
pub const APPRENTICESHIP: &str = "l'alternance pour la rentrée de septembre 2026";
pub const PROFILE_CLOSING: &str = ". Fort d'une expérience en développement Full-Stack avec Java, Spring Boot et React.js, je suis prêt à contribuer à des projets innovants en environnement Agile.";

pub const AVAILABILITY: &str = "Disponible pour un stage de 3 à 5 mois et ouvert à l'alternance pour la rentrée de septembre 2026";
pub const AVAILABILITY_DETAIL: &str = "Dès Mai 2026 • Permis B";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_links_follow_repository() {
        for project in PROJECTS {
            let links = project.links();
            match project.repository {
                Some(url) => assert_eq!(links, vec![url]),
                None => assert!(links.is_empty()),
            }
        }

        let unpublished = Project {
            title: "Draft",
            tech: "Rust",
            description: "Not on GitHub yet",
            icon: "🦀",
            repository: None,
        };
        assert!(unpublished.links().is_empty());
    }

    #[test]
    fn test_projects_point_at_repositories() {
        assert_eq!(PROJECTS.len(), 4);
        for project in PROJECTS {
            let url = project.repository.expect("every listed project is published");
            assert!(url.starts_with("https://github.com/benmoctar/"), "{url}");
        }
    }

    #[test]
    fn test_contact_targets() {
        let location = CONTACT_METHODS
            .iter()
            .find(|c| c.label == "Localisation")
            .expect("location card");
        assert_eq!(location.target, ContactTarget::DisplayOnly);
        assert_eq!(location.target.href(), None);
        assert!(!location.target.opens_new_tab());

        let linked = CONTACT_METHODS
            .iter()
            .filter(|c| c.target.href().is_some())
            .count();
        assert_eq!(linked, CONTACT_METHODS.len() - 1);
    }

    #[test]
    fn test_only_web_links_open_new_tab() {
        let tabs = CONTACT_METHODS
            .iter()
            .chain(std::iter::once(&LINKEDIN))
            .map(|c| (c.label, c.target.opens_new_tab()))
            .collect::<Vec<_>>();
        assert_eq!(
            tabs,
            vec![
                ("Email", false),
                ("Téléphone", false),
                ("Localisation", false),
                ("GitHub", true),
                ("LinkedIn", true),
            ]
        );
    }

    #[test]
    fn test_skill_categories_in_order() {
        let names = SKILL_CATEGORIES.iter().map(|c| c.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["Backend", "Frontend", "Database", "DevOps"]);
        assert!(SKILL_CATEGORIES.iter().all(|c| !c.skills.is_empty()));
    }

    #[test]
    fn test_favicon_is_shipped() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(FAVICON.trim_start_matches('/'));
        assert!(path.is_file(), "missing asset {}", path.display());
    }

    #[test]
    fn test_initials_fit_badge() {
        assert_eq!(IDENTITY.initials, "MB");
        assert!(IDENTITY.profile_image.starts_with('/'));
    }
}
