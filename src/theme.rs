/// Accent colours used by skill categories, contact cards and hero badges.
///
/// Class names are spelled out in full so the Tailwind scanner sees every one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Blue,
    Cyan,
    Purple,
    Green,
    Gray,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Blue,
        Theme::Cyan,
        Theme::Purple,
        Theme::Green,
        Theme::Gray,
    ];

    /// Skill category card background, border and hover shadow.
    pub fn card(self) -> &'static str {
        match self {
            Theme::Blue => "bg-gradient-to-br from-blue-900/50 to-blue-800/50 border-blue-500/30 hover:border-blue-400 hover:shadow-blue-500/20",
            Theme::Cyan => "bg-gradient-to-br from-cyan-900/50 to-cyan-800/50 border-cyan-500/30 hover:border-cyan-400 hover:shadow-cyan-500/20",
            Theme::Purple => "bg-gradient-to-br from-purple-900/50 to-purple-800/50 border-purple-500/30 hover:border-purple-400 hover:shadow-purple-500/20",
            Theme::Green => "bg-gradient-to-br from-green-900/50 to-green-800/50 border-green-500/30 hover:border-green-400 hover:shadow-green-500/20",
            Theme::Gray => "bg-gradient-to-br from-gray-900/50 to-gray-800/50 border-gray-500/30 hover:border-gray-400 hover:shadow-gray-500/20",
        }
    }

    /// Foreground colour for icons and headings.
    pub fn text(self) -> &'static str {
        match self {
            Theme::Blue => "text-blue-400",
            Theme::Cyan => "text-cyan-400",
            Theme::Purple => "text-purple-400",
            Theme::Green => "text-green-400",
            Theme::Gray => "text-gray-400",
        }
    }

    pub fn border(self) -> &'static str {
        match self {
            Theme::Blue => "border-blue-500/20 hover:border-blue-500/40",
            Theme::Cyan => "border-cyan-500/20 hover:border-cyan-500/40",
            Theme::Purple => "border-purple-500/20 hover:border-purple-500/40",
            Theme::Green => "border-green-500/20 hover:border-green-500/40",
            Theme::Gray => "border-gray-500/20 hover:border-gray-500/40",
        }
    }

    /// Skill chip inside a category card.
    pub fn chip(self) -> &'static str {
        match self {
            Theme::Blue => "bg-blue-500/20 hover:bg-blue-500/30",
            Theme::Cyan => "bg-cyan-500/20 hover:bg-cyan-500/30",
            Theme::Purple => "bg-purple-500/20 hover:bg-purple-500/30",
            Theme::Green => "bg-green-500/20 hover:bg-green-500/30",
            Theme::Gray => "bg-gray-500/20 hover:bg-gray-500/30",
        }
    }

    /// Hero technology badge.
    pub fn badge(self) -> &'static str {
        match self {
            Theme::Blue => "bg-blue-500/20 border-blue-500/30",
            Theme::Cyan => "bg-cyan-500/20 border-cyan-500/30",
            Theme::Purple => "bg-purple-500/20 border-purple-500/30",
            Theme::Green => "bg-green-500/20 border-green-500/30",
            Theme::Gray => "bg-gray-500/20 border-gray-500/30",
        }
    }

    /// Contact card background. `linked` adds the hover state of clickable cards.
    pub fn tile(self, linked: bool) -> &'static str {
        match (self, linked) {
            (Theme::Blue, false) => "bg-blue-900/30",
            (Theme::Blue, true) => "bg-blue-900/30 hover:bg-blue-900/50",
            (Theme::Cyan, false) => "bg-cyan-900/30",
            (Theme::Cyan, true) => "bg-cyan-900/30 hover:bg-cyan-900/50",
            (Theme::Purple, false) => "bg-purple-900/30",
            (Theme::Purple, true) => "bg-purple-900/30 hover:bg-purple-900/50",
            (Theme::Green, false) => "bg-green-900/30",
            (Theme::Green, true) => "bg-green-900/30 hover:bg-green-900/50",
            (Theme::Gray, false) => "bg-gray-900/30",
            (Theme::Gray, true) => "bg-gray-900/30 hover:bg-gray-900/50",
        }
    }

    /// Rounded icon holder on contact cards.
    pub fn icon_tile(self, linked: bool) -> &'static str {
        match (self, linked) {
            (Theme::Blue, false) => "bg-blue-500/20",
            (Theme::Blue, true) => "bg-blue-500/20 group-hover:bg-blue-500/30",
            (Theme::Cyan, false) => "bg-cyan-500/20",
            (Theme::Cyan, true) => "bg-cyan-500/20 group-hover:bg-cyan-500/30",
            (Theme::Purple, false) => "bg-purple-500/20",
            (Theme::Purple, true) => "bg-purple-500/20 group-hover:bg-purple-500/30",
            (Theme::Green, false) => "bg-green-500/20",
            (Theme::Green, true) => "bg-green-500/20 group-hover:bg-green-500/30",
            (Theme::Gray, false) => "bg-gray-500/20",
            (Theme::Gray, true) => "bg-gray-500/20 group-hover:bg-gray-500/30",
        }
    }
}
