use core::fmt;
use serde::{Deserialize, Serialize};

/// CSS color shown on every card while the real colors are hidden.
pub const NEUTRAL_COLOR: &str = "slategray";

/// Card colors, one per grid position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Pink,
    Purple,
    Yellow,
    Orange,
    Brown,
    Green,
    Indigo,
}

impl Color {
    /// Every color in the order a fresh deck starts with.
    pub const ALL: [Color; 9] = [
        Color::Red,
        Color::Blue,
        Color::Pink,
        Color::Purple,
        Color::Yellow,
        Color::Orange,
        Color::Brown,
        Color::Green,
        Color::Indigo,
    ];

    /// CSS color keyword.
    pub const fn css_name(self) -> &'static str {
        use Color::*;
        match self {
            Red => "red",
            Blue => "blue",
            Pink => "pink",
            Purple => "purple",
            Yellow => "yellow",
            Orange => "orange",
            Brown => "brown",
            Green => "green",
            Indigo => "indigo",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}
