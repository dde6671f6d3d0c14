use ratatui::style::Color;

/// The two supported appearances. Widgets never hold colors of their
/// own; they ask the active theme on every draw, so toggling takes
/// effect on the next frame.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn fg(self) -> Color {
        match self {
            Theme::Light => Color::Black,
            Theme::Dark => Color::White,
        }
    }

    pub fn bg(self) -> Color {
        match self {
            Theme::Light => Color::White,
            Theme::Dark => Color::Black,
        }
    }

    pub fn muted(self) -> Color {
        match self {
            Theme::Light => Color::DarkGray,
            Theme::Dark => Color::Gray,
        }
    }

    pub fn accent(self) -> Color {
        match self {
            Theme::Light => Color::Blue,
            Theme::Dark => Color::Cyan,
        }
    }
}
