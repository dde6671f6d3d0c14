pub mod app;
pub mod calc;
pub mod converter;
pub mod theme;
pub mod ui;

pub use app::App;
pub use converter::Converter;
pub use theme::Theme;
