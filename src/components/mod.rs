pub mod catalog_screen;
pub mod detail_screen;
pub mod notice_modal;

use ratatui::style::Color;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use catalog_screen::{CatalogScreen, CatalogScreenProps};
pub use detail_screen::{DetailScreen, DetailScreenProps};
pub use notice_modal::{NoticeModal, NoticeModalProps};

pub const BG_BASE: Color = Color::Rgb(12, 18, 28);
pub const BG_PANEL: Color = Color::Rgb(20, 32, 46);
pub const BG_HIGHLIGHT: Color = Color::Rgb(28, 92, 110);
pub const TEXT_MAIN: Color = Color::Rgb(232, 242, 244);
pub const TEXT_DIM: Color = Color::Rgb(176, 195, 207);
pub const ACCENT_TEAL: Color = Color::Rgb(72, 204, 184);
pub const ACCENT_GOLD: Color = Color::Rgb(228, 176, 88);

pub const LOADING_TEXT: &str = "Loading...";
