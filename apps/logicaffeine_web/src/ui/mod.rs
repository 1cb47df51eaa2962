pub mod app;
pub mod state;
pub mod components;
pub mod hooks;
pub mod router;
pub mod pages;
pub mod theme;
pub mod theme_state;
pub mod responsive;
pub mod examples;
pub mod seo;

pub use app::App;
pub use theme::{colors, font_size, font_family, spacing, radius};
pub use theme_state::{Theme, ThemeState};
pub use responsive::{breakpoints, media, touch};
pub use seo::{JsonLd, JsonLdMultiple};
