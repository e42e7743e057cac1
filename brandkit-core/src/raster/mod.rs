//! PNG composition: logo banners and the favicon.

pub mod banner;
pub mod bitmap_font;
pub mod canvas;
pub mod enhance;
pub mod favicon;
pub mod fonts;
pub mod text;

pub use canvas::Background;
pub use text::Typeface;
