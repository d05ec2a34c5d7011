pub mod converter;
pub mod curves;
pub mod error;
pub mod layout;
pub mod models;
pub mod outline;
pub mod renderer;
pub mod rng;
pub mod styles;

pub use converter::convert_svg_to_png;
pub use error::ScrollworkError;
pub use layout::{layout, LayoutCache};
pub use models::{BoundingRegion, Config, Motif};
pub use outline::Outline;
pub use renderer::generate_svg;
pub use rng::Mulberry32;
pub use styles::{StyleName, StyleProfile};
