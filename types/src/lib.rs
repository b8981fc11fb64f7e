pub mod geometry;
pub mod settings;

// Re-exports for convenience
pub use geometry::{RectF, Vec2};
pub use settings::{
    CommonSettings, FinderSettings, LabelOutlineSettings, MapTraceSettings, PanelAnchor,
    PanelSettings, Rgba,
};
