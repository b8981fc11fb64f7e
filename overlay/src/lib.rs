pub mod backend;
pub mod finder;
pub mod panel;
pub mod view;

// Re-exports for convenience
pub use backend::{RenderBackend, TextAlign, TextMeasurer};
pub use finder::UniqueFinder;
pub use panel::{LayoutBox, PanelViewport, layout_panel};
pub use view::GameView;
