//! Host game-state seam
//!
//! Everything the orchestrator needs from the running game client, pulled
//! once per pass. Reading live entity/world memory is the host's problem;
//! this crate only ever sees resolved snapshots.

use uniquefinder_core::GroundItemObservation;
use uniquefinder_types::{RectF, Vec2};

pub trait GameView {
    /// Snapshot of the currently visible ground items; may be empty.
    fn ground_items(&self) -> Vec<GroundItemObservation>;

    /// The player's grid position, when known.
    fn player_grid_pos(&self) -> Option<Vec2>;

    /// False during loading screens etc.; rendering becomes a no-op.
    fn ingame_ui_ready(&self) -> bool;

    /// A full-screen panel (world map, options, ...) is covering the view.
    fn fullscreen_panel_open(&self) -> bool;

    /// The right-side inventory/vendor panel is open.
    fn right_panel_open(&self) -> bool;

    /// The game viewport in screen coordinates.
    fn viewport(&self) -> RectF;

    /// Screen point the right-hand UI stack hangs from. An x-coordinate of
    /// zero or less means the reference panel is absent or offscreen.
    fn side_panel_anchor(&self) -> Vec2;

    /// The large map overlay is currently visible.
    fn map_visible(&self) -> bool;

    /// Project a grid position into large-map screen space.
    fn grid_to_map_screen(&self, grid: Vec2) -> Vec2;
}
