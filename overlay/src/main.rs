//! Demo driver for the unique-item finder overlay
//!
//! Run with: cargo run -p uniquefinder-overlay
//!
//! Feeds the orchestrator a scripted set of ground items through a mock game
//! view and prints the resulting draw commands instead of rasterizing them.
//! Useful for eyeballing layout and blink behavior without a game client.

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use uniquefinder_core::{
    EntityId, GroundItemObservation, GroundLabel, ItemRarity, ModsFacet, RenderFacet,
    WorldItemFacet,
};
use uniquefinder_overlay::{GameView, RenderBackend, TextAlign, TextMeasurer, UniqueFinder};
use uniquefinder_types::{FinderSettings, RectF, Rgba, Vec2};

struct DemoView {
    items: Vec<GroundItemObservation>,
}

impl GameView for DemoView {
    fn ground_items(&self) -> Vec<GroundItemObservation> {
        self.items.clone()
    }
    fn player_grid_pos(&self) -> Option<Vec2> {
        Some(Vec2::new(100.0, 100.0))
    }
    fn ingame_ui_ready(&self) -> bool {
        true
    }
    fn fullscreen_panel_open(&self) -> bool {
        false
    }
    fn right_panel_open(&self) -> bool {
        false
    }
    fn viewport(&self) -> RectF {
        RectF::new(0.0, 0.0, 1920.0, 1080.0)
    }
    fn side_panel_anchor(&self) -> Vec2 {
        Vec2::new(1620.0, 180.0)
    }
    fn map_visible(&self) -> bool {
        true
    }
    fn grid_to_map_screen(&self, grid: Vec2) -> Vec2 {
        Vec2::new(960.0 + (grid.x - 100.0) * 3.0, 540.0 + (grid.y - 100.0) * 3.0)
    }
}

/// Prints draw commands instead of rasterizing them.
struct ConsoleBackend;

impl TextMeasurer for ConsoleBackend {
    fn measure_text(&self, text: &str) -> (f32, f32) {
        (text.chars().count() as f32 * 7.0, 13.0)
    }
}

impl RenderBackend for ConsoleBackend {
    fn draw_box(&mut self, rect: RectF, color: Rgba) {
        println!("  box   {:>7.1},{:>7.1} {}x{} {:?}", rect.x, rect.y, rect.width, rect.height, color);
    }
    fn draw_frame(&mut self, rect: RectF, color: Rgba, thickness: f32) {
        println!("  frame {:>7.1},{:>7.1} {}x{} t={} {:?}", rect.x, rect.y, rect.width, rect.height, thickness, color);
    }
    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Rgba) {
        println!("  line  {:.1},{:.1} -> {:.1},{:.1} t={} {:?}", from.x, from.y, to.x, to.y, thickness, color);
    }
    fn draw_text(&mut self, text: &str, pos: Vec2, _color: Rgba, align: TextAlign, scale: f32) {
        println!("  text  {:>7.1},{:>7.1} {:?} x{} {:?}", pos.x, pos.y, align, scale, text);
    }
}

fn ground_item(entity: u64, resource_key: &str, grid_pos: Vec2) -> GroundItemObservation {
    GroundItemObservation {
        entity: EntityId(entity),
        grid_pos,
        world_item: Some(WorldItemFacet {
            mods: Some(ModsFacet {
                rarity: ItemRarity::Unique,
                identified: false,
            }),
            render: Some(RenderFacet {
                resource_key: resource_key.to_string(),
            }),
        }),
        label: GroundLabel {
            rect: RectF::new(880.0, 480.0, 130.0, 22.0),
            visible: true,
            text_color: [175, 96, 37, 255],
            border_color: [120, 60, 20, 255],
            background_color: [0, 0, 0, 200],
        },
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let data_dir = std::env::temp_dir().join("uniquefinder-demo");
    let mut finder = UniqueFinder::with_data_dir(&data_dir);
    tracing::info!(arts = finder.mapping().len(), "finder ready");

    let settings = FinderSettings::default();
    let view = DemoView {
        items: vec![
            ground_item(1, "Art/2DItems/Belts/Headhunter.dds", Vec2::new(112.0, 96.0)),
            ground_item(2, "Art/2DItems/Belts/MageBlood.dds", Vec2::new(92.0, 131.0)),
            // Not on the watch-list; filtered out
            ground_item(3, "Art/2DItems/Flasks/TasteOfHate.dds", Vec2::new(104.0, 90.0)),
        ],
    };

    let mut backend = ConsoleBackend;
    let frame = Duration::from_millis(125);

    for n in 0..8 {
        finder.update(&view, &settings, frame);
        println!("frame {n} ({} matched):", finder.matched().len());
        finder.render(&view, &settings, &mut backend, frame);
        std::thread::sleep(frame);
    }
}
