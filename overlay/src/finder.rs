//! Render orchestration
//!
//! Ties the matcher, blink timers and panel layout together on two cadences:
//! matching re-runs on a slow configurable interval, drawing happens every
//! frame. The host drives both through `update()` and `render()` with the
//! elapsed time since the previous call.

use std::path::Path;
use std::time::Duration;

use uniquefinder_core::{
    BlinkTimer, MatchOptions, MatchedItem, MatchedSet, UniqueArtMapping, match_items,
};
use uniquefinder_types::FinderSettings;

use crate::backend::{RenderBackend, TextMeasurer};
use crate::panel::{self, BORDER_WIDTH, PanelViewport};
use crate::view::GameView;

/// Thickness of the outline drawn around a matched item's label.
const OUTLINE_THICKNESS: f32 = 2.0;

/// The overlay's per-process state: the loaded art mapping, the current
/// matched set and one blink timer per visual channel.
pub struct UniqueFinder {
    mapping: UniqueArtMapping,
    matched: MatchedSet,
    since_match: Duration,
    panel_blink: BlinkTimer,
    trace_blink: BlinkTimer,
    outline_blink: BlinkTimer,
}

impl UniqueFinder {
    pub fn new(mapping: UniqueArtMapping) -> Self {
        if mapping.is_empty() {
            tracing::warn!("no unique arts loaded, the finder will match nothing");
        }
        Self {
            mapping,
            matched: MatchedSet::new(),
            since_match: Duration::ZERO,
            panel_blink: BlinkTimer::new(),
            trace_blink: BlinkTimer::new(),
            outline_blink: BlinkTimer::new(),
        }
    }

    /// Create a finder whose art mapping is loaded from `data_dir` (first
    /// run writes the bundled default there).
    pub fn with_data_dir(data_dir: &Path) -> Self {
        Self::new(UniqueArtMapping::load(data_dir))
    }

    pub fn mapping(&self) -> &UniqueArtMapping {
        &self.mapping
    }

    /// The matched items of the latest completed matching pass.
    pub fn matched(&self) -> &MatchedSet {
        &self.matched
    }

    /// Matching cadence: re-run the matcher once the configured update
    /// interval has elapsed. `dt` is the time since the previous call.
    pub fn update(&mut self, view: &dyn GameView, settings: &FinderSettings, dt: Duration) {
        self.since_match += dt;
        if self.since_match < Duration::from_millis(settings.common.update_interval_ms) {
            return;
        }
        self.since_match = Duration::ZERO;
        self.refresh_matches(view, settings);
    }

    /// Re-run the matcher unconditionally, for hosts that own the cadence
    /// themselves. The previous matched set is replaced wholesale, never
    /// patched in place.
    pub fn refresh_matches(&mut self, view: &dyn GameView, settings: &FinderSettings) {
        let observations = view.ground_items();
        let options = MatchOptions {
            hide_identified: settings.common.hide_identified,
        };
        self.matched = match_items(
            &observations,
            view.player_grid_pos(),
            &settings.watch_list,
            options,
            &self.mapping,
        );
    }

    /// Render cadence: emit this frame's draw commands for every enabled,
    /// currently-visible channel.
    pub fn render(
        &mut self,
        view: &dyn GameView,
        settings: &FinderSettings,
        backend: &mut dyn RenderBackend,
        dt: Duration,
    ) {
        if !view.ingame_ui_ready() || view.fullscreen_panel_open() {
            return;
        }
        let Some(player_pos) = view.player_grid_pos() else {
            return;
        };

        // Timers advance every frame, even for disabled channels, so a
        // channel re-enabled mid-session starts from a live phase
        let panel_on = self.panel_blink.advance(
            dt,
            Duration::from_millis(settings.panel.blink_interval_ms),
        );
        let trace_on = self.trace_blink.advance(
            dt,
            Duration::from_millis(settings.map_trace.blink_interval_ms),
        );
        let outline_on = self.outline_blink.advance(
            dt,
            Duration::from_millis(settings.label_outline.blink_interval_ms),
        );

        if self.matched.is_empty() {
            return;
        }

        let mut items: Vec<&MatchedItem> = self.matched.iter().collect();
        items.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        let draw_panel = settings.panel.enabled
            && (!settings.panel.blink || panel_on)
            && !view.right_panel_open();
        if draw_panel {
            let measurer: &dyn TextMeasurer = &*backend;
            let boxes = panel::layout_panel(
                items.iter().copied(),
                settings.panel.anchor,
                settings.panel.margin,
                settings.panel.text_scale,
                PanelViewport {
                    viewport: view.viewport(),
                    side_panel_anchor: view.side_panel_anchor(),
                },
                measurer,
            );
            for b in &boxes {
                backend.draw_box(b.rect, b.background_color);
                backend.draw_frame(b.rect, b.border_color, BORDER_WIDTH);
                backend.draw_text(&b.text, b.text_pos, b.text_color, b.align, settings.panel.text_scale);
            }
        }

        let draw_trace = settings.map_trace.enabled
            && (!settings.map_trace.blink || trace_on)
            && view.map_visible();
        let draw_outline = settings.label_outline.enabled
            && (!settings.label_outline.blink || outline_on)
            && !view.right_panel_open();

        if !draw_trace && !draw_outline {
            return;
        }

        let player_on_map = view.grid_to_map_screen(player_pos);
        for item in &items {
            if draw_trace {
                let item_on_map = view.grid_to_map_screen(item.observation.grid_pos);
                backend.draw_line(
                    item_on_map,
                    player_on_map,
                    settings.map_trace.thickness,
                    settings.map_trace.color,
                );
            }

            if draw_outline && item.observation.label.visible {
                let rect = item
                    .observation
                    .label
                    .rect
                    .inflate(OUTLINE_THICKNESS / 2.0, OUTLINE_THICKNESS / 2.0);
                backend.draw_frame(rect, settings.label_outline.frame_color, OUTLINE_THICKNESS);
            }
        }
    }
}
