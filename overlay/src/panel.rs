//! Panel stack layout
//!
//! Computes the vertical stack of name boxes for the matched-item panel.
//! Pure geometry: measured text in, positioned boxes out, no drawing calls —
//! the orchestrator turns the boxes into backend commands, and blink gating
//! happens entirely in the caller.

use uniquefinder_core::MatchedItem;
use uniquefinder_types::{PanelAnchor, RectF, Rgba, Vec2};

use crate::backend::{TextAlign, TextMeasurer};

/// Vertical gap between stacked boxes.
pub const ITEM_MARGIN: f32 = 4.0;
/// Horizontal inset of the text inside its box.
pub const TEXT_PADDING_X: f32 = 5.0;
/// Vertical inset of the text inside its box.
pub const TEXT_PADDING_Y: f32 = 2.0;
/// Frame thickness around each box.
pub const BORDER_WIDTH: f32 = 1.0;

/// Fixed y-offset of a left-anchored stack.
const LEFT_ANCHOR_Y: f32 = 200.0;
/// Fallback y when the right-side UI reference point is missing.
const RIGHT_FALLBACK_Y: f32 = 500.0;

/// One positioned panel entry, ready to draw.
#[derive(Debug, Clone)]
pub struct LayoutBox {
    pub rect: RectF,
    pub text: String,
    pub text_pos: Vec2,
    pub align: TextAlign,
    pub text_color: Rgba,
    pub border_color: Rgba,
    pub background_color: Rgba,
}

/// Screen geometry the panel anchors against.
#[derive(Debug, Clone, Copy)]
pub struct PanelViewport {
    pub viewport: RectF,
    /// Reference point of the game's right-hand UI stack; x <= 0 when the
    /// reference panel is absent.
    pub side_panel_anchor: Vec2,
}

/// Lay out the panel stack for `items`, which the caller supplies ordered by
/// ascending distance.
///
/// Boxes advance downward from the anchor for Left/Top/Right, and upward for
/// Bottom so the nearest item sits at the bottom edge.
pub fn layout_panel<'a, I>(
    items: I,
    anchor: PanelAnchor,
    margin: f32,
    text_scale: f32,
    view: PanelViewport,
    measurer: &dyn TextMeasurer,
) -> Vec<LayoutBox>
where
    I: IntoIterator<Item = &'a MatchedItem>,
{
    let center_x = view.viewport.x + view.viewport.width / 2.0;

    let (mut pos, align) = match anchor {
        PanelAnchor::Left => (Vec2::new(view.viewport.x + margin, LEFT_ANCHOR_Y), TextAlign::Left),
        PanelAnchor::Top => (Vec2::new(center_x, view.viewport.y + margin), TextAlign::Center),
        PanelAnchor::Right => {
            let reference = view.side_panel_anchor;
            let pos = if reference.x <= 0.0 {
                // Reference panel absent/offscreen: hang from the viewport's
                // right edge instead of laying out off-screen.
                Vec2::new(view.viewport.right() - margin, RIGHT_FALLBACK_Y)
            } else {
                Vec2::new(reference.x - margin, reference.y)
            };
            (pos, TextAlign::Right)
        }
        PanelAnchor::Bottom => (
            Vec2::new(center_x, view.viewport.bottom() - margin),
            TextAlign::Center,
        ),
    };

    let mut boxes = Vec::new();
    for item in items {
        let (text_w, text_h) = measurer.measure_text(&item.name);
        // Padding and border scale with the text on the horizontal axis only
        let box_w = text_w * text_scale + (TEXT_PADDING_X * 2.0 + BORDER_WIDTH * 2.0) * text_scale;
        let box_h = text_h * text_scale + TEXT_PADDING_Y * 2.0 + BORDER_WIDTH * 2.0;

        let (rect, text_pos) = match anchor {
            PanelAnchor::Left => (
                RectF::new(pos.x, pos.y, box_w, box_h),
                Vec2::new(pos.x + TEXT_PADDING_X, pos.y + BORDER_WIDTH * 2.0),
            ),
            PanelAnchor::Top => (
                RectF::new(pos.x - box_w / 2.0, pos.y, box_w, box_h),
                Vec2::new(pos.x + BORDER_WIDTH, pos.y + BORDER_WIDTH * 2.0),
            ),
            PanelAnchor::Right => (
                RectF::new(pos.x - box_w, pos.y, box_w, box_h),
                Vec2::new(pos.x - TEXT_PADDING_X, pos.y + BORDER_WIDTH * 2.0),
            ),
            // Bottom grows upward: the box sits above the current anchor
            PanelAnchor::Bottom => (
                RectF::new(pos.x - box_w / 2.0, pos.y - box_h, box_w, box_h),
                Vec2::new(pos.x + BORDER_WIDTH, pos.y - box_h + BORDER_WIDTH * 2.0),
            ),
        };

        boxes.push(LayoutBox {
            rect,
            text: item.name.clone(),
            text_pos,
            align,
            text_color: item.observation.label.text_color,
            border_color: item.observation.label.border_color,
            background_color: item.observation.label.background_color,
        });

        let step = box_h + ITEM_MARGIN;
        pos.y += if anchor == PanelAnchor::Bottom { -step } else { step };
    }

    boxes
}
