// Anchored placement for text on the terminal grid

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

/// Which point of a text box sits on the anchor position.
///
/// `Top`, `Bottom`, `Left` and `Right` pin a single edge; the other axis stays
/// at the frame's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    MidTop,
    MidBottom,
    MidLeft,
    MidRight,
}

/// Rect for a `width` x `height` box anchored at `(x, y)`, kept inside `bounds`
pub fn anchored_rect(anchor: Anchor, x: u16, y: u16, width: u16, height: u16, bounds: Rect) -> Rect {
    let (x, y) = (i32::from(x), i32::from(y));
    let (w, h) = (i32::from(width), i32::from(height));
    let (origin_x, origin_y) = (i32::from(bounds.x), i32::from(bounds.y));

    let (left, top) = match anchor {
        Anchor::Center => (x - w / 2, y - h / 2),
        Anchor::Top => (origin_x, y),
        Anchor::Bottom => (origin_x, y - h),
        Anchor::Left => (x, origin_y),
        Anchor::Right => (x - w, origin_y),
        Anchor::TopLeft => (x, y),
        Anchor::TopRight => (x - w, y),
        Anchor::BottomLeft => (x, y - h),
        Anchor::BottomRight => (x - w, y - h),
        Anchor::MidTop => (x - w / 2, y),
        Anchor::MidBottom => (x - w / 2, y - h),
        Anchor::MidLeft => (x, y - h / 2),
        Anchor::MidRight => (x - w, y - h / 2),
    };

    let width = width.min(bounds.width);
    let height = height.min(bounds.height);
    let max_left = i32::from(bounds.right()) - i32::from(width);
    let max_top = i32::from(bounds.bottom()) - i32::from(height);

    Rect {
        x: left.clamp(origin_x, max_left) as u16,
        y: top.clamp(origin_y, max_top) as u16,
        width,
        height,
    }
}
