use crate::game::decision::Decision;

const FIRST_BUTTON_Y: f32 = 300.0;
const BUTTON_SPACING: f32 = 100.0;
const BUTTON_W: f32 = 400.0;
const BUTTON_H: f32 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle positioned by its centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Edges count as inside.
    pub fn contains(&self, p: Point) -> bool {
        let half_w = self.w / 2.0;
        let half_h = self.h / 2.0;
        p.x >= self.x - half_w
            && p.x <= self.x + half_w
            && p.y >= self.y - half_h
            && p.y <= self.y + half_h
    }
}

/// Button rectangles for each option of `decision`, stacked down the screen.
pub fn option_buttons(width: f32, decision: &Decision) -> Vec<Rect> {
    (0..decision.options.len())
        .map(|i| Rect {
            x: width / 2.0,
            y: FIRST_BUTTON_Y + i as f32 * BUTTON_SPACING,
            w: BUTTON_W,
            h: BUTTON_H,
        })
        .collect()
}

/// Index of the option whose button is under `p`, if any.
pub fn option_at(width: f32, decision: &Decision, p: Point) -> Option<usize> {
    option_buttons(width, decision)
        .iter()
        .position(|rect| rect.contains(p))
}

/// Whether the pointer is over any option (the renderer switches to a hand cursor).
pub fn hovering(width: f32, decision: &Decision, p: Point) -> bool {
    option_at(width, decision, p).is_some()
}
