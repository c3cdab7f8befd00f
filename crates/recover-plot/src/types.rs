// File: crates/recover-plot/src/types.rs
// Summary: Figure sizing constants and per-panel margins.

/// Default width of one panel in pixels; the figure grows with the series count.
pub const PANEL_WIDTH: i32 = 420;
/// Default figure height in pixels.
pub const HEIGHT: i32 = 360;

/// Panel margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Width taken out of a panel by the side margins.
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Height taken out of a panel by the title and tick margins.
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        // room for a title on top and rotated-free year ticks below
        Self::new(64, 16, 36, 40)
    }
}
