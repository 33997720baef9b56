/// Centered square region of a source image. Offsets stay fractional so odd
/// margins are split evenly instead of being truncated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquareCrop {
    pub left: f64,
    pub top: f64,
    pub side: f64,
}

impl SquareCrop {
    pub fn centered(width: u32, height: u32) -> Self {
        let w = width as f64;
        let h = height as f64;
        let side = w.min(h);

        Self {
            left: (w - side) / 2.0,
            top: (h - side) / 2.0,
            side,
        }
    }
    pub fn right(&self) -> f64 {
        self.left + self.side
    }
    pub fn bottom(&self) -> f64 {
        self.top + self.side
    }
    /// Whole pixel `(left, top, right, bottom)` box, each edge rounded half to even.
    /// An odd margin on one axis can leave the box one pixel wider than tall.
    pub fn pixel_bounds(&self) -> (u32, u32, u32, u32) {
        (
            self.left.round_ties_even() as u32,
            self.top.round_ties_even() as u32,
            self.right().round_ties_even() as u32,
            self.bottom().round_ties_even() as u32,
        )
    }
}
