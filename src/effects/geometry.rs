/// Viewport-space rectangle of an interactive element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElemRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElemRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A zero-area rect cannot host the follower.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Pointer offset from the element center, -1..=1 on each axis for a
    /// pointer inside the rect.
    pub fn normalized_offset(&self, x: f64, y: f64) -> (f64, f64) {
        let nx = ((x - self.left) / self.width - 0.5) * 2.0;
        let ny = ((y - self.top) / self.height - 0.5) * 2.0;
        (nx, ny)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_has_zero_offset() {
        let rect = ElemRect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(rect.normalized_offset(50.0, 20.0), (0.0, 0.0));
    }

    #[test]
    fn corners_map_to_unit_offsets() {
        let rect = ElemRect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(rect.normalized_offset(10.0, 20.0), (-1.0, -1.0));
        assert_eq!(rect.normalized_offset(110.0, 60.0), (1.0, 1.0));
    }

    #[test]
    fn zero_size_is_degenerate() {
        assert!(ElemRect::new(5.0, 5.0, 0.0, 40.0).is_degenerate());
        assert!(ElemRect::new(5.0, 5.0, 100.0, 0.0).is_degenerate());
        assert!(!ElemRect::new(5.0, 5.0, 1.0, 1.0).is_degenerate());
    }
}
