use kurbo::Point;

/// One rendered data point of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AestheticRecord {
    /// Index of the source datum.
    pub index: usize,
    /// Representative canvas position (bar top, point center, sector centroid).
    pub represent_point: Point,
}

impl AestheticRecord {
    #[must_use]
    pub fn new(index: usize, represent_point: Point) -> Self {
        Self {
            index,
            represent_point,
        }
    }
}

/// Records sharing one visual encoding, in render order.
pub type AestheticGroup = Vec<AestheticRecord>;
