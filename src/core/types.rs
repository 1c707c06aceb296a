use kurbo::{Point, Rect};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Canvas rectangle covering the full viewport.
    #[must_use]
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

#[must_use]
pub fn is_finite_point(point: Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}

/// Plotting regions must be finite with a strictly positive extent on both axes.
pub fn validate_region(region: Rect) -> ChartResult<()> {
    let finite = [region.x0, region.y0, region.x1, region.y1]
        .iter()
        .all(|value| value.is_finite());
    if !finite {
        return Err(ChartError::InvalidData(
            "coordinate region must be finite".to_owned(),
        ));
    }
    if region.x1 <= region.x0 || region.y1 <= region.y0 {
        return Err(ChartError::InvalidData(format!(
            "coordinate region must have positive extent, got {region:?}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_range(range: [f64; 2], field_name: &str) -> ChartResult<()> {
    if !range[0].is_finite() || !range[1].is_finite() || range[0] == range[1] {
        return Err(ChartError::InvalidData(format!(
            "{field_name} must be finite and non-zero"
        )));
    }
    Ok(())
}
