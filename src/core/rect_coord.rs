use kurbo::{Point, Rect};

use crate::core::coord::CoordConv;
use crate::core::types::{validate_range, validate_region};
use crate::error::ChartResult;

/// Cartesian converter between normalized data space and canvas pixels.
///
/// Data coordinates are fractions of the configured ranges. Horizontal pixels
/// grow from `region.x0`, vertical pixels grow upward from `region.y1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectCoordConv {
    region: Rect,
    horizontals: [f64; 2],
    verticals: [f64; 2],
    transposed: bool,
}

impl RectCoordConv {
    pub fn new(
        region: Rect,
        horizontal_range: [f64; 2],
        vertical_range: [f64; 2],
        transposed: bool,
    ) -> ChartResult<Self> {
        validate_region(region)?;
        validate_range(horizontal_range, "horizontal range")?;
        validate_range(vertical_range, "vertical range")?;

        let width = region.width();
        let height = region.height();
        Ok(Self {
            region,
            horizontals: [
                region.x0 + width * horizontal_range[0],
                region.x0 + width * horizontal_range[1],
            ],
            verticals: [
                region.y1 - height * vertical_range[0],
                region.y1 - height * vertical_range[1],
            ],
            transposed,
        })
    }

    /// Full-region converter: data `[0, 1]` spans the region on both axes.
    pub fn full(region: Rect, transposed: bool) -> ChartResult<Self> {
        Self::new(region, [0.0, 1.0], [0.0, 1.0], transposed)
    }

    #[must_use]
    pub fn horizontals(&self) -> [f64; 2] {
        self.horizontals
    }

    #[must_use]
    pub fn verticals(&self) -> [f64; 2] {
        self.verticals
    }
}

impl CoordConv for RectCoordConv {
    fn convert(&self, input: Point) -> Point {
        let input = if self.transposed {
            Point::new(input.y, input.x)
        } else {
            input
        };
        let [left, right] = self.horizontals;
        let [bottom, top] = self.verticals;
        Point::new(
            left + (right - left) * input.x,
            bottom + (top - bottom) * input.y,
        )
    }

    fn invert(&self, position: Point) -> Point {
        let [left, right] = self.horizontals;
        let [bottom, top] = self.verticals;
        let x = (position.x - left) / (right - left);
        let y = (position.y - bottom) / (top - bottom);
        if self.transposed {
            Point::new(y, x)
        } else {
            Point::new(x, y)
        }
    }

    fn region(&self) -> Rect {
        self.region
    }

    fn transposed(&self) -> bool {
        self.transposed
    }
}
