use kurbo::{Point, Rect};

use crate::core::polar_coord::PolarCoordConv;
use crate::core::rect_coord::RectCoordConv;
use crate::error::{ChartError, ChartResult};

/// Bidirectional mapping between data space and canvas space.
///
/// Implementations must keep `invert(convert(p)) == p` for points inside the
/// plotting region, up to float error.
pub trait CoordConv {
    fn convert(&self, input: Point) -> Point;
    fn invert(&self, position: Point) -> Point;
    fn region(&self) -> Rect;
    fn transposed(&self) -> bool;
}

/// Coordinate system handed to guides by the chart pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coord {
    Rect(RectCoordConv),
    Polar(PolarCoordConv),
}

impl Coord {
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Rect(_) => "rect",
            Self::Polar(_) => "polar",
        }
    }

    pub fn as_rect(&self) -> ChartResult<&RectCoordConv> {
        match self {
            Self::Rect(coord) => Ok(coord),
            Self::Polar(_) => Err(ChartError::CoordVariantMismatch {
                expected: "rect",
                found: self.kind_name(),
            }),
        }
    }

    pub fn as_polar(&self) -> ChartResult<&PolarCoordConv> {
        match self {
            Self::Polar(coord) => Ok(coord),
            Self::Rect(_) => Err(ChartError::CoordVariantMismatch {
                expected: "polar",
                found: self.kind_name(),
            }),
        }
    }

    fn conv(&self) -> &dyn CoordConv {
        match self {
            Self::Rect(coord) => coord as &dyn CoordConv,
            Self::Polar(coord) => coord as &dyn CoordConv,
        }
    }
}

impl CoordConv for Coord {
    fn convert(&self, input: Point) -> Point {
        self.conv().convert(input)
    }

    fn invert(&self, position: Point) -> Point {
        self.conv().invert(position)
    }

    fn region(&self) -> Rect {
        self.conv().region()
    }

    fn transposed(&self) -> bool {
        self.conv().transposed()
    }
}

impl From<RectCoordConv> for Coord {
    fn from(coord: RectCoordConv) -> Self {
        Self::Rect(coord)
    }
}

impl From<PolarCoordConv> for Coord {
    fn from(coord: PolarCoordConv) -> Self {
        Self::Polar(coord)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::Coord;
    use crate::core::polar_coord::{PolarCoordConv, PolarCoordSpec};
    use crate::core::rect_coord::RectCoordConv;
    use crate::error::ChartError;

    #[test]
    fn variant_access_reports_mismatch() {
        let region = Rect::new(0.0, 0.0, 50.0, 50.0);
        let rect: Coord = RectCoordConv::full(region, false)
            .expect("valid rect")
            .into();
        let polar: Coord = PolarCoordConv::new(region, PolarCoordSpec::default(), false)
            .expect("valid polar")
            .into();

        assert!(rect.as_rect().is_ok());
        assert!(polar.as_polar().is_ok());

        let err = rect.as_polar().expect_err("rect is not polar");
        assert!(matches!(
            err,
            ChartError::CoordVariantMismatch {
                expected: "polar",
                found: "rect"
            }
        ));
        assert!(polar.as_rect().is_err());
    }
}
