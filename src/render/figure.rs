use kurbo::{Arc, BezPath, Line, Point, Shape, Vec2};

use crate::core::is_finite_point;
use crate::error::{ChartError, ChartResult};
use crate::render::StrokeStyle;

/// Flattening tolerance used when a figure is turned into a Bézier path.
pub const PATH_TOLERANCE: f64 = 0.1;

/// Geometry of one guide figure in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FigureShape {
    Line(Line),
    /// Unfilled circular arc swept from `start_angle` to `end_angle`.
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
}

/// Immutable stroked primitive produced by a guide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure {
    shape: FigureShape,
    stroke: StrokeStyle,
}

impl Figure {
    #[must_use]
    pub fn line(from: Point, to: Point, stroke: StrokeStyle) -> Self {
        Self {
            shape: FigureShape::Line(Line::new(from, to)),
            stroke,
        }
    }

    #[must_use]
    pub fn arc(
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        stroke: StrokeStyle,
    ) -> Self {
        Self {
            shape: FigureShape::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            },
            stroke,
        }
    }

    #[must_use]
    pub fn shape(&self) -> FigureShape {
        self.shape
    }

    #[must_use]
    pub fn stroke(&self) -> StrokeStyle {
        self.stroke
    }

    /// Segment endpoints when the figure is a line.
    #[must_use]
    pub fn as_line(&self) -> Option<Line> {
        match self.shape {
            FigureShape::Line(line) => Some(line),
            FigureShape::Arc { .. } => None,
        }
    }

    #[must_use]
    pub fn to_path(&self) -> BezPath {
        match self.shape {
            FigureShape::Line(line) => line.to_path(PATH_TOLERANCE),
            FigureShape::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => Arc {
                center,
                radii: Vec2::new(radius, radius),
                start_angle,
                sweep_angle: end_angle - start_angle,
                x_rotation: 0.0,
            }
            .to_path(PATH_TOLERANCE),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        let finite = match self.shape {
            FigureShape::Line(line) => is_finite_point(line.p0) && is_finite_point(line.p1),
            FigureShape::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                is_finite_point(center)
                    && radius.is_finite()
                    && radius >= 0.0
                    && start_angle.is_finite()
                    && end_angle.is_finite()
            }
        };
        if !finite {
            return Err(ChartError::InvalidData(
                "figure geometry must be finite".to_owned(),
            ));
        }
        self.stroke.validate()
    }
}
