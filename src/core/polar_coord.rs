use std::f64::consts::{FRAC_PI_2, PI, TAU};

use kurbo::{Point, Rect, Vec2};

use crate::core::coord::CoordConv;
use crate::core::types::{validate_range, validate_region};
use crate::error::{ChartError, ChartResult};

/// Angular and radial extent of a polar coordinate system.
///
/// Angles are radians in canvas orientation (0 at 3 o'clock, clockwise).
/// Radii are fractions of half the region's shorter side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarCoordSpec {
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub radius: f64,
}

impl Default for PolarCoordSpec {
    fn default() -> Self {
        Self {
            start_angle: -FRAC_PI_2,
            end_angle: 3.0 * PI / 2.0,
            inner_radius: 0.0,
            radius: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarCoordConv {
    region: Rect,
    center: Point,
    start_angle: f64,
    end_angle: f64,
    start_radius: f64,
    end_radius: f64,
    transposed: bool,
}

impl PolarCoordConv {
    pub fn new(region: Rect, spec: PolarCoordSpec, transposed: bool) -> ChartResult<Self> {
        validate_region(region)?;
        validate_range([spec.start_angle, spec.end_angle], "polar angle range")?;
        validate_range([spec.inner_radius, spec.radius], "polar radius range")?;
        if spec.inner_radius < 0.0 || spec.radius < 0.0 {
            return Err(ChartError::InvalidData(
                "polar radius fractions must be >= 0".to_owned(),
            ));
        }

        let base_radius = region.width().min(region.height()) / 2.0;
        Ok(Self {
            region,
            center: region.center(),
            start_angle: spec.start_angle,
            end_angle: spec.end_angle,
            start_radius: base_radius * spec.inner_radius,
            end_radius: base_radius * spec.radius,
            transposed,
        })
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    #[must_use]
    pub fn start_radius(&self) -> f64 {
        self.start_radius
    }

    #[must_use]
    pub fn end_radius(&self) -> f64 {
        self.end_radius
    }

    /// Maps a normalized angular data coordinate to radians.
    #[must_use]
    pub fn convert_angle(&self, value: f64) -> f64 {
        self.start_angle + (self.end_angle - self.start_angle) * value
    }

    /// Maps a normalized radial data coordinate to a pixel radius.
    #[must_use]
    pub fn convert_radius(&self, value: f64) -> f64 {
        self.start_radius + (self.end_radius - self.start_radius) * value
    }

    /// Inverse of [`Self::convert_angle`]; `angle` is first wrapped into the
    /// turn that starts at `start_angle` and sweeps toward `end_angle`.
    #[must_use]
    pub fn invert_angle(&self, angle: f64) -> f64 {
        let span = self.end_angle - self.start_angle;
        let offset = if span < 0.0 {
            -(self.start_angle - angle).rem_euclid(TAU)
        } else {
            (angle - self.start_angle).rem_euclid(TAU)
        };
        offset / span
    }

    #[must_use]
    pub fn invert_radius(&self, radius: f64) -> f64 {
        (radius - self.start_radius) / (self.end_radius - self.start_radius)
    }

    /// Canvas point at `angle` and `radius` around the center.
    #[must_use]
    pub fn polar_point(&self, angle: f64, radius: f64) -> Point {
        self.center + Vec2::from_angle(angle) * radius
    }
}

impl CoordConv for PolarCoordConv {
    fn convert(&self, input: Point) -> Point {
        let (angular, radial) = if self.transposed {
            (input.y, input.x)
        } else {
            (input.x, input.y)
        };
        self.polar_point(self.convert_angle(angular), self.convert_radius(radial))
    }

    fn invert(&self, position: Point) -> Point {
        let offset = position - self.center;
        let angular = self.invert_angle(offset.atan2());
        let radial = self.invert_radius(offset.hypot());
        if self.transposed {
            Point::new(radial, angular)
        } else {
            Point::new(angular, radial)
        }
    }

    fn region(&self) -> Rect {
        self.region
    }

    fn transposed(&self) -> bool {
        self.transposed
    }
}
