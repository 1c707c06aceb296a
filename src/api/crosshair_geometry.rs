use kurbo::Point;

use crate::core::{Coord, CoordConv, PolarCoordConv, RectCoordConv};
use crate::render::{Figure, StrokeStyle};

/// Builds crosshair figures for a data-space `cross` point.
///
/// Dimension-0 figure first, then dimension-1. A `None` style contributes
/// nothing, so the result may be empty.
#[must_use]
pub fn crosshair_figures(
    coord: &Coord,
    cross: Point,
    styles: &[Option<StrokeStyle>; 2],
) -> Vec<Figure> {
    match coord {
        Coord::Rect(rect) => rect_figures(rect, cross, styles),
        Coord::Polar(polar) => polar_figures(polar, cross, styles),
    }
}

fn rect_figures(
    coord: &RectCoordConv,
    cross: Point,
    styles: &[Option<StrokeStyle>; 2],
) -> Vec<Figure> {
    let region = coord.region();
    let canvas_cross = coord.convert(cross);
    let (vertical_dim, horizontal_dim) = if coord.transposed() { (1, 0) } else { (0, 1) };

    let mut figures = Vec::with_capacity(2);
    for (dim, style) in styles.iter().enumerate() {
        let Some(style) = *style else {
            continue;
        };
        if dim == vertical_dim {
            figures.push(Figure::line(
                Point::new(canvas_cross.x, region.y0),
                Point::new(canvas_cross.x, region.y1),
                style,
            ));
        } else if dim == horizontal_dim {
            figures.push(Figure::line(
                Point::new(region.x0, canvas_cross.y),
                Point::new(region.x1, canvas_cross.y),
                style,
            ));
        }
    }
    figures
}

fn polar_figures(
    coord: &PolarCoordConv,
    cross: Point,
    styles: &[Option<StrokeStyle>; 2],
) -> Vec<Figure> {
    let (angular_dim, radial_dim) = if coord.transposed() { (1, 0) } else { (0, 1) };
    let value = |dim: usize| if dim == 0 { cross.x } else { cross.y };

    let mut figures = Vec::with_capacity(2);
    for (dim, style) in styles.iter().enumerate() {
        let Some(style) = *style else {
            continue;
        };
        if dim == angular_dim {
            let angle = coord.convert_angle(value(angular_dim));
            figures.push(Figure::line(
                coord.polar_point(angle, coord.start_radius()),
                coord.polar_point(angle, coord.end_radius()),
                style,
            ));
        } else if dim == radial_dim {
            figures.push(Figure::arc(
                coord.center(),
                coord.convert_radius(value(radial_dim)).max(0.0),
                coord.start_angle(),
                coord.end_angle(),
                style,
            ));
        }
    }
    figures
}
