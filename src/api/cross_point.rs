//! Cross-point resolution for selection-driven guides.
//!
//! The selected point is averaged in canvas space and inverted once; the
//! follow-pointer choice is then made per dimension in data space.

use std::collections::BTreeSet;

use kurbo::{Point, Vec2};

use crate::core::{AestheticGroup, CoordConv, is_finite_point};

/// Mean canvas position of every record whose index is selected.
///
/// All groups are scanned and each matching occurrence contributes, so an
/// index present in two groups is counted twice. Returns `None` when nothing
/// matches or the mean is not finite.
#[must_use]
pub fn selected_point(groups: &[AestheticGroup], indices: &BTreeSet<usize>) -> Option<Point> {
    let (sum, count) = groups
        .iter()
        .flatten()
        .filter(|record| indices.contains(&record.index))
        .fold((Vec2::ZERO, 0_usize), |(sum, count), record| {
            (sum + record.represent_point.to_vec2(), count + 1)
        });

    if count == 0 {
        return None;
    }
    let mean = (sum / count as f64).to_point();
    is_finite_point(mean).then_some(mean)
}

/// Combines pointer and selected point per dimension, in data space.
///
/// `pointer_canvas` is only inverted when a dimension follows it; a missing
/// pointer for a following dimension yields `None`.
#[must_use]
pub fn cross_point<C: CoordConv + ?Sized>(
    coord: &C,
    pointer_canvas: Option<Point>,
    selected_canvas: Point,
    follow_pointer: [bool; 2],
) -> Option<Point> {
    let selected = coord.invert(selected_canvas);
    let pointer = if follow_pointer.contains(&true) {
        Some(coord.invert(pointer_canvas?))
    } else {
        None
    };

    let pick = |dim: usize, selected_value: f64| match pointer {
        Some(pointer) if follow_pointer[dim] => {
            if dim == 0 {
                pointer.x
            } else {
                pointer.y
            }
        }
        _ => selected_value,
    };
    let cross = Point::new(pick(0, selected.x), pick(1, selected.y));
    is_finite_point(cross).then_some(cross)
}
