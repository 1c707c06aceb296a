use std::collections::BTreeSet;

use chart_guides::api::cross_point::selected_point;
use chart_guides::api::{CrosshairGuideConfig, CrosshairInput, CrosshairOperator, CrosshairParams};
use chart_guides::core::{
    AestheticGroup, AestheticRecord, Coord, PolarCoordConv, PolarCoordSpec, RectCoordConv,
};
use chart_guides::interaction::{SelectionState, Selector};
use kurbo::{Point, Rect};
use proptest::prelude::*;

const REGION: Rect = Rect::new(0.0, 0.0, 400.0, 300.0);

fn groups_strategy() -> impl Strategy<Value = Vec<AestheticGroup>> {
    prop::collection::vec(
        prop::collection::vec((0usize..16, 0.0f64..400.0, 0.0f64..300.0), 0..8),
        0..4,
    )
    .prop_map(|groups| {
        groups
            .into_iter()
            .map(|group| {
                group
                    .into_iter()
                    .map(|(index, x, y)| AestheticRecord::new(index, Point::new(x, y)))
                    .collect()
            })
            .collect()
    })
}

fn coord_strategy() -> impl Strategy<Value = Coord> {
    (any::<bool>(), any::<bool>(), 0.0f64..0.5).prop_map(|(polar, transposed, inner)| {
        if polar {
            let spec = PolarCoordSpec {
                inner_radius: inner,
                ..PolarCoordSpec::default()
            };
            Coord::Polar(PolarCoordConv::new(REGION, spec, transposed).expect("polar coord"))
        } else {
            Coord::Rect(RectCoordConv::full(REGION, transposed).expect("rect coord"))
        }
    })
}

proptest! {
    #[test]
    fn evaluation_is_deterministic_and_finite(
        groups in groups_strategy(),
        coord in coord_strategy(),
        indices in prop::collection::btree_set(0usize..16, 0..6),
        pointer in (0.0f64..400.0, 0.0f64..300.0),
        follow in any::<[bool; 2]>(),
    ) {
        let selection = SelectionState::idle().with_selection(
            "hover",
            Selector::at(Point::new(pointer.0, pointer.1)),
            indices,
        );
        let config = CrosshairGuideConfig::default().with_follow_pointer(follow);
        let operator = CrosshairOperator::new(CrosshairParams::from(&config));
        let input = CrosshairInput { selection: &selection, coord: &coord, groups: &groups };

        let first = operator.evaluate(&input);
        let second = operator.evaluate(&input);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.clip, Some(REGION));
        if let Some(figures) = &first.figures {
            prop_assert!(!figures.is_empty());
            prop_assert!(figures.iter().all(|figure| figure.validate().is_ok()));
        }
    }

    #[test]
    fn no_matching_record_means_idle(
        groups in groups_strategy(),
        coord in coord_strategy(),
    ) {
        // Generated records only use indices below 16.
        let selection = SelectionState::idle().with_selection(
            "tap",
            Selector::at(Point::new(10.0, 10.0)),
            [100, 200],
        );
        let operator = CrosshairOperator::new(CrosshairParams::from(&CrosshairGuideConfig::default()));
        let scene = operator.evaluate(&CrosshairInput { selection: &selection, coord: &coord, groups: &groups });
        prop_assert!(scene.figures.is_none());
    }

    #[test]
    fn selected_point_stays_inside_record_bounds(
        groups in groups_strategy(),
        indices in prop::collection::btree_set(0usize..16, 1..6),
    ) {
        let matched: Vec<Point> = groups
            .iter()
            .flatten()
            .filter(|record| indices.contains(&record.index))
            .map(|record| record.represent_point)
            .collect();
        let mean = selected_point(&groups, &indices);
        prop_assert_eq!(mean.is_some(), !matched.is_empty());
        if let Some(mean) = mean {
            let min_x = matched.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
            let max_x = matched.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
            let min_y = matched.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
            let max_y = matched.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(mean.x >= min_x - 1e-9 && mean.x <= max_x + 1e-9);
            prop_assert!(mean.y >= min_y - 1e-9 && mean.y <= max_y + 1e-9);
        }
    }

    #[test]
    fn any_selection_config_never_draws_for_two_active_names(
        groups in groups_strategy(),
        coord in coord_strategy(),
    ) {
        let all: BTreeSet<usize> = (0..16).collect();
        let selection = SelectionState::idle()
            .with_selection("hover", Selector::at(Point::new(1.0, 1.0)), all.clone())
            .with_selection("tap", Selector::at(Point::new(2.0, 2.0)), all);
        let operator = CrosshairOperator::new(CrosshairParams::from(&CrosshairGuideConfig::default()));
        let scene = operator.evaluate(&CrosshairInput { selection: &selection, coord: &coord, groups: &groups });
        prop_assert!(scene.figures.is_none());
    }
}
