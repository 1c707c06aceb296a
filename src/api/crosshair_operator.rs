use std::collections::BTreeSet;

use tracing::trace;

use crate::core::{AestheticGroup, Coord, CoordConv};
use crate::interaction::{SelectionState, Selector, resolve_selection};
use crate::render::{Figure, Scene, SceneLayer, StrokeStyle};

use super::CrosshairGuideConfig;
use super::cross_point::{cross_point, selected_point};
use super::crosshair_geometry::crosshair_figures;

/// Config-derived parameters of a crosshair operator.
#[derive(Debug, Clone, PartialEq)]
pub struct CrosshairParams {
    pub selections: Option<BTreeSet<String>>,
    pub styles: [Option<StrokeStyle>; 2],
    pub follow_pointer: [bool; 2],
    pub z_index: i32,
}

impl From<&CrosshairGuideConfig> for CrosshairParams {
    fn from(config: &CrosshairGuideConfig) -> Self {
        Self {
            selections: config.selections.clone(),
            styles: config.styles,
            follow_pointer: config.follow_pointer,
            z_index: config.z_index,
        }
    }
}

/// Upstream snapshot a crosshair is evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct CrosshairInput<'a> {
    pub selection: &'a SelectionState,
    pub coord: &'a Coord,
    /// Aesthetic groups of the configured element.
    pub groups: &'a [AestheticGroup],
}

/// Pure crosshair computation plus the last scene it produced.
#[derive(Debug, Clone)]
pub struct CrosshairOperator {
    params: CrosshairParams,
    scene: Scene,
}

impl CrosshairOperator {
    #[must_use]
    pub fn new(params: CrosshairParams) -> Self {
        let scene = Scene::new(SceneLayer::Crosshair, params.z_index);
        Self { params, scene }
    }

    #[must_use]
    pub fn params(&self) -> &CrosshairParams {
        &self.params
    }

    /// Last scene produced by [`Self::update`], idle before the first update.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Recomputes and replaces the owned scene.
    pub fn update(&mut self, input: &CrosshairInput<'_>) -> &Scene {
        let scene = self.evaluate(input);
        self.commit(scene)
    }

    pub(crate) fn commit(&mut self, scene: Scene) -> &Scene {
        self.scene = scene;
        &self.scene
    }

    /// Builds the scene for `input` without touching operator state.
    ///
    /// The clip is always the coordinate region; figures are `None` whenever
    /// no single selection resolves or nothing can be drawn.
    #[must_use]
    pub fn evaluate(&self, input: &CrosshairInput<'_>) -> Scene {
        Scene::new(SceneLayer::Crosshair, self.params.z_index)
            .with_clip(input.coord.region())
            .with_figures(self.figures(input))
    }

    fn figures(&self, input: &CrosshairInput<'_>) -> Option<Vec<Figure>> {
        let selection = input.selection;
        let Some(name) = resolve_selection(
            self.params.selections.as_ref(),
            selection.active_selector_names(),
        ) else {
            trace!("crosshair idle: no single active selection");
            return None;
        };

        let indices = selection
            .selected_indices(name)
            .filter(|indices| !indices.is_empty());
        let Some(indices) = indices else {
            trace!(selection = name, "crosshair idle: nothing selected");
            return None;
        };

        let Some(selected) = selected_point(input.groups, indices) else {
            trace!(
                selection = name,
                selected = indices.len(),
                "crosshair idle: selected indices match no rendered record"
            );
            return None;
        };

        let pointer = selection.selector(name).and_then(Selector::last_point);
        let Some(cross) = cross_point(input.coord, pointer, selected, self.params.follow_pointer)
        else {
            trace!(selection = name, "crosshair idle: cross point unavailable");
            return None;
        };

        let figures = crosshair_figures(input.coord, cross, &self.params.styles);
        trace!(
            selection = name,
            figures = figures.len(),
            "crosshair figures"
        );
        Some(figures)
    }
}
