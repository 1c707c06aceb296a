use tracing::debug;

use crate::core::{AestheticGroup, Coord};
use crate::error::{ChartError, ChartResult};
use crate::interaction::SelectionState;
use crate::render::Scene;

use super::{CrosshairGuideConfig, CrosshairInput, CrosshairOperator, CrosshairParams};

/// Upstream chart state for one frame.
#[derive(Debug, Clone)]
pub struct GuideFrameState {
    pub coord: Coord,
    /// Aesthetic groups per chart element (series), in element order.
    pub elements: Vec<Vec<AestheticGroup>>,
    pub selection: SelectionState,
}

impl GuideFrameState {
    #[must_use]
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            elements: Vec::new(),
            selection: SelectionState::idle(),
        }
    }

    #[must_use]
    pub fn with_element(mut self, groups: Vec<AestheticGroup>) -> Self {
        self.elements.push(groups);
        self
    }

    #[must_use]
    pub fn with_selection(mut self, selection: SelectionState) -> Self {
        self.selection = selection;
        self
    }
}

/// Crosshair bound to one config, producing one scene per frame.
#[derive(Debug, Clone)]
pub struct CrosshairGuide {
    config: CrosshairGuideConfig,
    operator: CrosshairOperator,
}

impl CrosshairGuide {
    pub fn new(config: CrosshairGuideConfig) -> ChartResult<Self> {
        config.validate()?;
        let operator = CrosshairOperator::new(CrosshairParams::from(&config));
        Ok(Self { config, operator })
    }

    #[must_use]
    pub fn config(&self) -> &CrosshairGuideConfig {
        &self.config
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        self.operator.scene()
    }

    /// Swaps in `config`, rebuilding the operator only when it changed.
    ///
    /// Returns whether a rebuild happened. A rebuilt guide is idle until the
    /// next [`Self::update`].
    pub fn reconfigure(&mut self, config: CrosshairGuideConfig) -> ChartResult<bool> {
        if config == self.config {
            return Ok(false);
        }
        config.validate()?;
        debug!(
            z_index = config.z_index,
            element = config.element_index(),
            "crosshair config changed, rebuilding operator"
        );
        self.operator = CrosshairOperator::new(CrosshairParams::from(&config));
        self.config = config;
        Ok(true)
    }

    /// Recomputes the scene against `frame`.
    ///
    /// Fails only when the configured element does not exist, which is a
    /// wiring error in the chart pipeline. The current scene is kept on
    /// failure.
    pub fn update(&mut self, frame: &GuideFrameState) -> ChartResult<&Scene> {
        let scene = self.evaluate(frame)?;
        Ok(self.operator.commit(scene))
    }

    /// Builds the scene for `frame` without replacing the current one.
    pub fn evaluate(&self, frame: &GuideFrameState) -> ChartResult<Scene> {
        let element = self.config.element_index();
        let groups = frame
            .elements
            .get(element)
            .ok_or(ChartError::ElementOutOfRange {
                element,
                available: frame.elements.len(),
            })?;
        let input = CrosshairInput {
            selection: &frame.selection,
            coord: &frame.coord,
            groups,
        };
        Ok(self.operator.evaluate(&input))
    }

    pub(crate) fn commit(&mut self, scene: Scene) -> &Scene {
        self.operator.commit(scene)
    }
}
