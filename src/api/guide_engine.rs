use tracing::debug;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{ComposedFrame, Renderer, SceneCompositor};

use super::{CrosshairGuide, CrosshairGuideConfig, GuideFrameState};

/// Handle returned by [`GuideEngine::add_crosshair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuideId(usize);

/// Owns a renderer and the crosshair guides drawn over one chart.
pub struct GuideEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    guides: Vec<CrosshairGuide>,
}

impl<R: Renderer> GuideEngine<R> {
    pub fn new(renderer: R, viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            renderer,
            viewport,
            guides: Vec::new(),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn add_crosshair(&mut self, config: CrosshairGuideConfig) -> ChartResult<GuideId> {
        let guide = CrosshairGuide::new(config)?;
        self.guides.push(guide);
        debug!(count = self.guides.len(), "crosshair guide added");
        Ok(GuideId(self.guides.len() - 1))
    }

    #[must_use]
    pub fn guide(&self, id: GuideId) -> Option<&CrosshairGuide> {
        self.guides.get(id.0)
    }

    /// Applies a new config to one guide; returns whether it was rebuilt.
    pub fn reconfigure(&mut self, id: GuideId, config: CrosshairGuideConfig) -> ChartResult<bool> {
        let available = self.guides.len();
        let guide = self
            .guides
            .get_mut(id.0)
            .ok_or(ChartError::UnknownGuide {
                guide: id.0,
                available,
            })?;
        guide.reconfigure(config)
    }

    /// Updates every guide against `frame` and composes their scenes.
    ///
    /// Scenes are committed only after every guide evaluated successfully, so
    /// a failed frame leaves all guides on the previous one.
    pub fn build_frame(&mut self, frame: &GuideFrameState) -> ChartResult<ComposedFrame> {
        let scenes = self
            .guides
            .iter()
            .map(|guide| guide.evaluate(frame))
            .collect::<ChartResult<Vec<_>>>()?;
        for (guide, scene) in self.guides.iter_mut().zip(scenes) {
            guide.commit(scene);
        }
        Ok(SceneCompositor::compose(
            self.viewport,
            self.guides.iter().map(CrosshairGuide::scene),
        ))
    }

    pub fn render(&mut self, frame: &GuideFrameState) -> ChartResult<()> {
        let composed = self.build_frame(frame)?;
        self.renderer.render(&composed)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
