use kurbo::Rect;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

use super::{Figure, Scene, SceneLayer};

/// One drawable scene inside a composed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePass {
    pub layer: SceneLayer,
    pub z_index: i32,
    pub clip: Option<Rect>,
    pub figures: Vec<Figure>,
}

/// Backend-agnostic draw list for one frame, already in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedFrame {
    pub viewport: Viewport,
    pub passes: Vec<ScenePass>,
}

impl ComposedFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            passes: Vec::new(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for pass in &self.passes {
            for figure in &pass.figures {
                figure.validate()?;
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    #[must_use]
    pub fn figure_count(&self) -> usize {
        self.passes.iter().map(|pass| pass.figures.len()).sum()
    }

    /// Passes on the requested layers, keeping paint order.
    pub fn passes_on<'a>(
        &'a self,
        include_layers: &'a [SceneLayer],
    ) -> impl Iterator<Item = &'a ScenePass> + 'a {
        self.passes
            .iter()
            .filter(move |pass| include_layers.contains(&pass.layer))
    }
}

/// Orders guide scenes into a [`ComposedFrame`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SceneCompositor;

impl SceneCompositor {
    /// Scenes are painted by layer, then by `z_index`; ties keep input order.
    /// Scenes without figures are skipped.
    #[must_use]
    pub fn compose<'a>(
        viewport: Viewport,
        scenes: impl IntoIterator<Item = &'a Scene>,
    ) -> ComposedFrame {
        let mut passes: Vec<ScenePass> = scenes
            .into_iter()
            .filter_map(|scene| {
                let figures = scene.figures.as_ref()?;
                Some(ScenePass {
                    layer: scene.layer,
                    z_index: scene.z_index,
                    clip: scene.clip,
                    figures: figures.clone(),
                })
            })
            .collect();
        passes.sort_by_key(|pass| (pass.layer, pass.z_index));
        ComposedFrame { viewport, passes }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::SceneCompositor;
    use crate::core::Viewport;
    use crate::render::{Figure, Scene, SceneLayer, StrokeStyle};

    fn scene(layer: SceneLayer, z_index: i32, y: f64) -> Scene {
        Scene::new(layer, z_index)
            .with_clip(Rect::new(0.0, 0.0, 100.0, 50.0))
            .with_figures(Some(vec![Figure::line(
                Point::new(0.0, y),
                Point::new(100.0, y),
                StrokeStyle::default(),
            )]))
    }

    #[test]
    fn compose_orders_by_layer_then_z_index() {
        let scenes = [
            scene(SceneLayer::Crosshair, 2, 1.0),
            scene(SceneLayer::Element, 9, 2.0),
            scene(SceneLayer::Crosshair, -1, 3.0),
        ];
        let frame = SceneCompositor::compose(Viewport::new(100, 50), &scenes);

        let order: Vec<(SceneLayer, i32)> = frame
            .passes
            .iter()
            .map(|pass| (pass.layer, pass.z_index))
            .collect();
        assert_eq!(
            order,
            vec![
                (SceneLayer::Element, 9),
                (SceneLayer::Crosshair, -1),
                (SceneLayer::Crosshair, 2),
            ]
        );
        assert_eq!(frame.passes_on(&[SceneLayer::Crosshair]).count(), 2);
    }

    #[test]
    fn compose_skips_idle_scenes() {
        let scenes = [
            Scene::new(SceneLayer::Crosshair, 0).with_clip(Rect::new(0.0, 0.0, 1.0, 1.0)),
            scene(SceneLayer::Crosshair, 1, 4.0),
        ];
        let frame = SceneCompositor::compose(Viewport::new(100, 50), &scenes);
        assert_eq!(frame.passes.len(), 1);
        assert_eq!(frame.figure_count(), 1);
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn validate_rejects_invalid_viewport() {
        let frame = SceneCompositor::compose(Viewport::new(0, 50), &Vec::<Scene>::new());
        assert!(frame.is_empty());
        assert!(frame.validate().is_err());
    }
}
