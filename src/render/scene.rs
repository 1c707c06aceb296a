use kurbo::Rect;

use crate::render::Figure;

/// Rendering layer classes, in paint order.
///
/// Scenes are composed by layer first and by `z_index` within a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SceneLayer {
    Background,
    Grid,
    Element,
    Annotation,
    Crosshair,
    Tooltip,
}

/// Drawable output of one guide for one frame.
///
/// A scene is a value: guides build a fresh one on every recompute and the
/// compositor only ever sees complete scenes. `figures == None` means there is
/// nothing to draw and the compositor skips the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub z_index: i32,
    pub layer: SceneLayer,
    pub figures: Option<Vec<Figure>>,
    pub clip: Option<Rect>,
}

impl Scene {
    /// Empty scene on `layer`.
    #[must_use]
    pub fn new(layer: SceneLayer, z_index: i32) -> Self {
        Self {
            z_index,
            layer,
            figures: None,
            clip: None,
        }
    }

    #[must_use]
    pub fn with_clip(mut self, clip: Rect) -> Self {
        self.clip = Some(clip);
        self
    }

    /// Sets figures, normalizing an empty list to `None`.
    #[must_use]
    pub fn with_figures(mut self, figures: Option<Vec<Figure>>) -> Self {
        self.figures = figures.filter(|figures| !figures.is_empty());
        self
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.figures.is_none()
    }

    #[must_use]
    pub fn figure_count(&self) -> usize {
        self.figures.as_ref().map_or(0, Vec::len)
    }
}
