mod compositor;
mod figure;
mod null_renderer;
mod primitives;
mod scene;

pub use compositor::{ComposedFrame, SceneCompositor, ScenePass};
pub use figure::{Figure, FigureShape, PATH_TOLERANCE};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LineStrokeStyle, StrokeStyle};
pub use scene::{Scene, SceneLayer};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully composed, deterministic `ComposedFrame` so
/// drawing code remains isolated from selection and coordinate logic.
pub trait Renderer {
    fn render(&mut self, frame: &ComposedFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
