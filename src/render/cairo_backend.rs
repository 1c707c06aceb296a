use cairo::{Context, Format, ImageSurface};
use kurbo::{PathEl, Rect};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, ComposedFrame, Figure, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub passes_drawn: usize,
    pub figures_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &ComposedFrame,
    ) -> ChartResult<()>;
}

/// Cairo renderer backend for composed guide frames.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`, where the host owns clearing
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgba(0.0, 0.0, 0.0, 0.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn draw_passes(&mut self, context: &Context, frame: &ComposedFrame) -> ChartResult<()> {
        let mut stats = CairoRenderStats::default();

        for pass in &frame.passes {
            context
                .save()
                .map_err(|err| map_backend_error("failed to save cairo state", err))?;
            if let Some(clip) = pass.clip {
                append_clip(context, clip);
            }
            for figure in &pass.figures {
                stroke_figure(context, figure)?;
                stats.figures_drawn += 1;
            }
            context
                .restore()
                .map_err(|err| map_backend_error("failed to restore cairo state", err))?;
            stats.passes_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &ComposedFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        self.draw_passes(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &ComposedFrame,
    ) -> ChartResult<()> {
        frame.validate()?;
        self.draw_passes(context, frame)
    }
}

fn stroke_figure(context: &Context, figure: &Figure) -> ChartResult<()> {
    let stroke = figure.stroke();
    apply_color(context, stroke.color);
    context.set_line_width(stroke.width);
    match stroke.dash.dash_pattern(stroke.width) {
        Some(pattern) => context.set_dash(&pattern, 0.0),
        None => context.set_dash(&[], 0.0),
    }

    context.new_path();
    for element in figure.to_path().elements() {
        match *element {
            PathEl::MoveTo(p) => context.move_to(p.x, p.y),
            PathEl::LineTo(p) => context.line_to(p.x, p.y),
            PathEl::QuadTo(p1, p2) => {
                let (x, y) = context
                    .current_point()
                    .map_err(|err| map_backend_error("missing current point", err))?;
                let c1 = (x + 2.0 / 3.0 * (p1.x - x), y + 2.0 / 3.0 * (p1.y - y));
                let c2 = (p2.x + 2.0 / 3.0 * (p1.x - p2.x), p2.y + 2.0 / 3.0 * (p1.y - p2.y));
                context.curve_to(c1.0, c1.1, c2.0, c2.1, p2.x, p2.y);
            }
            PathEl::CurveTo(p1, p2, p3) => context.curve_to(p1.x, p1.y, p2.x, p2.y, p3.x, p3.y),
            PathEl::ClosePath => context.close_path(),
        }
    }
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke figure", err))
}

fn append_clip(context: &Context, clip: Rect) {
    context.rectangle(clip.x0, clip.y0, clip.width(), clip.height());
    context.clip();
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
