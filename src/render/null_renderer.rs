use crate::error::ChartResult;
use crate::render::{ComposedFrame, Renderer};

/// No-op renderer used by tests and headless guide usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_pass_count: usize,
    pub last_figure_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &ComposedFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_pass_count = frame.passes.len();
        self.last_figure_count = frame.figure_count();
        self.frames_rendered += 1;
        Ok(())
    }
}
