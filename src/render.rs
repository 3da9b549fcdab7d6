//! Render targets: where a finished chart is sent for display.

use crate::chart::Chart;
use crate::error::RenderError;

/// A sink that presents a finalized chart.
///
/// The native window is one implementation; tests use [`RecordingTarget`].
pub trait RenderTarget {
    fn render(&mut self, chart: &Chart) -> Result<(), RenderError>;
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn render(&mut self, chart: &Chart) -> Result<(), RenderError> {
        (**self).render(chart)
    }
}

impl<T: RenderTarget + ?Sized> RenderTarget for Box<T> {
    fn render(&mut self, chart: &Chart) -> Result<(), RenderError> {
        (**self).render(chart)
    }
}

/// Keeps a copy of every chart it is asked to render.
#[derive(Debug, Default, Clone)]
pub struct RecordingTarget {
    pub rendered: Vec<Chart>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Chart> {
        self.rendered.last()
    }
}

impl RenderTarget for RecordingTarget {
    fn render(&mut self, chart: &Chart) -> Result<(), RenderError> {
        self.rendered.push(chart.clone());
        Ok(())
    }
}
