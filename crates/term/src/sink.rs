//! Render sinks: where finished frames go.

use anyhow::Result;

use crate::fb::FrameBuffer;

/// Display collaborator for finished frames.
pub trait RenderSink {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()>;
}

/// Keeps the most recent frame as text lines (headless runs and tests).
#[derive(Debug, Default, Clone)]
pub struct TextSink {
    last: Vec<String>,
    frames: usize,
}

impl TextSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> &[String] {
        &self.last
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn text(&self) -> String {
        self.last.join("\n")
    }
}

impl RenderSink for TextSink {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.last = fb.lines();
        self.frames += 1;
        Ok(())
    }
}
