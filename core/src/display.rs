use crate::framebuffer::DisplayBuffers;

/// Refresh modes for the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    /// Full refresh with complete waveform
    Full,
    /// Partial refresh of the pixels that changed since the last frame
    Fast,
}

pub trait Display {
    /// Pushes the active buffer to the panel and swaps buffers afterwards.
    fn display(&mut self, buffers: &mut DisplayBuffers, mode: RefreshMode);
}
