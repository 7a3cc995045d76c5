use thiserror::Error;

/// Failures the visualizer reports instead of silently degrading.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VizError {
    #[error("failed to load audio asset {path}: {reason}")]
    AssetLoad { path: String, reason: String },
    #[error("shader source element #{id} is missing or empty")]
    ShaderSourceMissing { id: String },
    #[error("gpu error: {0}")]
    Gpu(String),
    #[error("rendering context lost: {0}")]
    ContextLost(String),
    #[error("frame skipped: {0}")]
    FrameSkipped(String),
    #[error("dom error: {0}")]
    Dom(String),
}

impl VizError {
    /// Whether the frame loop has to stop after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, VizError::ContextLost(_) | VizError::Gpu(_))
    }
}
