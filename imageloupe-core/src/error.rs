//! Magnifier error types.

use crate::geometry::{ContentSize, ViewportSize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoupeError {
    #[error("Image asset has not finished decoding")]
    AssetLoadIncomplete,

    #[error("Degenerate geometry: viewport {viewport:?}, content {content:?}")]
    DegenerateGeometry {
        viewport: ViewportSize,
        content: ContentSize,
    },

    #[error("No touch contact at index {index}")]
    MissingContact { index: usize },

    #[error("Invalid loupe options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

impl LoupeError {
    /// Errors the context defers instead of reporting: the next resize or
    /// load event retries the computation.
    pub fn is_deferred(&self) -> bool {
        matches!(
            self,
            LoupeError::AssetLoadIncomplete | LoupeError::DegenerateGeometry { .. }
        )
    }
}
