//! Error type shared by the emitters, adapters and canvas.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FigureError {
    #[error("cannot write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed literal: {0}")]
    Literal(String),

    #[error("draw failed: {0}")]
    Draw(String),
}

impl FigureError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = FigureError> = std::result::Result<T, E>;
