//! Error types for tone synthesis, composition and export.

use std::fmt;
use std::path::PathBuf;

/// Errors raised by the synthesis pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ToneError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("crossfade of {requested} samples does not fit a segment of {available} samples")]
    InvalidCrossfade { requested: usize, available: usize },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("WAV encoding failed for {}: {source}", path.display())]
    Wav {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
}

impl ToneError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ToneError::InvalidParameter(msg.into())
    }

    /// Wraps a `hound` error, unpacking plain I/O failures into `Io`.
    pub(crate) fn from_wav(path: impl Into<PathBuf>, err: hound::Error) -> Self {
        let path = path.into();
        match err {
            hound::Error::IoError(source) => ToneError::Io { path, source },
            source => ToneError::Wav { path, source },
        }
    }
}

/// Pipeline stage at which a profile failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validate,
    Synthesize,
    Join,
    Repeat,
    Export,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Validate => "validate",
            Stage::Synthesize => "synthesize",
            Stage::Join => "join",
            Stage::Repeat => "repeat",
            Stage::Export => "export",
        };
        f.write_str(name)
    }
}

/// A failure while processing one named profile.
#[derive(Debug, thiserror::Error)]
#[error("profile '{profile}' failed at {stage}: {source}")]
pub struct ProfileError {
    pub profile: String,
    pub stage: Stage,
    #[source]
    pub source: ToneError,
}

impl ProfileError {
    pub fn new(profile: impl Into<String>, stage: Stage, source: ToneError) -> Self {
        Self {
            profile: profile.into(),
            stage,
            source,
        }
    }
}
