use std::{io, path::PathBuf};

use thiserror::Error;

use crate::grid::{MAX_X, MAX_Y, MIN_X, MIN_Y};

/// A requested bounding box that is malformed or lies outside the archive.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    #[error("the left value ({left}) is greater than the right value ({right})")]
    LeftGreaterThanRight { left: i64, right: i64 },

    #[error("the bottom value ({bottom}) is greater than the top value ({top})")]
    BottomGreaterThanTop { bottom: i64, top: i64 },

    #[error("the left value ({0}) is outside of the available area (must be >= {})", MIN_X)]
    LeftOutOfArea(i64),

    #[error("the right value ({0}) is outside of the available area (must be <= {})", MAX_X)]
    RightOutOfArea(i64),

    #[error("the bottom value ({0}) is outside of the available area (must be >= {})", MIN_Y)]
    BottomOutOfArea(i64),

    #[error("the top value ({0}) is outside of the available area (must be <= {})", MAX_Y)]
    TopOutOfArea(i64),
}

/// The destination directory is missing and could not be created.
#[derive(Debug, Error)]
#[error("destination path {} does not exist and could not be created", .path.display())]
pub struct DirectoryError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Failure while handling a single tile.
///
/// `Fetch` is recoverable: the tile is skipped and the run goes on. `Write`
/// aborts the whole run.
#[derive(Debug, Error)]
pub enum TileError {
    #[error("could not find file at {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed writing tile to {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TileError {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TileError::Fetch { .. })
    }
}
