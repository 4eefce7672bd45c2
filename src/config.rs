use std::{path::PathBuf, time::Duration};

use crate::bounding_box::BoundingBox;
use crate::tile::Tile;
use crate::url::UrlFormat;

/// Tile fetching configuration.
#[derive(Debug, PartialEq)]
pub struct Config {
    /// Bounding box in left, bottom, right, top order.
    pub bounding_box: BoundingBox,

    /// The folder to output the data to. Created if missing, but its parent
    /// must exist.
    pub output_folder: PathBuf,

    /// Builds the URL to download each tile from.
    pub url: UrlFormat,

    /// Timeout for fetching a single tile.
    ///
    /// Pass the zero duration to disable the timeout.
    pub timeout: Duration,

    /// Whether to draw a progress bar while fetching.
    pub show_progress: bool,
}

impl Config {
    /// Creates a configuration fetching from the default archive with no
    /// timeout and no progress bar.
    pub fn new(bounding_box: BoundingBox, output_folder: impl Into<PathBuf>) -> Self {
        Self {
            bounding_box,
            output_folder: output_folder.into(),
            url: UrlFormat::default(),
            timeout: Duration::from_secs(0),
            show_progress: false,
        }
    }

    /// Creates an iterator iterating over all tiles in the contained bounding box.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> {
        self.bounding_box.tiles()
    }
}
