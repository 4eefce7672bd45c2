use anyhow::{Context, Result};
use maplit::hashmap;
use strfmt::strfmt;

use crate::tile::Tile;

/// Root of the 2005 Chicagoland aerial imagery archive.
pub const BASE_URL: &str =
    "http://crystal.isgs.uiuc.edu/nsdihome/webdocs/cua05/data/cua2005spe_zip";

/// Location of a tile below the base URL. `{x}` and `{y}` are replaced with
/// the zero-padded tile coordinates.
pub const TILE_PATH: &str = "{x}/{x}_{y}.zip";

/// Builds the remote URL of each tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlFormat {
    format_str: String,
}

impl UrlFormat {
    /// Creates a format for an archive mirror rooted at `base_url`.
    pub fn from_base(base_url: &str) -> Self {
        Self {
            format_str: format!("{}/{}", base_url.trim_end_matches('/'), TILE_PATH),
        }
    }

    pub fn tile_url(&self, tile: &Tile) -> Result<String> {
        let vars = hashmap! {
            "x".to_owned() => tile.x_name(),
            "y".to_owned() => tile.y_name(),
        };

        strfmt(&self.format_str, &vars)
            .with_context(|| format!("failed formatting URL for tile {}", tile.file_name()))
    }
}

impl Default for UrlFormat {
    fn default() -> Self {
        Self::from_base(BASE_URL)
    }
}
