use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::TileError;

/// A tile of the imagery grid, identified by the coordinates of its origin.
///
/// Both coordinates are multiples of [`GRID_RESOLUTION`](crate::grid::GRID_RESOLUTION).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Tile {
    pub x: i64,
    pub y: i64,
}

impl Tile {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The x-coordinate as a zero-padded, 7 digit string.
    pub fn x_name(&self) -> String {
        format!("{:07}", self.x)
    }

    /// The y-coordinate as a zero-padded, 7 digit string.
    pub fn y_name(&self) -> String {
        format!("{:07}", self.y)
    }

    /// Name of the archive file holding this tile, e.g. `0880000_1650000.zip`.
    pub fn file_name(&self) -> String {
        format!("{}_{}.zip", self.x_name(), self.y_name())
    }

    pub fn output_path(&self, output_folder: &Path) -> PathBuf {
        output_folder.join(self.file_name())
    }

    /// Downloads the tile at `url` and returns the full response body.
    ///
    /// Any transport failure or non-success status is reported as
    /// [`TileError::Fetch`].
    pub async fn fetch_from(
        &self,
        client: &reqwest::Client,
        url: &str,
    ) -> Result<Vec<u8>, TileError> {
        let fetch_err = |source| TileError::Fetch {
            url: url.to_owned(),
            source,
        };

        let body = client
            .get(url)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(fetch_err)?
            .bytes()
            .await
            .map_err(fetch_err)?;

        Ok(body.to_vec())
    }

    /// Writes `body` to `path`, overwriting any existing file.
    pub async fn write_to(&self, path: &Path, body: &[u8]) -> Result<(), TileError> {
        fs::write(path, body)
            .await
            .map_err(|source| TileError::Write {
                path: path.to_owned(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_zero_padded() {
        let tile = Tile::new(880_000, 1_650_000);
        assert_eq!(tile.x_name(), "0880000");
        assert_eq!(tile.y_name(), "1650000");
        assert_eq!(tile.file_name(), "0880000_1650000.zip");
    }

    #[test]
    fn output_path_joins_folder() {
        let tile = Tile::new(1_205_000, 2_115_000);
        assert_eq!(
            tile.output_path(Path::new("out")),
            Path::new("out").join("1205000_2115000.zip")
        );
    }

    #[tokio::test]
    async fn unreachable_server_is_fetch_error() {
        let url = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            format!(
                "http://{}/0880000/0880000_1650000.zip",
                listener.local_addr().unwrap()
            )
        };

        let err = Tile::new(880_000, 1_650_000)
            .fetch_from(&reqwest::Client::new(), &url)
            .await
            .unwrap_err();

        assert!(err.is_recoverable());
        assert_eq!(err.to_string(), format!("could not find file at {}", url));
    }

    #[tokio::test]
    async fn write_to_missing_folder_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("tile.zip");

        let err = Tile::new(880_000, 1_650_000)
            .write_to(&path, b"zip")
            .await
            .unwrap_err();

        assert!(!err.is_recoverable());
        match err {
            TileError::Write { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn write_to_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let tile = Tile::new(880_000, 1_650_000);
        let path = tile.output_path(dir.path());

        tile.write_to(&path, b"old contents").await.unwrap();
        tile.write_to(&path, b"new").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }
}
