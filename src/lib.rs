//! Download the 2005 Chicagoland aerial imagery archive to your disk,
//! one 5000 × 5000 ft tile at a time.
//!
//! The archive is laid out as a grid of zip files keyed by the coordinates of
//! each tile's origin. Given a bounding box, this crate snaps it onto the grid,
//! enumerates the covered tiles and downloads them sequentially. Tiles the
//! server does not have are logged and skipped.
//!
//! # Usage
//!
//! The crate ships a CLI, `aerial-tile-downloader`, with a helpful `-h` /
//! `--help`. It is also available as a library.
//!
//! # CLI Example
//!
//! ```bash
//! aerial-tile-downloader \
//!   --left 880000 \
//!   --bottom 1650000 \
//!   --right 890000 \
//!   --top 1655000 \
//!   --directory ./tiles
//! ```
//!
//! # Library Example
//! ```rust,no_run
//! use aerial_tile_downloader::{fetch, BoundingBox, Config, UrlFormat};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let config = Config {
//!     bounding_box: BoundingBox::new(880_000, 1_650_000, 890_000, 1_655_000).unwrap(),
//!     output_folder: "./tiles".into(),
//!     url: UrlFormat::default(),
//!     timeout: Duration::from_secs(30),
//!     show_progress: true,
//! };
//!
//! fetch(config).await.expect("failed fetching tiles");
//! # }
//! ```

mod bounding_box;
mod config;
mod error;
mod fetch;
pub mod grid;
mod tile;
mod url;

pub use bounding_box::BoundingBox;
pub use config::Config;
pub use error::{BoundsError, DirectoryError, TileError};
pub use fetch::{fetch, plan, prepare_output_dir, FetchSummary};
pub use tile::Tile;
pub use url::{UrlFormat, BASE_URL};
