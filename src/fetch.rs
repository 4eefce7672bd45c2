use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use tokio::fs;

use crate::config::Config;
use crate::error::DirectoryError;

const ZERO_DURATION: Duration = Duration::from_secs(0);

/// Outcome of a [`fetch`] run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FetchSummary {
    /// Number of tiles requested from the server.
    pub attempted: usize,
    /// Number of tiles written to disk.
    pub written: usize,
    /// Number of tiles the server could not deliver.
    pub missing: usize,
    /// Total size of all written tiles.
    pub bytes: u64,
}

/// Makes sure the output folder exists.
///
/// Only the last path component is created, a missing parent is an error.
/// An existing path is left alone.
pub async fn prepare_output_dir(path: &Path) -> Result<(), DirectoryError> {
    if path.exists() {
        return Ok(());
    }

    fs::create_dir(path).await.map_err(|source| DirectoryError {
        path: path.to_owned(),
        source,
    })
}

/// Lists the URL and destination file of every tile `cfg` would fetch, in
/// fetch order. Touches neither the network nor the file system.
pub fn plan(cfg: &Config) -> Result<Vec<(String, PathBuf)>> {
    cfg.tiles()
        .map(|tile| {
            let url = cfg.url.tile_url(&tile)?;
            Ok((url, tile.output_path(&cfg.output_folder)))
        })
        .collect()
}

/// Fetch the aerial imagery tiles specified in `cfg` one after another and
/// save them to the output folder.
///
/// Tiles the server fails to deliver are logged and skipped. Failing to write
/// a tile to disk aborts the run. Existing files are overwritten.
///
/// # Example
/// ```rust,no_run
/// use aerial_tile_downloader::{fetch, BoundingBox, Config};
///
/// # #[tokio::main]
/// # async fn main() {
/// let bbox = BoundingBox::new(880_000, 1_650_000, 890_000, 1_655_000).unwrap();
/// let summary = fetch(Config::new(bbox, "./tiles"))
///     .await
///     .expect("failed fetching tiles");
/// println!("wrote {} tiles", summary.written);
/// # }
/// ```
pub async fn fetch(cfg: Config) -> Result<FetchSummary> {
    let output_folder = cfg.output_folder.as_path();
    prepare_output_dir(output_folder).await?;

    let mut builder = reqwest::Client::builder();
    if cfg.timeout > ZERO_DURATION {
        builder = builder.timeout(cfg.timeout);
    }
    let client = builder
        .build()
        .with_context(|| "failed creating HTTP client")?;

    let pb = if cfg.show_progress {
        let pb = ProgressBar::new(cfg.bounding_box.tile_count() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:60.cyan/blue} {pos:>7}/{len:7} ETA: {eta} {msg}")
                .progress_chars("##-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut summary = FetchSummary::default();

    for tile in cfg.tiles() {
        let url = cfg.url.tile_url(&tile)?;
        let output_file = tile.output_path(output_folder);
        info!("retrieving {}, saving to {}", url, output_file.display());

        summary.attempted += 1;
        match tile.fetch_from(&client, &url).await {
            Ok(body) => {
                tile.write_to(&output_file, &body).await?;
                summary.written += 1;
                summary.bytes += body.len() as u64;
            }
            Err(e) if e.is_recoverable() => {
                warn!("{:#}", anyhow::Error::from(e));
                summary.missing += 1;
            }
            Err(e) => return Err(e.into()),
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    info!(
        "fetched {} of {} tiles ({}), {} missing",
        summary.written,
        summary.attempted,
        pretty_bytes::converter::convert(summary.bytes as f64),
        summary.missing,
    );

    Ok(summary)
}
