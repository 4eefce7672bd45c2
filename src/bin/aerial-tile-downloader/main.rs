mod args;
mod validators;

use anyhow::Result;
use args::Args;
use env_logger::Builder;
use log::{info, Record};
use std::{env, io::Write};

use aerial_tile_downloader::{fetch, plan, Config};

fn init_logger(loglevel: Option<&str>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        writeln!(buf, "{} {}", record.level(), record.args())
    });

    let rust_log_env = env::var("RUST_LOG").ok();
    let filters = match (loglevel, rust_log_env.as_deref()) {
        (Some(level), _) => level,
        (None, Some(rust_log)) => rust_log,
        (None, None) => "info",
    };
    builder.parse_filters(filters);

    builder.init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse()?;
    init_logger(args.loglevel.as_deref());

    let dry_run = args.dry_run;
    let config: Config = args.into();

    if dry_run {
        let tiles = plan(&config)?;
        for (url, output_file) in &tiles {
            info!("would retrieve {}, saving to {}", url, output_file.display());
        }

        info!("would download {} tiles", tiles.len());

        Ok(())
    } else {
        fetch(config).await.map(|_| ())
    }
}
