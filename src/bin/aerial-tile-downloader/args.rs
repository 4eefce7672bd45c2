use anyhow::{Context, Result};
use clap::{
    app_from_crate, crate_authors, crate_description, crate_name, crate_version, App,
    AppSettings, Arg, ArgMatches,
};
use std::{path::PathBuf, time::Duration};

use crate::validators::*;
use aerial_tile_downloader::{BoundingBox, Config, UrlFormat, BASE_URL};

const BBOX_LEFT_ARG: &str = "left";
const BBOX_BOTTOM_ARG: &str = "bottom";
const BBOX_RIGHT_ARG: &str = "right";
const BBOX_TOP_ARG: &str = "top";
const DIRECTORY_ARG: &str = "directory";
const BASE_URL_ARG: &str = "base_url";
const TIMEOUT_ARG: &str = "timeout";
const DRY_RUN_ARG: &str = "dry_run";
const PROGRESS_ARG: &str = "progress";
const LOGLEVEL_ARG: &str = "loglevel";

pub struct Args {
    pub bounding_box: BoundingBox,
    pub directory: PathBuf,
    pub base_url: String,
    pub timeout: Duration,
    pub progress: bool,
    pub dry_run: bool,
    pub loglevel: Option<String>,
}

impl std::convert::From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            bounding_box: args.bounding_box,
            output_folder: args.directory,
            url: UrlFormat::from_base(&args.base_url),
            timeout: args.timeout,
            show_progress: args.progress,
        }
    }
}

impl Args {
    pub fn parse() -> Result<Self> {
        Self::from_matches(&app().get_matches())
    }

    /// Reads the arguments and validates the bounding box. No I/O happens
    /// here.
    pub fn from_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let bounding_box = BoundingBox::new(
            coord(matches, BBOX_LEFT_ARG)?,
            coord(matches, BBOX_BOTTOM_ARG)?,
            coord(matches, BBOX_RIGHT_ARG)?,
            coord(matches, BBOX_TOP_ARG)?,
        )
        .context("invalid bounding box")?;

        let timeout = required(matches, TIMEOUT_ARG)?
            .parse()
            .map(Duration::from_secs)
            .context("timeout must be a whole number of seconds")?;

        Ok(Self {
            bounding_box,
            timeout,
            directory: PathBuf::from(required(matches, DIRECTORY_ARG)?),
            base_url: required(matches, BASE_URL_ARG)?.to_owned(),
            progress: matches.is_present(PROGRESS_ARG),
            dry_run: matches.is_present(DRY_RUN_ARG),
            loglevel: matches.value_of(LOGLEVEL_ARG).map(str::to_owned),
        })
    }
}

fn required<'a>(matches: &'a ArgMatches<'_>, name: &str) -> Result<&'a str> {
    matches
        .value_of(name)
        .with_context(|| format!("missing argument `{}`", name))
}

fn coord(matches: &ArgMatches<'_>, name: &str) -> Result<i64> {
    required(matches, name)?
        .parse()
        .with_context(|| format!("the {} value must be an integer", name))
}

pub fn app() -> App<'static, 'static> {
    app_from_crate!()
        .setting(AppSettings::DeriveDisplayOrder)
        .arg(
            Arg::with_name(BBOX_LEFT_ARG)
                .help("X-coordinate of the westernmost point in the bounding box")
                .required(true)
                .validator(is_integer)
                .takes_value(true)
                .allow_hyphen_values(true)
                .long("left"),
        )
        .arg(
            Arg::with_name(BBOX_BOTTOM_ARG)
                .help("Y-coordinate of the southernmost point in the bounding box")
                .required(true)
                .validator(is_integer)
                .takes_value(true)
                .allow_hyphen_values(true)
                .long("bottom"),
        )
        .arg(
            Arg::with_name(BBOX_RIGHT_ARG)
                .help("X-coordinate of the easternmost point in the bounding box")
                .required(true)
                .validator(is_integer)
                .takes_value(true)
                .allow_hyphen_values(true)
                .long("right"),
        )
        .arg(
            Arg::with_name(BBOX_TOP_ARG)
                .help("Y-coordinate of the northernmost point in the bounding box")
                .required(true)
                .validator(is_integer)
                .takes_value(true)
                .allow_hyphen_values(true)
                .long("top"),
        )
        .arg(
            Arg::with_name(DIRECTORY_ARG)
                .help("The directory to store downloaded files in. Created if missing, but its parent must exist.")
                .required(true)
                .takes_value(true)
                .short("d")
                .long("directory"),
        )
        .arg(
            Arg::with_name(BASE_URL_ARG)
                .help("Root URL of the imagery archive. Tiles are fetched from `<base-url>/<x>/<x>_<y>.zip`.")
                .default_value(BASE_URL)
                .validator(is_http_url)
                .takes_value(true)
                .long("base-url"),
        )
        .arg(
            Arg::with_name(TIMEOUT_ARG)
                .help("The timeout (in seconds) for fetching a single tile. Pass 0 for no timeout.")
                .validator(is_numeric::<u64>)
                .default_value("0")
                .takes_value(true)
                .short("t")
                .long("timeout"),
        )
        .arg(
            Arg::with_name(PROGRESS_ARG)
                .help("Draw a progress bar while downloading")
                .takes_value(false)
                .long("progress"),
        )
        .arg(
            Arg::with_name(DRY_RUN_ARG)
                .help("Don't actually fetch anything, just list the tiles that would be fetched.")
                .takes_value(false)
                .long("dry-run"),
        )
        .arg(
            Arg::with_name(LOGLEVEL_ARG)
                .help("Log level. Defaults to `RUST_LOG` if set, `info` otherwise.")
                .possible_values(&["error", "warn", "info", "debug", "trace"])
                .takes_value(true)
                .long("loglevel"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use aerial_tile_downloader::BoundsError;

    fn parse(extra: &[&str]) -> Result<Args> {
        let mut argv = vec!["aerial-tile-downloader"];
        argv.extend_from_slice(extra);
        Args::from_matches(&app().get_matches_from_safe(argv)?)
    }

    #[test]
    fn parses_required_args() {
        let args = parse(&[
            "--left", "880000", "--bottom", "1650000", "--right", "890000", "--top", "1655000",
            "-d", "out",
        ])
        .unwrap();

        assert_eq!(
            args.bounding_box,
            BoundingBox::new(880_000, 1_650_000, 890_000, 1_655_000).unwrap()
        );
        assert_eq!(args.directory, PathBuf::from("out"));
        assert_eq!(args.base_url, BASE_URL);
        assert_eq!(args.timeout, Duration::from_secs(0));
        assert!(!args.dry_run && !args.progress);
        assert_eq!(args.loglevel, None);

        let config: Config = args.into();
        assert_eq!(config.url, UrlFormat::default());
    }

    #[test]
    fn directory_is_required() {
        assert!(parse(&[
            "--left", "880000", "--bottom", "1650000", "--right", "890000", "--top", "1655000",
        ])
        .is_err());
    }

    #[test]
    fn non_integer_bound_is_rejected() {
        assert!(parse(&[
            "--left", "880000.5", "--bottom", "1650000", "--right", "890000", "--top", "1655000",
            "-d", "out",
        ])
        .is_err());
    }

    #[test]
    fn invalid_box_is_reported() {
        let err = parse(&[
            "--left", "890000", "--bottom", "1650000", "--right", "880000", "--top", "1655000",
            "--directory", "out",
        ])
        .err()
        .unwrap();

        assert_eq!(
            err.downcast_ref::<BoundsError>(),
            Some(&BoundsError::LeftGreaterThanRight {
                left: 890_000,
                right: 880_000
            })
        );
    }

    #[test]
    fn optional_args() {
        let args = parse(&[
            "--left", "880000", "--bottom", "1650000", "--right", "890000", "--top", "1655000",
            "-d", "out", "--base-url", "http://localhost:1234/", "-t", "30", "--dry-run",
            "--progress", "--loglevel", "debug",
        ])
        .unwrap();

        assert_eq!(args.base_url, "http://localhost:1234/");
        assert_eq!(args.timeout, Duration::from_secs(30));
        assert!(args.dry_run && args.progress);
        assert_eq!(args.loglevel.as_deref(), Some("debug"));
    }
}
