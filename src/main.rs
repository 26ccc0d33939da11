// SPDX-License-Identifier: MPL-2.0
use place_lens::app::{self, Flags, Startup};
use place_lens::error::Result;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
PlaceLens - click the map to browse photos of a place

USAGE:
  place_lens [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --api-key <KEY>        Maps API key (else PLACE_LENS_API_KEY or settings.toml)
  -h, --help             Print this help
";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("place_lens=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    let startup = match Startup::prepare(flags) {
        Ok(startup) => startup,
        Err(err) => {
            tracing::error!(error = %err, "startup failed");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(startup) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "event loop failed");
            ExitCode::FAILURE
        }
    }
}

/// Returns `None` when help was requested.
fn parse_flags() -> Result<Option<Flags>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        api_key: args.opt_value_from_str("--api-key")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}
