// SPDX-License-Identifier: MPL-2.0
use env_logger::Env;
use geo_lens::app::{self, Flags};
use geo_lens::application::locator::LocatorKind;

const HELP: &str = "\
GeoLens - show where a picture was taken

USAGE:
  geo_lens [OPTIONS]

OPTIONS:
  --lang <LOCALE>       UI language (e.g. en-US, fr)
  --locator <KIND>      Location source: exif, library or import
  --config-dir <DIR>    Directory holding settings.toml
  --library-dir <DIR>   Media library directory
  -h, --help            Print this help

ENVIRONMENT:
  GEO_LENS_CONFIG_DIR, GEO_LENS_LIBRARY_DIR, GEO_LENS_LOCATOR, RUST_LOG
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("geo_lens=info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {rest:?}");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        locator: args.opt_value_from_fn("--locator", |raw| raw.parse::<LocatorKind>())?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        library_dir: args.opt_value_from_str("--library-dir")?,
    })
}
