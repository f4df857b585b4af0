// SPDX-License-Identifier: MPL-2.0
use scene_reel::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
scene_reel

USAGE:
  scene_reel [OPTIONS]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, de)
  --config-dir <dir>   Directory holding settings.toml
  --data-dir <dir>     Directory holding the cached home preview
  --assets <dir>       Directory with scene images, vita.txt and legal.txt
  --scenes <file>      Scene catalog replacing the built-in one
  -h, --help           Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        assets: args.opt_value_from_os_str("--assets", |s| Ok::<_, String>(PathBuf::from(s)))?,
        scenes: args.opt_value_from_os_str("--scenes", |s| Ok::<_, String>(PathBuf::from(s)))?,
    };

    for unused in args.finish() {
        log::warn!("Ignoring unexpected argument {:?}", unused);
    }
    Ok(flags)
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
