// SPDX-License-Identifier: MPL-2.0
use neo_enhance::app::{self, config, paths, Flags};
use neo_enhance::logging;

const HELP: &str = "\
NeoEnhance - image enhancement studio

USAGE:
    neo_enhance [OPTIONS] [IMAGE]

OPTIONS:
    --lang <ID>          Interface language (e.g. en-US, fr)
    --data-dir <PATH>    Directory holding the account file
    --config-dir <PATH>  Directory holding settings.toml
    --debug              Verbose logging (RUST_LOG takes precedence)
    -h, --help           Print this help

ARGS:
    <IMAGE>              Image to load into the studio
";

fn parse_args() -> Result<(Flags, bool), pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let debug = args.contains("--debug");
    let lang = args.opt_value_from_str("--lang")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok((
        Flags {
            lang,
            file_path,
            data_dir,
            config_dir,
        },
        debug,
    ))
}

fn main() -> iced::Result {
    let (flags, debug) = match parse_args() {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    let (config, _) = config::load();
    logging::init(debug, config.general.log_level.as_deref());

    app::run(flags)
}
