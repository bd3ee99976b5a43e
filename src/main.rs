// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Target};
use log::LevelFilter;
use profile_deck::app::{self, Flags};

fn init_logger() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        Builder::new()
            .target(Target::Stdout)
            .filter_level(LevelFilter::Warn)
            .filter_module("profile_deck", LevelFilter::Debug)
            .init();
    }
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        kid_id: args.opt_value_from_str("--kid-id")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {:?}", rest);
    }
    Ok(flags)
}

fn main() -> iced::Result {
    init_logger();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("profile_deck: {err}");
            eprintln!("usage: profile_deck [--lang <locale>] [--config-dir <dir>] [--kid-id <id>]");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
