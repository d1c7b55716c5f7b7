use anyhow::Result;
use clap::{App as ClapApp, Arg};
use omnisearch_tui::config::{shortcuts::find_conflicts, Config};
use omnisearch_tui::{app::App, logger, state::PageId};
use std::str::FromStr;

fn main() -> Result<()> {
    let matches = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("page")
                .short("p")
                .long("page")
                .value_name("PAGE")
                .help("Sets the page to start on (home, search, collections, ...)")
                .takes_value(true),
        )
        .get_matches();

    let start_page = matches.value_of("page").map(PageId::from_str).transpose()?;

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    let log_buffer = logger::init(config.log_level)?;
    if let Some(path) = config.file_path() {
        log::info!("Loaded configuration from {}.", path.display());
    }
    for (first, second) in find_conflicts(&config.shortcuts) {
        log::warn!("Shortcuts '{}' and '{}' share a key.", first, second);
    }

    App::start(config, start_page, log_buffer)
}
