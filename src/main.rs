mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod project;
mod store;
mod utils;

use clap::Parser;
use log::LevelFilter;

use cli::Cli;
use config::Config;

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = Config::load();
    let cli = cli.with_config(&config);

    if let Err(e) = app::run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
