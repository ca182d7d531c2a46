mod app;
mod backend;
mod cli;
mod config;
mod metrics;
mod store;
mod twoface;

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate prometheus;
#[macro_use]
extern crate guard;

use crate::config::Config;
use tracing::{info, Level};

fn main() {
    let args: Vec<_> = std::env::args().collect();
    let (config_file_path, command) = match &args[..] {
        [_, config_file_path, command @ ..] => (config_file_path, command),
        _ => {
            eprintln!("{}", cli::USAGE);
            std::process::exit(2)
        }
    };

    let config = match Config::from_file(config_file_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(2)
        }
    };

    // Set up logger output. The rendered page goes to stdout, so logs go to stderr.
    let subscriber_builder = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr);
    if config.human_logs {
        subscriber_builder.init();
    } else {
        subscriber_builder.json().init();
    }

    let command = match cli::Command::parse(command) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}\n\n{}", e, cli::USAGE);
            std::process::exit(e.cause().exit_code())
        }
    };

    info!(backend = config.backend_url.as_str(), ?command, "starting quietblog");
    let print_metrics = config.print_metrics;
    let exit_code = match cli::run_blocking(config, command) {
        Ok(page) => {
            print!("{}", page);
            0
        }
        Err(e) => {
            eprintln!("{}", e);
            e.cause().exit_code()
        }
    };

    if print_metrics {
        match metrics::render() {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("couldn't render metrics: {}", e),
        }
    }
    std::process::exit(exit_code)
}
