// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::process;

use clap::Parser;
use tracing::Level;

use shredgen::cli::{self, Cli};
use shredgen::config::ShredConfig;
use shredgen::error::{ShredError, EXIT_IO};
use shredgen::generators::RandomSource;
use shredgen::music::ScaleCatalog;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn fail(err: &ShredError) -> ! {
    eprintln!("{}", err.report());
    process::exit(err.exit_code());
}

fn load_config(args: &Cli) -> ShredConfig {
    let Some(path) = &args.config else {
        return ShredConfig::default();
    };

    let config = match ShredConfig::load(path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {:#}", err);
            process::exit(EXIT_IO);
        }
    };
    if let Err(err) = config.validate() {
        fail(&err);
    }
    config
}

fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    let config = load_config(&args);
    let action = args.action(&config);
    let catalog = ScaleCatalog::new();
    let mut source = match args.seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::from_entropy(),
    };

    match cli::run(&action, &catalog, &mut source) {
        Ok(output) => println!("{}", output),
        Err(err) => fail(&err),
    }
}
