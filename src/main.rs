use crate::config::Config;
use crate::session::Session;
use clap::Parser;
use log::{error, info};
use std::process::ExitCode;

mod actor;
mod cards;
mod config;
mod deck;
mod draw;
mod error;
mod roster;
mod selection;
mod session;
mod stack;
mod tui;
mod turn_order;

fn main() -> ExitCode {
    let config = Config::parse();
    if let Err(e) = config.init_logging() {
        eprintln!("cardpal: {e}");
        return ExitCode::FAILURE;
    }

    let mut session = Session::new(config.rng());
    for name in &config.actors {
        if let Err(e) = session.add_actor(0, name.as_str()) {
            eprintln!("cardpal: {e}");
            return ExitCode::FAILURE;
        }
    }
    info!("starting with {} actors", session.actor_count());

    if let Err(e) = tui::run(&mut session, config.debug) {
        error!("terminal error: {e}");
        eprintln!("cardpal: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
