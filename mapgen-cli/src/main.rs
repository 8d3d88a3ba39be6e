use clap::Parser;
use env_logger::Env;
use log::error;
use std::process::exit;

pub mod commands;

use commands::command::Command;
use commands::generate::Generate;

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let generate = Generate::parse();
    if let Err(err) = Command::execute(&generate) {
        error!("{:#}", err);
        exit(1);
    }
}
