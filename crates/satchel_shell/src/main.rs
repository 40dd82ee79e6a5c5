//! Satchel inventory demo
//!
//! Run with: cargo run --bin satchel
//!
//! Set `RUST_LOG=debug` to trace inventory changes on stderr.

use satchel_shell::{Repl, ShellConfig};
use std::io;

fn main() -> io::Result<()> {
    // Warnings only by default so the menu stays readable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match ShellConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Using default config: {}", e);
            ShellConfig::default()
        }
    };
    config.log_summary();

    let stdin = io::stdin();
    let mut repl = Repl::new(config, stdin.lock(), io::stdout());
    repl.run()
}
