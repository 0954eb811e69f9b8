mod commands;
mod config;
mod error;
mod history;
mod parse;
mod pipeline;
mod prompt;
mod shell;
mod theme;
mod utils;


use std::{
    env,
    io::{self, IsTerminal},
};

use anyhow::Context;

use crate::shell::{Flow, Shell};

fn main() -> anyhow::Result<()> {
    // [1] Diagnostics go to stderr, quiet unless TINYSH_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("TINYSH_LOG", "warn"))
        .format_timestamp(None)
        .init();

    // [2] Color only for a real terminal
    let color = io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none();
    let mut shell = Shell::new(color);
    let mut out = io::stdout().lock();

    // [3] Startup script
    if let Some(path) = config::rc_file_path() {
        let startup = config::load_startup(&path)
            .with_context(|| format!("failed to read rc file {}", path.display()))?;
        if !startup.is_empty() {
            log::info!("running {} startup commands from {}", startup.len(), path.display());
        }
        if shell.run_startup(&startup, &mut out)? == Flow::Exit {
            return Ok(());
        }
    }

    // [4] Main REPL loop
    shell.run(io::stdin().lock(), out).context("shell i/o failed")?;
    Ok(())
}
