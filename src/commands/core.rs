use std::fmt::Write as _;

use super::{Command, Context, Reply};
use crate::error::{ShellError, ShellResult};

pub struct Help;

impl Command for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn describe(&self) -> &str {
        "Show this help message"
    }

    fn execute(&self, ctx: &mut Context<'_>, _args: &[String]) -> ShellResult<Reply> {
        let width = ctx.registry.iter().map(|c| c.name().len()).max().unwrap_or(0);

        let mut out = String::from("Available commands:\n");
        for command in ctx.registry.iter() {
            let _ = writeln!(out, "  {:<width$} - {}", command.name(), command.describe());
        }
        out.push_str("\nChain commands with `|` to feed output into the next command.");
        Ok(Reply::Text(out))
    }
}

/// `exit` and `quit` share this command.
pub struct Exit {
    name: &'static str,
}

impl Exit {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Command for Exit {
    fn name(&self) -> &str {
        self.name
    }

    fn describe(&self) -> &str {
        "Exit the shell"
    }

    fn execute(&self, _ctx: &mut Context<'_>, _args: &[String]) -> ShellResult<Reply> {
        Ok(Reply::Exit)
    }
}

pub struct HistoryList;

impl Command for HistoryList {
    fn name(&self) -> &str {
        "history"
    }

    fn describe(&self) -> &str {
        "List previous commands (-t adds timestamps)"
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<Reply> {
        let timestamps = match args {
            [] => false,
            [flag] if flag == "-t" => true,
            _ => return Err(ShellError::usage("history [-t]")),
        };

        // Leave out the line that invoked us.
        let entries = ctx.history.entries();
        let shown = if ctx.recorded {
            &entries[..entries.len().saturating_sub(1)]
        } else {
            entries
        };

        if shown.is_empty() {
            return Ok(Reply::text("no history"));
        }

        let mut out = String::new();
        for (i, entry) in shown.iter().enumerate() {
            if timestamps {
                let _ = writeln!(out, "{:>4}  {}  {}", i + 1, entry.at.format("%H:%M:%S"), entry.line);
            } else {
                let _ = writeln!(out, "{:>4}  {}", i + 1, entry.line);
            }
        }
        Ok(Reply::Text(out))
    }
}

pub struct Clear;

impl Command for Clear {
    fn name(&self) -> &str {
        "clear"
    }

    fn describe(&self) -> &str {
        "Clear command history"
    }

    fn execute(&self, ctx: &mut Context<'_>, _args: &[String]) -> ShellResult<Reply> {
        ctx.history.clear();
        Ok(Reply::text("history cleared"))
    }
}

pub struct Echo;

impl Command for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn describe(&self) -> &str {
        "Echo your input"
    }

    fn execute(&self, _ctx: &mut Context<'_>, args: &[String]) -> ShellResult<Reply> {
        if args.is_empty() {
            return Err(ShellError::usage("echo <text...>"));
        }
        Ok(Reply::Text(format!("You said: {}", args.join(" "))))
    }
}
