use std::fmt::Write as _;

use super::{Command, Context, Reply};
use crate::{
    config::SETTABLE_KEYS,
    error::{ShellError, ShellResult},
    theme::THEMES,
};

pub struct ShowConfig;

impl Command for ShowConfig {
    fn name(&self) -> &str {
        "config"
    }

    fn describe(&self) -> &str {
        "Show current settings (--json for machine output)"
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<Reply> {
        match args {
            [] => {
                let mut out = String::new();
                for (key, value) in ctx.config.entries() {
                    let _ = writeln!(out, "{key}: {value}");
                }
                Ok(Reply::Text(out))
            }
            [flag] if flag == "--json" => {
                // Config is plain strings, serialization can't fail
                let json = serde_json::to_string_pretty(&*ctx.config).unwrap_or_default();
                Ok(Reply::Text(json))
            }
            _ => Err(ShellError::usage("config [--json]")),
        }
    }
}

pub struct Set;

impl Command for Set {
    fn name(&self) -> &str {
        "set"
    }

    fn describe(&self) -> &str {
        "Change a setting: set <key> <value>"
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<Reply> {
        let [key, value @ ..] = args else {
            return Err(set_usage());
        };
        if value.is_empty() {
            return Err(set_usage());
        }

        let value = value.join(" ");
        ctx.config.set(key, &value)?;
        Ok(Reply::Text(format!("{key} set to {value}")))
    }
}

fn set_usage() -> ShellError {
    ShellError::usage(format!("set <key> <value>  (keys: {})", SETTABLE_KEYS.join(", ")))
}

pub struct SetTheme;

impl Command for SetTheme {
    fn name(&self) -> &str {
        "theme"
    }

    fn describe(&self) -> &str {
        "Switch color theme, or list themes with no argument"
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<Reply> {
        match args {
            [] => {
                let mut out = String::from("Available themes:\n");
                for theme in THEMES {
                    let marker = if theme.name == ctx.config.theme { "*" } else { " " };
                    let _ = writeln!(
                        out,
                        "{marker} {:<10} prompt={} output={} error={}",
                        theme.name, theme.prompt_color, theme.output_color, theme.error_color
                    );
                }
                Ok(Reply::Text(out))
            }
            [name] => {
                ctx.config.apply_theme(name)?;
                Ok(Reply::Text(format!("theme set to {name}")))
            }
            _ => Err(ShellError::usage("theme [name]")),
        }
    }
}
