use std::io::{self, BufRead, Write};

use crate::{
    commands::{self, Context, Reply, Registry},
    config::Config,
    error::{ShellError, ShellResult},
    history::History,
    parse::{has_pipe, tokenize},
    pipeline::run_pipe,
    prompt::PromptSystem,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One interactive session: owns the registry, history and settings.
pub struct Shell {
    registry: Registry,
    history: History,
    config: Config,
    prompt: PromptSystem,
}

impl Shell {
    pub fn new(color: bool) -> Self {
        Self::with_registry(commands::builtins(), color)
    }

    pub fn with_registry(registry: Registry, color: bool) -> Self {
        log::debug!("session started with {} commands", registry.len());
        Self {
            registry,
            history: History::new(),
            config: Config::default(),
            prompt: PromptSystem::new(color),
        }
    }

    #[cfg(test)]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[cfg(test)]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Evaluate one line as if the user typed it.
    #[cfg(test)]
    pub fn eval(&mut self, line: &str) -> ShellResult<Reply> {
        self.exec(line, true)
    }

    fn exec(&mut self, line: &str, record: bool) -> ShellResult<Reply> {
        // Step 1: Skip blank input
        let line = line.trim();
        if line.is_empty() {
            return Ok(Reply::Empty);
        }
        if record {
            self.history.push(line);
        }

        // Step 2: Split into command name and arguments
        let tokens = tokenize(line);
        log::debug!("dispatch: {tokens:?}");

        let mut ctx = Context {
            registry: &self.registry,
            history: &mut self.history,
            config: &mut self.config,
            recorded: record,
        };

        // Step 3: Pipelines, then single commands
        if has_pipe(&tokens) {
            return run_pipe(&mut ctx, &tokens);
        }
        let Some((name, args)) = tokens.split_first() else {
            return Ok(Reply::Empty);
        };
        let command = self
            .registry
            .get(name)
            .ok_or_else(|| ShellError::UnknownCommand(name.clone()))?;
        command.execute(&mut ctx, args)
    }

    /// Run rc-file lines before the first prompt. They don't go into history.
    pub fn run_startup<W: Write>(&mut self, lines: &[String], out: &mut W) -> io::Result<Flow> {
        for line in lines {
            let result = self.exec(line, false);
            if let Err(e) = &result {
                log::warn!("startup command '{line}' failed: {e}");
            }
            if self.report(out, result)? == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Main REPL loop. Returns on `exit`/`quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            write!(out, "{}", self.prompt.render(&self.config))?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                log::debug!("end of input");
                return Ok(());
            }

            let result = match std::str::from_utf8(&buf) {
                Ok(line) => self.exec(line, true),
                Err(_) => Err(ShellError::InvalidUtf8),
            };
            if self.report(&mut out, result)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    // Print a reply in the output color or an error in the error color
    fn report<W: Write>(&self, out: &mut W, result: ShellResult<Reply>) -> io::Result<Flow> {
        match result {
            Ok(Reply::Text(text)) => {
                let text = text.strip_suffix('\n').unwrap_or(&text);
                writeln!(out, "{}", self.prompt.paint(&self.config.output_color, text))?;
            }
            Ok(Reply::Empty) => {}
            Ok(Reply::Exit) => {
                writeln!(out, "{}", self.prompt.paint(&self.config.output_color, "Goodbye!"))?;
                return Ok(Flow::Exit);
            }
            Err(e) => {
                let msg = format!("error: {e}");
                writeln!(out, "{}", self.prompt.paint(&self.config.error_color, &msg))?;
            }
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_not_recorded() {
        let mut shell = Shell::new(false);
        assert_eq!(shell.eval("   \t ").unwrap(), Reply::Empty);
        assert!(shell.history().is_empty());
    }

    #[test]
    fn lines_are_recorded_trimmed_even_when_they_fail() {
        let mut shell = Shell::new(false);
        shell.eval("  add 1 2  ").unwrap();
        shell.eval("frobnicate").unwrap_err();
        let lines: Vec<&str> = shell.history().entries().iter().map(|e| e.line.as_str()).collect();
        assert_eq!(lines, ["add 1 2", "frobnicate"]);
    }

    #[test]
    fn unknown_command_names_the_token() {
        let mut shell = Shell::new(false);
        match shell.eval("frobnicate now") {
            Err(ShellError::UnknownCommand(name)) => assert_eq!(name, "frobnicate"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn startup_lines_skip_history() {
        let mut shell = Shell::new(false);
        let mut out = Vec::new();
        let lines = vec!["theme dark".to_string(), "bogus".to_string()];
        assert_eq!(shell.run_startup(&lines, &mut out).unwrap(), Flow::Continue);
        assert_eq!(shell.config().theme, "dark");
        assert!(shell.history().is_empty());

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("theme set to dark"));
        assert!(out.contains("error: unknown command: bogus"));
    }

    #[test]
    fn exit_in_startup_stops_early() {
        let mut shell = Shell::new(false);
        let mut out = Vec::new();
        let lines = vec!["exit".to_string(), "theme dark".to_string()];
        assert_eq!(shell.run_startup(&lines, &mut out).unwrap(), Flow::Exit);
        assert_eq!(shell.config().theme, "default");
    }
}
