mod core;
mod files;
mod math;
mod pipe;
mod settings;

use std::collections::BTreeMap;

use crate::{config::Config, error::ShellResult, history::History};

use self::core::{Clear, Echo, Exit, Help, HistoryList};
use self::files::{AppendFile, Cat, WriteFile};
use self::math::{Arithmetic, Modulus, Op};
use self::pipe::Pipe;
use self::settings::{ShowConfig, Set, SetTheme};

/// What a command hands back to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Empty,
    Exit,
}

impl Reply {
    pub fn text(s: impl Into<String>) -> Self {
        Reply::Text(s.into())
    }

    /// Output as seen by the next pipeline stage.
    pub fn into_piped(self) -> String {
        match self {
            Reply::Text(s) => s.trim_end_matches(['\n', '\r']).to_string(),
            Reply::Empty | Reply::Exit => String::new(),
        }
    }
}

/// Session state a command may read or change.
pub struct Context<'a> {
    pub registry: &'a Registry,
    pub history: &'a mut History,
    pub config: &'a mut Config,
    /// The current line was appended to history before dispatch.
    pub recorded: bool,
}

pub trait Command {
    fn name(&self) -> &str;
    fn describe(&self) -> &str;
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<Reply>;
}

/// Name -> command. Sorted so `help` lists in a stable order.
#[derive(Default)]
pub struct Registry {
    commands: BTreeMap<String, Box<dyn Command>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers under `command.name()`. Last registration wins; the
    /// replaced command is handed back.
    pub fn register(&mut self, command: Box<dyn Command>) -> Option<Box<dyn Command>> {
        let name = command.name().to_string();
        let previous = self.commands.insert(name.clone(), command);
        if previous.is_some() {
            log::warn!("command '{name}' registered twice, keeping the latest");
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.values().map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

/// Registry with every builtin the shell ships.
pub fn builtins() -> Registry {
    let mut registry = Registry::new();
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(Help),
        Box::new(Exit::new("exit")),
        Box::new(Exit::new("quit")),
        Box::new(HistoryList),
        Box::new(Clear),
        Box::new(Echo),
        Box::new(Arithmetic::new(Op::Add)),
        Box::new(Arithmetic::new(Op::Subtract)),
        Box::new(Arithmetic::new(Op::Multiply)),
        Box::new(Arithmetic::new(Op::Divide)),
        Box::new(Modulus),
        Box::new(Cat),
        Box::new(WriteFile),
        Box::new(AppendFile),
        Box::new(ShowConfig),
        Box::new(Set),
        Box::new(SetTheme),
        Box::new(Pipe),
    ];
    for command in commands {
        registry.register(command);
    }
    registry
}
