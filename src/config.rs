use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::{
    error::{ShellError, ShellResult},
    theme::find_theme,
};

/// Keys `set` is allowed to touch. `theme` only changes through `theme`.
pub const SETTABLE_KEYS: [&str; 5] = [
    "prompt",
    "prompt_color",
    "output_color",
    "error_color",
    "history_file",
];

/// Session settings. Reset on every launch, never written to disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub prompt: String,
    pub prompt_color: String,
    pub output_color: String,
    pub error_color: String,
    pub history_file: String,
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        let history_file = dirs::home_dir()
            .map(|home| home.join(".tinysh_history"))
            .unwrap_or_else(|| PathBuf::from(".tinysh_history"));

        Self {
            prompt: ">".to_string(),
            prompt_color: "green".to_string(),
            output_color: "white".to_string(),
            error_color: "red".to_string(),
            history_file: history_file.display().to_string(),
            theme: "default".to_string(),
        }
    }
}

impl Config {
    /// Settings in display order.
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("prompt", self.prompt.as_str()),
            ("prompt_color", self.prompt_color.as_str()),
            ("output_color", self.output_color.as_str()),
            ("error_color", self.error_color.as_str()),
            ("history_file", self.history_file.as_str()),
            ("theme", self.theme.as_str()),
        ]
    }

    pub fn set(&mut self, key: &str, value: &str) -> ShellResult<()> {
        let slot = match key {
            "prompt" => &mut self.prompt,
            "prompt_color" => &mut self.prompt_color,
            "output_color" => &mut self.output_color,
            "error_color" => &mut self.error_color,
            "history_file" => &mut self.history_file,
            _ => return Err(ShellError::UnknownSetting(key.to_string())),
        };
        *slot = value.to_string();
        Ok(())
    }

    pub fn apply_theme(&mut self, name: &str) -> ShellResult<()> {
        let theme = find_theme(name).ok_or_else(|| ShellError::UnknownTheme(name.to_string()))?;
        self.prompt_color = theme.prompt_color.to_string();
        self.output_color = theme.output_color.to_string();
        self.error_color = theme.error_color.to_string();
        self.theme = theme.name.to_string();
        Ok(())
    }
}

//rc file
pub fn rc_file_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os("TINYSH_RC") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("tinysh").join("tinysh.rc"))
}

/// Startup commands from the rc file. A missing file means no commands.
pub fn load_startup(path: &Path) -> io::Result<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(parse_startup(&content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

fn parse_startup(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect()
}
