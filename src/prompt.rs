use std::borrow::Cow;

use crate::{config::Config, theme::style_for};

/// Renders the configured prompt text, painted when color is on.
pub struct PromptSystem {
    color: bool,
}

impl PromptSystem {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render(&self, config: &Config) -> String {
        let text = format!("{} ", config.prompt.trim_end());
        self.paint(&config.prompt_color, &text).into_owned()
    }

    /// Paint `text` with a configured color name.
    pub fn paint<'a>(&self, color: &str, text: &'a str) -> Cow<'a, str> {
        if !self.color {
            return Cow::Borrowed(text);
        }
        Cow::Owned(style_for(color).paint(text).to_string())
    }
}
