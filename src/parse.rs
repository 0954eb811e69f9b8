use crate::error::{ShellError, ShellResult};

pub const PIPE: &str = "|";
pub const PIPE_COMMAND: &str = "pipe";

// Splits a line on runs of whitespace. No quoting, no escapes
pub fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// A standalone `|` outside of an explicit `pipe ...` command.
pub fn has_pipe(tokens: &[String]) -> bool {
    tokens.first().is_some_and(|t| t != PIPE_COMMAND) && tokens.iter().any(|t| t == PIPE)
}

/// Split tokens on standalone `|` into stages. Every stage must name a command.
pub fn split_stages(tokens: &[String]) -> ShellResult<Vec<&[String]>> {
    let stages: Vec<&[String]> = tokens.split(|t| t == PIPE).collect();

    if let Some(empty) = stages.iter().position(|s| s.is_empty()) {
        return Err(ShellError::EmptyStage(empty + 1));
    }
    Ok(stages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<String> {
        tokenize(s)
    }

    #[test]
    fn tokenize_collapses_whitespace() {
        assert_eq!(toks("  echo   hello \t world  "), ["echo", "hello", "world"]);
        assert!(toks("   ").is_empty());
    }

    #[test]
    fn pipe_must_stand_alone() {
        assert!(has_pipe(&toks("echo a | echo")));
        assert!(!has_pipe(&toks("echo a|b")));
        // explicit `pipe` handles its own separators
        assert!(!has_pipe(&toks("pipe echo a | echo")));
    }

    #[test]
    fn split_into_stages() {
        let tokens = toks("add 1 2 | echo | echo done");
        let stages = split_stages(&tokens).unwrap();
        assert_eq!(stages.len(), 3);
        assert_eq!(stages[0], ["add", "1", "2"]);
        assert_eq!(stages[1], ["echo"]);
        assert_eq!(stages[2], ["echo", "done"]);
    }

    #[test]
    fn empty_stages_are_rejected() {
        for (line, stage) in [("| echo a", 1), ("echo a |", 2), ("echo a | | echo", 2)] {
            let tokens = toks(line);
            match split_stages(&tokens) {
                Err(ShellError::EmptyStage(n)) => assert_eq!(n, stage, "{line}"),
                other => panic!("{line}: expected empty stage, got {other:?}"),
            }
        }
    }
}
