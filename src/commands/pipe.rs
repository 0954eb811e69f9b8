use super::{Command, Context, Reply};
use crate::{
    error::{ShellError, ShellResult},
    pipeline::run_pipe,
};

pub struct Pipe;

impl Command for Pipe {
    fn name(&self) -> &str {
        "pipe"
    }

    fn describe(&self) -> &str {
        "Chain commands: pipe <cmd> [args] | <cmd> [args] ..."
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<Reply> {
        if args.is_empty() {
            return Err(ShellError::usage("pipe <cmd> [args] | <cmd> [args] ..."));
        }
        run_pipe(ctx, args)
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::testing::Fixture;
    use crate::commands::Reply;
    use crate::error::ShellError;

    #[test]
    fn chains_through_the_registry() {
        let mut fx = Fixture::new();
        let reply = fx.run("pipe", &["echo", "hello", "|", "echo"]).unwrap();
        assert_eq!(reply, Reply::text("You said: You said: hello"));
    }

    #[test]
    fn unknown_stage_is_named() {
        let mut fx = Fixture::new();
        let err = fx.run("pipe", &["echo", "x", "|", "frobnicate"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown command in pipeline: frobnicate");
    }

    #[test]
    fn needs_at_least_one_stage() {
        let mut fx = Fixture::new();
        assert!(matches!(fx.run("pipe", &[]), Err(ShellError::Usage(_))));
    }
}
