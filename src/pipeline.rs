use crate::{
    commands::{Command, Context, Reply},
    error::{ShellError, ShellResult},
    parse::{PIPE_COMMAND, split_stages},
};

/// Run `a | b | c` as data flow: each stage's text becomes the first
/// argument of the next. Any failure aborts the whole pipeline and
/// nothing from earlier stages is kept.
pub fn run_pipe(ctx: &mut Context<'_>, tokens: &[String]) -> ShellResult<Reply> {
    let stages = split_stages(tokens)?;

    // Resolve every name before anything runs
    let registry = ctx.registry;
    let resolved: Vec<(&dyn Command, &[String])> = stages
        .iter()
        .map(|stage| {
            let name = &stage[0];
            // Its first argument would be the previous stage's output
            if name == PIPE_COMMAND {
                return Err(ShellError::usage("pipe cannot be a pipeline stage"));
            }
            registry
                .get(name)
                .map(|cmd| (cmd, &stage[1..]))
                .ok_or_else(|| ShellError::UnknownStage(name.clone()))
        })
        .collect::<ShellResult<_>>()?;

    let mut piped: Option<String> = None;
    let mut last = Reply::Empty;

    for (i, (command, own_args)) in resolved.into_iter().enumerate() {
        let args: Vec<String> = piped
            .take()
            .into_iter()
            .chain(own_args.iter().cloned())
            .collect();

        log::debug!("pipeline stage {}: {} {:?}", i + 1, command.name(), args);

        let reply = command
            .execute(ctx, &args)
            .map_err(|source| ShellError::Pipeline {
                stage: i + 1,
                name: command.name().to_string(),
                source: Box::new(source),
            })?;

        if reply == Reply::Exit {
            return Ok(Reply::Exit);
        }
        piped = Some(reply.clone().into_piped());
        last = reply;
    }

    Ok(last)
}
