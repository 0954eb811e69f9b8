use std::{
    fs::{self, OpenOptions},
    io::{Read, Seek, SeekFrom, Write},
};

use super::{Command, Context, Reply};
use crate::{
    error::{ShellError, ShellResult},
    utils::expand_tilde,
};

// Path plus the joined text after it
fn path_and_text<'a>(usage: &str, args: &'a [String]) -> ShellResult<(&'a str, String)> {
    match args {
        [path, text @ ..] if !text.is_empty() => Ok((path.as_str(), text.join(" "))),
        _ => Err(ShellError::usage(usage.to_string())),
    }
}

pub struct Cat;

impl Command for Cat {
    fn name(&self) -> &str {
        "cat"
    }

    fn describe(&self) -> &str {
        "Print the contents of a file"
    }

    fn execute(&self, _ctx: &mut Context<'_>, args: &[String]) -> ShellResult<Reply> {
        let [path] = args else {
            return Err(ShellError::usage("cat <path>"));
        };
        let path = expand_tilde(path);
        let bytes = fs::read(&path).map_err(|e| ShellError::io(&path, e))?;
        // Non-UTF-8 bytes show up as U+FFFD instead of failing the read
        Ok(Reply::Text(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

pub struct WriteFile;

impl Command for WriteFile {
    fn name(&self) -> &str {
        "write"
    }

    fn describe(&self) -> &str {
        "Write text to a file, replacing its contents"
    }

    fn execute(&self, _ctx: &mut Context<'_>, args: &[String]) -> ShellResult<Reply> {
        let (path, text) = path_and_text("write <path> <text...>", args)?;
        let path = expand_tilde(path);
        fs::write(&path, &text).map_err(|e| ShellError::io(&path, e))?;
        Ok(Reply::Text(format!("wrote {} bytes to {}", text.len(), path.display())))
    }
}

pub struct AppendFile;

impl Command for AppendFile {
    fn name(&self) -> &str {
        "append"
    }

    fn describe(&self) -> &str {
        "Append a line of text to a file"
    }

    fn execute(&self, _ctx: &mut Context<'_>, args: &[String]) -> ShellResult<Reply> {
        let (path, text) = path_and_text("append <path> <text...>", args)?;
        let path = expand_tilde(path);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .read(true)
            .open(&path)
            .map_err(|e| ShellError::io(&path, e))?;

        // Start on a fresh line if the file doesn't end with one
        let mut line = String::new();
        if needs_separator(&mut file).map_err(|e| ShellError::io(&path, e))? {
            line.push('\n');
        }
        line.push_str(&text);
        line.push('\n');

        file.write_all(line.as_bytes())
            .map_err(|e| ShellError::io(&path, e))?;
        Ok(Reply::Text(format!("appended {} bytes to {}", line.len(), path.display())))
    }
}

fn needs_separator(file: &mut fs::File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
