use std::path::PathBuf;

/// Expand a leading `~` or `~/` to the home directory. Anything else,
/// including `~user`, is used as given.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path {
        "~" => "",
        _ => match path.strip_prefix("~/") {
            Some(rest) => rest,
            None => return PathBuf::from(path),
        },
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}
