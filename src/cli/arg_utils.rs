// arg_utils.rs - small string helpers used by the argument loop.

/// Returns the last path component of `path`, handling both `/` and `\` separators.
pub fn last_name_from_path(path: &str) -> &str {
    let after_slash = match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    };
    match after_slash.rfind('\\') {
        Some(pos) => &after_slash[pos + 1..],
        None => after_slash,
    }
}

/// Returns `true` if `token` contains a glob metacharacter (`*`, `?`, `[`).
///
/// Used only to word diagnostics: a plain filename that matches nothing is
/// reported as missing, a pattern that matches nothing is not.
pub fn has_glob_meta(token: &str) -> bool {
    token.contains(['*', '?', '['])
}
