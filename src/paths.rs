//! Helpers for project-relative, `/`-separated path strings
//!
//! Inventory paths are plain relative strings, not OS paths; they only
//! become `PathBuf`s at the single point where file contents are read.

/// Containing directory of a relative path. Root-level files live in `.`.
pub fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[..idx],
        None => ".",
    }
}

/// Final path segment.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Extension without the dot, if any. Dotfiles have no extension.
pub fn extension(path: &str) -> Option<&str> {
    let name = file_name(path);
    match name.rfind('.') {
        Some(idx) if idx > 0 => Some(&name[idx + 1..]),
        _ => None,
    }
}

/// Base name of a directory path (`src/auth` -> `auth`). The root
/// directory `.` maps to `root` so group names stay meaningful.
pub fn dir_base_name(dir: &str) -> &str {
    if dir == "." || dir.is_empty() {
        return "root";
    }
    dir.rsplit('/').next().unwrap_or(dir)
}

/// Join a relative specifier onto a directory and normalize `.`/`..`
/// segments. Returns `None` when `..` escapes the project root.
pub fn normalize_join(dir: &str, specifier: &str) -> Option<String> {
    let mut stack: Vec<&str> = Vec::new();
    if dir != "." {
        stack.extend(dir.split('/').filter(|s| !s.is_empty()));
    }
    for segment in specifier.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop()?;
            }
            other => stack.push(other),
        }
    }
    if stack.is_empty() {
        return None;
    }
    Some(stack.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_dir() {
        assert_eq!(parent_dir("src/auth/login.ts"), "src/auth");
        assert_eq!(parent_dir("main.ts"), ".");
    }

    #[test]
    fn test_file_name_and_extension() {
        assert_eq!(file_name("src/auth/login.ts"), "login.ts");
        assert_eq!(extension("src/auth/login.ts"), Some("ts"));
        assert_eq!(extension("Makefile"), None);
        assert_eq!(extension(".gitignore"), None);
    }

    #[test]
    fn test_dir_base_name() {
        assert_eq!(dir_base_name("src/auth"), "auth");
        assert_eq!(dir_base_name("."), "root");
    }

    #[test]
    fn test_normalize_join() {
        assert_eq!(
            normalize_join("src/a", "./foo"),
            Some("src/a/foo".to_string())
        );
        assert_eq!(
            normalize_join("src/a", "../b/bar"),
            Some("src/b/bar".to_string())
        );
        assert_eq!(normalize_join(".", "./foo"), Some("foo".to_string()));
        // escaping the project root never resolves
        assert_eq!(normalize_join("src", "../../etc/passwd"), None);
        assert_eq!(normalize_join(".", ".."), None);
    }
}
