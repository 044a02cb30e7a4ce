use std::path::{Component, Path, PathBuf};

/// Normalize a path, resolving ".." and "." components
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.as_ref().components() {
        match component {
            Component::ParentDir => {
                if !result.as_os_str().is_empty() {
                    result.pop();
                }
            }
            Component::CurDir => {}
            _ => result.push(component),
        }
    }

    result
}

/// Logical path of a document: relative components joined with `/`
pub fn to_logical_path<P: AsRef<Path>>(relative: P) -> String {
    normalize_path(relative)
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Check whether `path` is `base` or lives somewhere below it
pub fn is_within<P: AsRef<Path>, B: AsRef<Path>>(path: P, base: B) -> bool {
    normalize_path(path).starts_with(normalize_path(base))
}
