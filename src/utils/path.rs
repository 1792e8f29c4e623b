use std::path::{Path, PathBuf};

pub(crate) const MATERIAL_LIBRARY_EXTENSION: &str = "mtl";

/// Returns the material library that sits next to `obj_path`: same directory,
/// same stem, `.mtl` extension.
pub(crate) fn sibling_material_library(obj_path: &Path) -> PathBuf {
    obj_path.with_extension(MATERIAL_LIBRARY_EXTENSION)
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Builds the path a texture is referenced by.
///
/// `root` is joined with a single `/` unless it already ends in a separator;
/// an empty root counts as absent. `ext` is appended verbatim.
pub(crate) fn texture_path(root: Option<&str>, path: &str, ext: Option<&str>) -> String {
    let mut full = match root {
        Some(root) if !root.is_empty() => {
            let mut joined = String::with_capacity(root.len() + path.len() + 1);
            joined.push_str(root);
            if !root.ends_with(is_separator) {
                joined.push('/');
            }
            joined.push_str(path);
            joined
        },
        _ => path.to_string(),
    };
    if let Some(ext) = ext {
        full.push_str(ext);
    }
    full
}

/// Replaces spaces with underscores in the last path segment, leaving the
/// directories untouched.
pub(crate) fn sanitize_file_name(path: &str) -> String {
    let split = path.rfind(is_separator).map_or(0, |idx| idx + 1);
    let (dir, file) = path.split_at(split);
    format!("{}{}", dir, file.replace(' ', "_"))
}
