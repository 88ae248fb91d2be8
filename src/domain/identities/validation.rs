use std::path::{Component, Path};

/// Whether `id` can name a solution directory.
///
/// Accepts alphanumerics, `-` and `_`, plus `.` when `allow_dots` is set.
/// `.` and `..` are always rejected.
pub fn validate_identifier(id: &str, allow_dots: bool) -> bool {
    let allowed =
        |c: char| c.is_alphanumeric() || matches!(c, '-' | '_') || (allow_dots && c == '.');
    !id.is_empty() && !matches!(id, "." | "..") && id.chars().all(allowed)
}

/// Whether `component` can be glued onto a directory path as part of a file name.
///
/// Stricter than `validate_identifier`: no dots at all, so generated names can
/// neither hide files nor climb out of the output directory.
pub fn validate_safe_path_component(component: &str) -> bool {
    !component.is_empty()
        && component.chars().all(|c| c.is_alphanumeric() || matches!(c, '-' | '_'))
}

/// Whether `path` is relative and never climbs above its starting directory.
pub fn validate_contained_relative_path(path: &str) -> bool {
    let mut depth = 0usize;
    for component in Path::new(path).components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => match depth.checked_sub(1) {
                Some(parent) => depth = parent,
                None => return false,
            },
            Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    true
}
