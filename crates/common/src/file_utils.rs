use std::path::Path;

/// Strip leading `/` characters from the configured remote filename
pub fn remote_basename(filename: &str) -> &str {
    filename.trim_start_matches('/')
}

/// Check that the active document is the configured file.
/// Returns true only if:
/// - a path is present and non-empty
/// - the path, as a string, ends with the remote filename minus its leading slashes
///
/// This is the only validation done before a transfer; existence, size and
/// content type are not checked.
pub fn check_file_name(path: Option<&Path>, filename: &str) -> bool {
    let Some(path) = path else {
        return false;
    };
    let path = path.to_string_lossy();
    if path.is_empty() {
        return false;
    }
    path.ends_with(remote_basename(filename))
}
