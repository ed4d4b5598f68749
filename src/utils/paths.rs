use std::path::{Component, Path, PathBuf};

use crate::error::PathError;

/// Validates that a room name can be used as a single directory inside the export root
///
/// # Errors
///
/// Returns an error if the name:
/// - is empty
/// - contains `/` or `\`
/// - is `.` or `..`
pub fn validate_room_dir(name: &str) -> Result<(), PathError> {
    if name.is_empty() {
        return Err(PathError::Empty);
    }
    if name.contains(['/', '\\']) {
        return Err(PathError::Separator(name.to_string()));
    }

    // Anything left must be exactly one normal component
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(PathError::Relative(name.to_string())),
    }
}

/// Relative path `<room>/<file_name>` of a day file
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use slack_dump::utils::room_file_path;
///
/// let path = room_file_path("general", "2024-01-31.json")?;
/// assert_eq!(path, PathBuf::from("general").join("2024-01-31.json"));
/// # Ok::<(), slack_dump::error::PathError>(())
/// ```
pub fn room_file_path(room: &str, file_name: &str) -> Result<PathBuf, PathError> {
    validate_room_dir(room)?;
    Ok(Path::new(room).join(file_name))
}
