use std::path::PathBuf;

/// The name of the per-user data folder
pub const DATA_FOLDER: &str = ".list-order";

/// Get the per-user data directory (`~/.list-order`).
///
/// Falls back to the current directory when no home directory is known.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_FOLDER)
}
