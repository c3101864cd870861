//! Filesystem locations for session data and traces.

use std::path::PathBuf;

/// Returns the data directory used for the session store and trace files.
///
/// An explicit `configured` directory wins. Otherwise the platform data directory
/// from `directories` is used (`~/.local/share/timewheel` on Linux), falling
/// back to `./.timewheel` when no home directory can be determined.
#[must_use]
pub fn get_data_dir(configured: Option<&str>) -> PathBuf {
    if let Some(dir) = configured.filter(|d| !d.trim().is_empty()) {
        return PathBuf::from(expand_tilde(dir));
    }

    directories::ProjectDirs::from("", "", "timewheel").map_or_else(
        || PathBuf::from(".timewheel"),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

/// Expands a leading `~` to the user's home directory when one is known.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf()) else {
        return path.to_string();
    };

    if path == "~" {
        home.to_string_lossy().into_owned()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest).to_string_lossy().into_owned()
    } else {
        path.to_string()
    }
}

/// Path of the JSON session store inside `data_dir`.
#[must_use]
pub fn session_file(data_dir: &std::path::Path) -> PathBuf {
    data_dir.join("session.json")
}
