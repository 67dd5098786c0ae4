//! Path expansion and normalization utilities.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use path_clean::PathClean;

use crate::error::{Error, Result};

/// File name of the user config, stored in the home directory.
const CONFIG_FILE_NAME: &str = ".resume.toml";

/// Return the default config path for the current platform.
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(Error::HomeDirMissing)?;
    Ok(home.join(CONFIG_FILE_NAME))
}

/// Expand a user-provided path and resolve it relative to a base directory.
pub fn expand_path(raw: &str, base_dir: &Path) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw).map_err(|error| Error::PathExpansion {
        path: raw.to_string(),
        source: error,
    })?;
    let expanded_path = PathBuf::from(expanded.as_ref());
    let resolved = if expanded_path.is_relative() {
        base_dir.join(expanded_path)
    } else {
        expanded_path
    };
    Ok(normalize_path(&resolved))
}

/// Normalize a path by canonicalizing when it exists and cleaning otherwise.
pub fn normalize_path(path: &Path) -> PathBuf {
    match dunce::canonicalize(path) {
        Ok(canonical) => canonical,
        Err(_) => path.clean(),
    }
}

/// Render a path for display, using a tilde prefix for the home directory.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~{}{}", MAIN_SEPARATOR, stripped.display());
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{expand_path, normalize_path};

    #[test]
    fn resolves_relative_paths_against_base() {
        let resolved = expand_path("data/../resumes", Path::new("/nonexistent/base"))
            .expect("expand path");
        assert_eq!(resolved, Path::new("/nonexistent/base/resumes"));
    }

    #[test]
    fn keeps_absolute_paths() {
        let resolved = expand_path("/nonexistent/abs", Path::new("/elsewhere")).expect("expand");
        assert_eq!(resolved, Path::new("/nonexistent/abs"));
    }

    #[test]
    fn cleans_missing_paths() {
        let cleaned = normalize_path(Path::new("/nonexistent/./a/../b"));
        assert_eq!(cleaned, Path::new("/nonexistent/b"));
    }
}
