use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable that overrides the document location.
pub const SPEC_ENV_VAR: &str = "OPENAPI_EXPLORER_SPEC";

/// Default filename for the document inside the data directory.
const DOCUMENT_FILENAME: &str = "openapi.json";

/// Resolve the default document location using platform-specific project directories.
pub fn default_document_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "openapi-explorer", "openapi-explorer")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(DOCUMENT_FILENAME))
}

/// Resolve which document file to load.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `OPENAPI_EXPLORER_SPEC` environment variable.
/// 3. `openapi.json` in the platform data directory.
///
/// A directory in steps 1 or 2 resolves to `openapi.json` inside it. The
/// returned path is not checked for existence; loading reports a missing file.
pub fn resolve_document_path(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        debug!("using explicit document path {}", explicit.display());
        return Ok(canonical_document_path(explicit));
    }

    if let Some(env_path) = env::var_os(SPEC_ENV_VAR) {
        let path = canonical_document_path(Path::new(&env_path));
        debug!("using {} from {SPEC_ENV_VAR}", path.display());
        return Ok(path);
    }

    let default = default_document_path()?;
    debug!("using default document path {}", default.display());
    Ok(default)
}

fn canonical_document_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        return path.join(DOCUMENT_FILENAME);
    }
    path.to_path_buf()
}
