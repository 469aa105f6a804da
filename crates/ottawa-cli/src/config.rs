use std::path::{Path, PathBuf};

use ottawa_core::ReferenceContent;

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("ottawa-check"))
}

/// Default location of the reference content file.
pub fn content_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("content.json"))
}

/// Load content from `explicit` if given, else from the config directory,
/// else fall back to the built-in tables.
pub fn load_content(explicit: Option<&Path>) -> eyre::Result<ReferenceContent> {
    if let Some(path) = explicit {
        return read_content(path);
    }

    match content_path() {
        Ok(path) if path.exists() => read_content(&path),
        _ => {
            tracing::debug!("no content file found, using built-in reference content");
            Ok(ReferenceContent::default())
        }
    }
}

pub fn read_content(path: &Path) -> eyre::Result<ReferenceContent> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read content at {}: {e}", path.display()))?;
    let content = ReferenceContent::from_json(&contents)
        .map_err(|e| eyre::eyre!("invalid content at {}: {e}", path.display()))?;
    tracing::info!(path = %path.display(), zones = content.zones.len(), "reference content loaded");
    Ok(content)
}

/// Write the built-in content to `path` as a starting point for edits.
pub fn write_default_content(path: &Path) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, ReferenceContent::default().to_json()?)?;
    tracing::info!(path = %path.display(), "default content written");
    Ok(())
}
