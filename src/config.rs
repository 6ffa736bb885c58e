use crate::error::{PromptzError, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

const PROMPT_FILENAME: &str = "prompts.yaml";

/// Where the prompt catalog lives on disk.
///
/// The location is ordinary configuration, not a hardcoded global: tests
/// point it at a temp directory, hosts may colocate it with their own data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptzConfig {
    pub data_file: PathBuf,
}

impl PromptzConfig {
    /// Resolve the per-user default location
    /// (e.g. `~/.local/share/promptz/prompts.yaml` on Linux).
    pub fn resolve() -> Result<Self> {
        let proj_dirs = ProjectDirs::from("com", "promptz", "promptz").ok_or_else(|| {
            PromptzError::Store("Could not determine a user data directory".to_string())
        })?;
        Ok(Self {
            data_file: proj_dirs.data_dir().join(PROMPT_FILENAME),
        })
    }

    /// Use an explicit file location instead of the per-user default.
    pub fn with_data_file(path: impl Into<PathBuf>) -> Self {
        Self {
            data_file: path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_location_names_the_prompt_file() {
        let config = PromptzConfig::resolve().unwrap();
        assert_eq!(
            config.data_file.file_name().and_then(|n| n.to_str()),
            Some(PROMPT_FILENAME)
        );
    }

    #[test]
    fn explicit_location_wins() {
        let config = PromptzConfig::with_data_file("/tmp/somewhere/else.yaml");
        assert_eq!(config.data_file, PathBuf::from("/tmp/somewhere/else.yaml"));
    }
}
