//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Git executable used to read commit history.
    pub git_binary: PathBuf,

    /// Skip merge commits when reading history.
    pub no_merges: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git_binary: PathBuf::from("git"),
            no_merges: false,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (GITIME_*)
        figment = figment.merge(Env::prefixed("GITIME_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for gitime.
///
/// On Linux: `~/.config/gitime`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("gitime"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_dirs_config_path_ends_with_gitime() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "gitime");
    }

    #[test]
    fn test_default_config_uses_git_from_path() {
        let config = Config::default();
        assert_eq!(config.git_binary, PathBuf::from("git"));
        assert!(!config.no_merges);
    }

    #[test]
    fn test_explicit_config_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"git_binary = "/opt/git/bin/git""#).unwrap();
        writeln!(file, "no_merges = true").unwrap();
        file.flush().unwrap();

        let config = Config::load_from(Some(file.path())).unwrap();
        assert_eq!(config.git_binary, PathBuf::from("/opt/git/bin/git"));
        assert!(config.no_merges);
    }

    #[test]
    fn test_invalid_config_value_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"no_merges = "sometimes""#).unwrap();
        file.flush().unwrap();

        assert!(Config::load_from(Some(file.path())).is_err());
    }
}
