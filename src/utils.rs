use std::env;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use directories::ProjectDirs;
use scatter_config::Config;
use tracing::debug;

/// Where the config comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigPath {
    /// Given on the command line or in `SCATTER_CONFIG`; must exist.
    Explicit(PathBuf),
    /// The per-user location; the built-in config is used when nothing is there.
    User(PathBuf),
    /// No per-user location could be determined.
    BuiltIn,
}

impl ConfigPath {
    pub fn resolve(cli_path: Option<PathBuf>) -> Self {
        let env_path = env::var_os("SCATTER_CONFIG").map(PathBuf::from);
        Self::resolve_with(cli_path, env_path, default_config_path())
    }

    fn resolve_with(
        cli_path: Option<PathBuf>,
        env_path: Option<PathBuf>,
        user_path: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = cli_path.or(env_path) {
            return Self::Explicit(path);
        }

        match user_path {
            Some(path) => Self::User(path),
            None => Self::BuiltIn,
        }
    }

    pub fn load(&self) -> anyhow::Result<Config> {
        match self {
            Self::Explicit(path) => load_file(path),
            Self::User(path) if path.exists() => load_file(path),
            Self::User(path) => {
                debug!("{path:?} not found, using the built-in config");
                Ok(Config::load_default())
            }
            Self::BuiltIn => Ok(Config::load_default()),
        }
    }
}

fn load_file(path: &Path) -> anyhow::Result<Config> {
    // Debug formatting renders the full diagnostic with source snippets.
    Config::load(path).map_err(|err| anyhow!("{err:?}"))
}

pub fn default_config_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "scatter")?;
    Some(dirs.config_dir().join("config.kdl"))
}
