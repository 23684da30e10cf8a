//! 標準環境変数解決実装（std::env を委譲）

use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::path::PathBuf;

/// 標準ライブラリの env をそのまま委譲する EnvResolver 実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn nonempty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

impl EnvResolver for StdEnvResolver {
    fn resolve_home_dir(&self) -> Result<PathBuf, Error> {
        if let Some(home) = nonempty_var("TEMPO_HOME") {
            return Ok(PathBuf::from(home));
        }
        if let Some(xdg) = nonempty_var("XDG_CONFIG_HOME") {
            return Ok(PathBuf::from(xdg).join("tempo"));
        }
        if let Some(home) = nonempty_var("HOME") {
            return Ok(PathBuf::from(home).join(".config").join("tempo"));
        }
        Err(Error::system(
            "Cannot resolve config directory: TEMPO_HOME, XDG_CONFIG_HOME and HOME are all unset",
        ))
    }

    fn resolve_log_file_path(&self) -> Result<PathBuf, Error> {
        nonempty_var("TEMPO_LOG")
            .map(PathBuf::from)
            .ok_or_else(|| Error::system("TEMPO_LOG is not set"))
    }
}
