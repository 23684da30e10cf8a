//! 起動設定の読み込み（adapter 層）
//!
//! 解決した設定ディレクトリ直下の config.json を読む。無ければ既定値。
//! 壊れていれば stderr に警告を出して既定値にする（起動は妨げない）。

use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem};
use serde::Deserialize;
use std::path::Path;

/// config.json の内容（すべて省略可能。CLI フラグが優先される）
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub offset_hours: Option<i32>,
    pub offset_minutes: Option<i32>,
    pub fps: Option<u32>,
    pub view: Option<String>,
}

/// 設定ディレクトリから config.json を読む
pub fn load_file_config(env: &dyn EnvResolver, fs: &dyn FileSystem) -> FileConfig {
    let Ok(home) = env.resolve_home_dir() else {
        return FileConfig::default();
    };
    let path = home.join("config.json");
    if !fs.exists(&path) {
        return FileConfig::default();
    }
    match read_config(fs, &path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load {}: {}", path.display(), e);
            FileConfig::default()
        }
    }
}

fn read_config(fs: &dyn FileSystem, path: &Path) -> Result<FileConfig, Error> {
    let content = fs.read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| Error::json_msg(e.to_string()))
}
