use crate::error::{PhotoShoppingError, Result};
use photo_shopping_common::PhotoCategory;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// サーバーURLを上書きする環境変数
pub const SERVER_ENV: &str = "PHOTO_SHOPPING_SERVER";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    pub default_category: PhotoCategory,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8080".into(),
            default_category: PhotoCategory::Product,
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（ファイルがなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 読み込みに失敗してもデフォルト値で続行する（壊れた設定を上書きする場合用）
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                warn!(error = %e, "設定ファイルの場所が不明なためデフォルト設定を使用");
                Self::default()
            }
        }
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "設定ファイルを読めないためデフォルト設定を使用");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PhotoShoppingError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-shopping").join("config.json"))
    }

    /// 使用するサーバーURL
    pub fn server_url(&self) -> String {
        // 環境変数を優先
        match std::env::var(SERVER_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.server_url.clone(),
        }
    }

    /// 使用するサーバーURL（`--server` > 環境変数 > 設定ファイル）
    pub fn resolve_server(&self, flag: Option<String>) -> String {
        match flag {
            Some(url) if !url.trim().is_empty() => url,
            _ => self.server_url(),
        }
    }

    pub fn set_server_url(&mut self, url: String) -> Result<()> {
        self.server_url = url;
        self.save()
    }
}
