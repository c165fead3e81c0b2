use crate::error::{ArchiveError, Result};
use crate::resolver::{default_categories, Category};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// NAS 部署配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// NAS 地址
    pub host: String,
    /// 共享目录名
    pub share: String,
    /// 归档根目录覆盖（已挂载的本地路径；默认按 \\host\share 拼接）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_root: Option<PathBuf>,
    /// 扫描目录（默认当前目录）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_dir: Option<PathBuf>,
    /// 分类表
    pub categories: Vec<Category>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ArchiveError::Config("找不到用户主目录".into()))?;
        Ok(home.join(".config").join("case-archive").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            host: "192.168.0.180".into(),
            share: "案件".into(),
            remote_root: None,
            scan_dir: None,
            categories: default_categories(),
        }
    }

    /// 归档根目录（优先使用配置的覆盖路径）
    pub fn remote_root(&self) -> PathBuf {
        match &self.remote_root {
            Some(root) => root.clone(),
            None => crate::preflight::remote_root(&self.host, &self.share),
        }
    }

    pub fn set_host(&mut self, host: String) -> Result<()> {
        self.host = host;
        self.save()
    }

    pub fn set_share(&mut self, share: String) -> Result<()> {
        self.share = share;
        self.save()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.host, "192.168.0.180");
        assert_eq!(config.share, "案件");
        assert_eq!(config.categories.len(), 3);
    }

    #[test]
    fn test_remote_root_default() {
        let config = Config::default();
        assert_eq!(
            config.remote_root(),
            PathBuf::from(r"\\192.168.0.180\案件")
        );
    }

    #[test]
    fn test_remote_root_override() {
        let config = Config {
            remote_root: Some(PathBuf::from("/mnt/nas")),
            ..Config::default()
        };
        assert_eq!(config.remote_root(), Path::new("/mnt/nas"));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.host, config.host);
        assert_eq!(parsed.categories, config.categories);
        assert!(parsed.remote_root.is_none());
    }
}
