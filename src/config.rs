use crate::error::{EvalError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 分類器コマンドを上書きする環境変数
pub const CLASSIFIER_ENV: &str = "PET_EVAL_CLASSIFIER";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 分類器の実行ファイル
    pub classifier_command: Option<String>,
    /// 分類器の引数（`{image}` `{arch}` を置換）
    pub classifier_args: Vec<String>,
    pub default_arch: String,
    pub dog_file: PathBuf,
    pub image_dir: PathBuf,
    pub jobs: usize,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classifier_command: None,
            classifier_args: vec!["{image}".into(), "{arch}".into()],
            default_arch: "vgg".into(),
            dog_file: PathBuf::from("dognames.txt"),
            image_dir: PathBuf::from("pet_images/"),
            jobs: 1,
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
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
            .ok_or_else(|| EvalError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("pet-eval").join("config.json"))
    }

    /// 分類器コマンドを取得（環境変数を優先）
    pub fn classifier_command(&self) -> Result<String> {
        if let Ok(command) = std::env::var(CLASSIFIER_ENV) {
            if !command.trim().is_empty() {
                return Ok(command);
            }
        }

        self.classifier_command.clone().ok_or(EvalError::MissingClassifier)
    }

    pub fn set_classifier(&mut self, command: String) -> Result<()> {
        self.classifier_command = Some(command);
        self.save()
    }

    pub fn set_arch(&mut self, arch: String) -> Result<()> {
        self.default_arch = arch;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_arch, "vgg");
        assert_eq!(config.dog_file, PathBuf::from("dognames.txt"));
        assert_eq!(config.image_dir, PathBuf::from("pet_images/"));
        assert_eq!(config.jobs, 1);
        assert!(config.classifier_command.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"default_arch": "resnet"}"#).unwrap();
        assert_eq!(config.default_arch, "resnet");
        assert_eq!(config.classifier_args, vec!["{image}", "{arch}"]);
        assert_eq!(config.timeout_seconds, 120);
    }
}
