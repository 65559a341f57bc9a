pub mod cache;
mod command;
mod label_file;

pub use cache::CacheFile;
pub use command::CommandClassifier;
pub use label_file::LabelFileClassifier;

use crate::backend::ClassifierBackend;
use crate::config::Config;
use crate::error::Result;
use std::path::Path;
use std::time::Duration;

/// 画像分類器
///
/// 画像パスとアーキテクチャ名を受け取り、自由記述のラベルを返す。
/// 失敗はそのまま呼び出し元に伝える（リトライしない）。
pub trait Classifier: Sync {
    fn classify(&self, image_path: &Path, arch: &str) -> Result<String>;
}

impl<F> Classifier for F
where
    F: Fn(&Path, &str) -> Result<String> + Sync,
{
    fn classify(&self, image_path: &Path, arch: &str) -> Result<String> {
        self(image_path, arch)
    }
}

/// 設定とCLI指定から分類器を構築
pub fn build_classifier(
    backend: ClassifierBackend,
    config: &Config,
    label_file: Option<&Path>,
) -> Result<Box<dyn Classifier>> {
    match backend {
        ClassifierBackend::Command => {
            let program = config.classifier_command()?;
            Ok(Box::new(CommandClassifier::new(
                program,
                config.classifier_args.clone(),
                Duration::from_secs(config.timeout_seconds),
            )?))
        }
        ClassifierBackend::LabelFile => {
            let path = label_file.ok_or_else(|| {
                crate::error::EvalError::Config("--labels でラベルJSONを指定してください".into())
            })?;
            Ok(Box::new(LabelFileClassifier::load(path)?))
        }
    }
}
