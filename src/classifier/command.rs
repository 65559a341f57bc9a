//! 外部コマンド分類器
//!
//! 画像1枚ごとに分類器プログラムを実行し、標準出力をラベルとして受け取る。
//! 引数中の `{image}` `{arch}` は画像パス・アーキテクチャ名に置換する。
//! どちらのプレースホルダもなければ末尾に両方を追加する。

use super::Classifier;
use crate::error::{EvalError, Result};
use std::path::Path;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;
use tokio::runtime::Runtime;

#[derive(Debug)]
pub struct CommandClassifier {
    program: String,
    args: Vec<String>,
    timeout: Duration,
    // 並列分類時は複数スレッドから block_on される
    runtime: Runtime,
}

impl CommandClassifier {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        Ok(Self {
            program: program.into(),
            args,
            timeout,
            runtime,
        })
    }

    /// 実際に渡す引数を組み立てる
    fn build_args(&self, image_path: &Path, arch: &str) -> Vec<String> {
        let image = image_path.display().to_string();
        let has_placeholder = self
            .args
            .iter()
            .any(|a| a.contains("{image}") || a.contains("{arch}"));

        let mut args: Vec<String> = self
            .args
            .iter()
            .map(|a| a.replace("{image}", &image).replace("{arch}", arch))
            .collect();

        if !has_placeholder {
            args.push(image);
            args.push(arch.to_string());
        }
        args
    }

    async fn run(&self, args: &[String]) -> std::io::Result<Output> {
        // Windowsではcmd /c経由
        #[cfg(windows)]
        let mut command = {
            let mut c = Command::new("cmd");
            c.arg("/c").arg(&self.program).args(args);
            c
        };

        #[cfg(not(windows))]
        let mut command = {
            let mut c = Command::new(&self.program);
            c.args(args);
            c
        };

        // タイムアウトで future が破棄されたら子プロセスも終了させる
        let child = command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        child.wait_with_output().await
    }
}

impl Classifier for CommandClassifier {
    fn classify(&self, image_path: &Path, arch: &str) -> Result<String> {
        let args = self.build_args(image_path, arch);
        tracing::debug!(program = %self.program, ?args, "running classifier");

        let output = self
            .runtime
            .block_on(async { tokio::time::timeout(self.timeout, self.run(&args)).await })
            .map_err(|_| {
                EvalError::Classifier(format!(
                    "{} がタイムアウトしました ({}ms): {}",
                    self.program,
                    self.timeout.as_millis(),
                    image_path.display()
                ))
            })?
            .map_err(|e| EvalError::Classifier(format!("{} の実行に失敗: {}", self.program, e)))?;

        if !output.status.success() {
            return Err(EvalError::Classifier(format!(
                "{} が異常終了しました (終了コード {:?}): {}: {}",
                self.program,
                output.status.code(),
                image_path.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let label = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if label.is_empty() {
            return Err(EvalError::Classifier(format!(
                "{} がラベルを出力しませんでした: {}",
                self.program,
                image_path.display()
            )));
        }

        Ok(label)
    }
}
