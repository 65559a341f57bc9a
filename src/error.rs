use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("分類器コマンドが設定されていません。`pet-eval config --set-classifier COMMAND` で設定してください")]
    MissingClassifier,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("分類器エラー: {0}")]
    Classifier(String),

    #[error("ラベルファイルが不正: {0}")]
    InvalidLabelFile(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error(transparent)]
    Common(#[from] pet_eval_common::Error),
}

pub type Result<T> = std::result::Result<T, EvalError>;
