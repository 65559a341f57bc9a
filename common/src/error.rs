//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 画像が1枚もないため割合を計算できない
    #[error("No images were processed; percentages are undefined")]
    NoImages,

    /// モデルが犬と判定した画像が0枚（pct_correct_breedsの分母が0）
    #[error("No dog images were detected by the model; check the dog names file and classifier output")]
    NoDogImages,

    /// 犬判定パスを通っていないレコードを集計しようとした
    #[error("Record has no dog status yet: {0}")]
    Unresolved(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
