//! ラベル抽出・正規化モジュール
//!
//! - 正解ラベル: ファイル名（`Basset_hound_01.jpg` 等）から生成
//! - モデルラベル: 分類器の自由記述出力を前後空白除去＋小文字化

/// カメラが自動付与するファイル名プレフィックス（ラベルとして扱わない）
const CAMERA_PREFIXES: &[&str] = &["IMG", "DSC", "DSCF", "DSCN", "PXL", "MVIMG"];

/// ファイル名から正解ラベルを抽出
///
/// `_` で分割し、英字のみで構成されるトークンだけを小文字にして
/// 空白区切りで連結する。数字や拡張子を含むトークン、
/// カメラ既定のプレフィックス（`IMG` 等）は捨てる。
///
/// ```
/// use pet_eval_common::extract_truth_label;
///
/// assert_eq!(extract_truth_label("Basset_hound_01.jpg"), "basset hound");
/// assert_eq!(extract_truth_label("IMG_0001.jpg"), "");
/// ```
pub fn extract_truth_label(file_name: &str) -> String {
    let mut label = String::new();

    for token in file_name.split('_') {
        if is_alpha_token(token) && !CAMERA_PREFIXES.contains(&token) {
            label.push_str(&token.to_lowercase());
            label.push(' ');
        }
    }

    label.trim().to_string()
}

/// 隠しファイル（`.` で始まる名前）判定
pub fn is_hidden_file(file_name: &str) -> bool {
    file_name.starts_with('.')
}

/// 分類器の出力ラベルを正規化（前後空白除去 + 小文字化）
pub fn normalize_model_label(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// 空文字列は英字トークンとみなさない
fn is_alpha_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_word() {
        assert_eq!(extract_truth_label("beagle_01.jpg"), "beagle");
        assert_eq!(extract_truth_label("Beagle_01125.jpg"), "beagle");
    }

    #[test]
    fn test_extract_multi_word() {
        assert_eq!(
            extract_truth_label("German_shepherd_dog_04890.jpg"),
            "german shepherd dog"
        );
    }

    #[test]
    fn test_extract_no_alpha_token() {
        // "IMG" はカメラ既定名、"0001.jpg" は数字と記号を含む
        assert_eq!(extract_truth_label("IMG_0001.jpg"), "");
        assert_eq!(extract_truth_label("DSC_1234.JPG"), "");
        assert_eq!(extract_truth_label("0001_0002.jpg"), "");
        assert_eq!(extract_truth_label("123.jpg"), "");
    }

    #[test]
    fn test_extract_discards_extension_token() {
        // 最後のトークンは拡張子付きなので捨てられる
        assert_eq!(extract_truth_label("cat_dog.jpg"), "cat");
    }

    #[test]
    fn test_extract_keeps_uppercase_breed() {
        // プレフィックス一覧と完全一致しなければ大文字でも残す
        assert_eq!(extract_truth_label("PUG_01.jpg"), "pug");
        assert_eq!(extract_truth_label("img_cat_01.jpg"), "img cat");
    }

    #[test]
    fn test_extract_empty_tokens() {
        assert_eq!(extract_truth_label("__fox__squirrel_1.jpg"), "fox squirrel");
        assert_eq!(extract_truth_label(""), "");
    }

    #[test]
    fn test_is_hidden_file() {
        assert!(is_hidden_file(".DS_Store"));
        assert!(is_hidden_file(".classify-cache.json"));
        assert!(!is_hidden_file("beagle_01.jpg"));
    }

    #[test]
    fn test_normalize_model_label() {
        assert_eq!(
            normalize_model_label("  Beagle, a hound breed \n"),
            "beagle, a hound breed"
        );
        assert_eq!(normalize_model_label(""), "");
    }
}
