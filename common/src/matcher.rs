//! ラベル照合モジュール
//!
//! 正解ラベルがモデルラベル中に「語として」含まれるかを判定する。
//!
//! 判定は最初の出現位置のみを見る。以下のいずれかを満たせば一致:
//! - 完全一致
//! - 左境界: 直前の文字が空白
//! - 右境界: 文字列末尾、または直後が空白・`,`・`.`
//!
//! 左右の境界は OR で結合する（両方は要求しない）。
//! そのため `"hotdog"` は `"dog"` に一致するが、`"doghouse"` は一致しない。
//!
//! 空の正解ラベル（`IMG_0001.jpg` など）は先頭に見つかる扱いで、常に一致。

/// 正解ラベルがモデルラベル中に語として含まれるか
///
/// 両方とも正規化済み（小文字・前後空白なし）であること。
///
/// ```
/// use pet_eval_common::labels_match;
///
/// assert!(labels_match("beagle, a hound breed", "beagle"));
/// assert!(!labels_match("doghouse", "dog"));
/// ```
pub fn labels_match(model_label: &str, truth_label: &str) -> bool {
    if truth_label.is_empty() {
        return true;
    }

    let Some(found) = model_label.find(truth_label) else {
        return false;
    };

    let end = found + truth_label.len();

    // 完全一致
    if found == 0 && end == model_label.len() {
        return true;
    }

    let before = model_label[..found].chars().next_back();
    let after = model_label[end..].chars().next();

    let left_boundary = before == Some(' ');
    let right_boundary = matches!(after, None | Some(' ') | Some(',') | Some('.'));

    left_boundary || right_boundary
}
