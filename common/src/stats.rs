//! 集計モジュール
//!
//! 犬判定済みのレコードを1パスで集計し、件数と割合を算出する。
//!
//! `n_dog_images` はモデルが犬と判定した件数（正解側ではない）。
//! `pct_correct_breeds` の分母はこの値になる。

use crate::error::{Error, Result};
use crate::types::ImageRecord;
use serde::{Deserialize, Serialize};

/// 件数の集計結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCounts {
    pub n_images: usize,
    pub n_dog_images: usize,
    pub n_correct_breeds: usize,
    pub n_correct_dogs: usize,
    pub n_nondog_img: usize,
    pub n_matches: usize,
}

impl ResultCounts {
    /// 犬判定済みレコードを集計
    ///
    /// 未判定のレコードがあればエラー。
    pub fn tally<'a, I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a ImageRecord>,
    {
        let mut counts = Self::default();

        for record in records {
            let status = record
                .dog_status
                .ok_or_else(|| Error::Unresolved(record.file_name.clone()))?;
            let matched = record.label_match;

            counts.n_images += 1;

            if status.model_says_dog {
                counts.n_dog_images += 1;
            }
            if matched && status.is_dog && status.model_says_dog {
                counts.n_correct_breeds += 1;
            }
            if status.is_dog && status.model_says_dog {
                counts.n_correct_dogs += 1;
            }
            if !status.is_dog && !status.model_says_dog {
                counts.n_nondog_img += 1;
            }
            if matched {
                counts.n_matches += 1;
            }
        }

        Ok(counts)
    }
}

/// 集計値（件数 or 割合）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Count(usize),
    Percent(f64),
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatValue::Count(n) => write!(f, "{}", n),
            StatValue::Percent(p) => write!(f, "{:.1}%", p),
        }
    }
}

/// 最終的な統計情報
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    #[serde(flatten)]
    pub counts: ResultCounts,
    pub pct_correct_breeds: f64,
    pub pct_matches: f64,
    pub pct_correct_dogs: f64,
}

impl SummaryStats {
    /// レコードから統計を算出
    pub fn compute<'a, I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a ImageRecord>,
    {
        Self::from_counts(ResultCounts::tally(records)?)
    }

    /// 件数から割合を算出
    ///
    /// 分母が0の場合は NaN を返さずエラーにする。
    pub fn from_counts(counts: ResultCounts) -> Result<Self> {
        if counts.n_images == 0 {
            return Err(Error::NoImages);
        }
        if counts.n_dog_images == 0 {
            return Err(Error::NoDogImages);
        }

        Ok(Self {
            counts,
            pct_correct_breeds: percent(counts.n_correct_breeds, counts.n_dog_images),
            pct_matches: percent(counts.n_matches, counts.n_images),
            pct_correct_dogs: percent(counts.n_correct_dogs, counts.n_images),
        })
    }

    /// 統計名と値の一覧（`n_*` は件数、`pct_*` は割合）
    pub fn entries(&self) -> Vec<(&'static str, StatValue)> {
        let c = &self.counts;
        vec![
            ("n_images", StatValue::Count(c.n_images)),
            ("n_dog_images", StatValue::Count(c.n_dog_images)),
            ("n_correct_breeds", StatValue::Count(c.n_correct_breeds)),
            ("n_correct_dogs", StatValue::Count(c.n_correct_dogs)),
            ("n_nondog_img", StatValue::Count(c.n_nondog_img)),
            ("n_matches", StatValue::Count(c.n_matches)),
            ("pct_correct_breeds", StatValue::Percent(self.pct_correct_breeds)),
            ("pct_matches", StatValue::Percent(self.pct_matches)),
            ("pct_correct_dogs", StatValue::Percent(self.pct_correct_dogs)),
        ]
    }

    /// 名前で統計値を取得
    pub fn get(&self, name: &str) -> Option<StatValue> {
        self.entries()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// 犬種の誤分類が存在する
    pub fn has_incorrect_breeds(&self) -> bool {
        self.counts.n_correct_breeds != self.counts.n_dog_images
    }

    /// 犬/非犬の誤分類が存在する
    pub fn has_incorrect_dogs(&self) -> bool {
        self.counts.n_correct_dogs + self.counts.n_nondog_img != self.counts.n_images
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    part as f64 / whole as f64 * 100.0
}
