//! Pet Eval Common Library
//!
//! 画像分類器の出力ラベル評価のコアロジック（I/Oなし）

pub mod types;
pub mod label;
pub mod matcher;
pub mod registry;
pub mod resolver;
pub mod stats;
pub mod error;

pub use types::{DogStatus, ImageRecord, RecordSet};
pub use label::{extract_truth_label, is_hidden_file, normalize_model_label};
pub use matcher::labels_match;
pub use registry::DogNameRegistry;
pub use resolver::{dog_status_for, resolve_dog_status};
pub use stats::{ResultCounts, StatValue, SummaryStats};
pub use error::{Error, Result};
