//! 評価の一括実行テスト
//!
//! 画像フォルダ・犬名リスト・保存済みラベルを一時ディレクトリに用意し、
//! スキャンから集計までを通しで検証する。

use pet_eval::classifier::LabelFileClassifier;
use pet_eval::error::EvalError;
use pet_eval::evaluate::{evaluate_folder, summarize};
use pet_eval::pipeline::{build_record, PipelineOptions};
use pet_eval::report::{incorrect_breeds, incorrect_dogs};
use pet_eval_common::{resolve_dog_status, DogNameRegistry, RecordSet};
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

const DOG_NAMES: &str = "beagle\nbasset hound\nbasset, basset hound\nboston terrier\ngerman shepherd dog\n";

struct Fixture {
    _dir: TempDir,
    images: PathBuf,
    dog_file: PathBuf,
}

fn setup(files: &[&str]) -> Fixture {
    let dir = tempdir().expect("Failed to create temp dir");
    let images = dir.path().join("pet_images");
    std::fs::create_dir(&images).unwrap();
    for name in files {
        std::fs::write(images.join(name), name.as_bytes()).unwrap();
    }

    let dog_file = dir.path().join("dognames.txt");
    std::fs::write(&dog_file, DOG_NAMES).unwrap();

    Fixture { _dir: dir, images, dog_file }
}

fn labels(json: &str) -> LabelFileClassifier {
    LabelFileClassifier::from_json(json).expect("ラベルJSONが不正")
}

#[test]
fn test_evaluate_end_to_end() {
    let fx = setup(&[
        "Beagle_01.jpg",
        "Basset_hound_02.jpg",
        "Boston_terrier_03.jpg",
        "cat_04.jpg",
        ".DS_Store",
    ]);
    let classifier = labels(
        r#"{
            "Beagle_01.jpg": "beagle",
            "Basset_hound_02.jpg": "Basset, basset hound",
            "Boston_terrier_03.jpg": "Boston terrier, a small breed",
            "cat_04.jpg": "tabby, tabby cat"
        }"#,
    );

    let evaluation = evaluate_folder(&fx.images, &fx.dog_file, &classifier, &PipelineOptions::default(), false)
        .expect("評価に失敗");
    let c = evaluation.stats.counts;

    // 隠しファイルは対象外
    assert_eq!(c.n_images, 4);
    // "boston terrier, a small breed" はリストと完全一致しない
    assert_eq!(c.n_dog_images, 2);
    assert_eq!(c.n_correct_breeds, 2);
    assert_eq!(c.n_correct_dogs, 2);
    assert_eq!(c.n_nondog_img, 1);
    assert_eq!(c.n_matches, 4);

    assert_eq!(evaluation.stats.pct_correct_breeds, 100.0);
    assert_eq!(evaluation.stats.pct_matches, 100.0);
    assert_eq!(evaluation.stats.pct_correct_dogs, 50.0);

    let breeds = incorrect_breeds(&evaluation.records);
    assert_eq!(breeds.len(), 1);
    assert_eq!(breeds[0].file_name, "Boston_terrier_03.jpg");

    let dogs = incorrect_dogs(&evaluation.records);
    assert_eq!(dogs.len(), 1);
    assert_eq!(dogs[0].file_name, "Boston_terrier_03.jpg");
}

#[test]
fn test_evaluate_parallel_same_result() {
    let fx = setup(&["Beagle_01.jpg", "Beagle_02.jpg", "cat_03.jpg", "fox_04.jpg"]);
    let classifier = labels(
        r#"{
            "Beagle_01.jpg": "beagle",
            "Beagle_02.jpg": "basset, basset hound",
            "cat_03.jpg": "beagle",
            "fox_04.jpg": "red fox"
        }"#,
    );

    let sequential = evaluate_folder(&fx.images, &fx.dog_file, &classifier, &PipelineOptions::default(), false)
        .unwrap();
    let parallel_options = PipelineOptions { jobs: 3, ..Default::default() };
    let parallel = evaluate_folder(&fx.images, &fx.dog_file, &classifier, &parallel_options, false).unwrap();

    assert_eq!(sequential.stats, parallel.stats);
    let a: Vec<_> = sequential.records.iter().cloned().collect();
    let b: Vec<_> = parallel.records.iter().cloned().collect();
    assert_eq!(a, b);
}

#[test]
fn test_evaluate_missing_label_aborts() {
    let fx = setup(&["Beagle_01.jpg", "cat_02.jpg"]);
    let classifier = labels(r#"{"Beagle_01.jpg": "beagle"}"#);

    let err = evaluate_folder(&fx.images, &fx.dog_file, &classifier, &PipelineOptions::default(), false)
        .unwrap_err();
    assert!(matches!(err, EvalError::Classifier(_)));
}

#[test]
fn test_evaluate_no_dog_images_is_error() {
    let fx = setup(&["cat_01.jpg", "fox_02.jpg"]);
    let classifier = labels(r#"{"cat_01.jpg": "tabby cat", "fox_02.jpg": "red fox"}"#);

    let err = evaluate_folder(&fx.images, &fx.dog_file, &classifier, &PipelineOptions::default(), false)
        .unwrap_err();
    assert!(matches!(err, EvalError::Common(pet_eval_common::Error::NoDogImages)));
}

#[test]
fn test_summarize_empty_record_set_is_error() {
    let registry = DogNameRegistry::from_text(DOG_NAMES);
    let err = summarize(RecordSet::new(), &registry).unwrap_err();
    assert!(matches!(err, EvalError::Common(pet_eval_common::Error::NoImages)));
}

#[test]
fn test_beagle_scenario() {
    let record = build_record("beagle_01.jpg", "beagle", "Beagle, a hound breed");
    assert_eq!(record.truth_label, "beagle");
    assert_eq!(record.model_label, "beagle, a hound breed");
    assert!(record.label_match);

    let registry = DogNameRegistry::from_text("beagle\n");
    let mut records: RecordSet = std::iter::once(record).collect();
    resolve_dog_status(&mut records, &registry);
    let resolved = records.get("beagle_01.jpg").unwrap();
    assert_eq!(resolved.is_dog(), Some(true));
    // モデルラベル全体はリストにない
    assert_eq!(resolved.model_says_dog(), Some(false));

    // モデルが犬と判定した画像がないので集計はエラー
    let err = summarize(records, &registry).unwrap_err();
    assert!(matches!(err, EvalError::Common(pet_eval_common::Error::NoDogImages)));
}

#[test]
fn test_single_dog_image() {
    let fx = setup(&["Beagle_01.jpg"]);
    let classifier = labels(r#"{"Beagle_01.jpg": "beagle"}"#);

    let evaluation = evaluate_folder(&fx.images, &fx.dog_file, &classifier, &PipelineOptions::default(), false)
        .unwrap();
    assert_eq!(evaluation.stats.pct_correct_breeds, 100.0);
}
