use anyhow::Context;
use clap::Parser;
use pet_eval::{cli, config, evaluate, export, pipeline, report, scanner};
use pet_eval::classifier::{self, CacheFile};
use cli::{Cli, Commands};
use config::Config;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load().context("設定ファイルの読み込みに失敗")?;

    match cli.command {
        Commands::Evaluate {
            dir,
            arch,
            dogfile,
            backend,
            labels,
            jobs,
            use_cache,
            no_incorrect_breeds,
            no_incorrect_dogs,
            output,
            excel,
        } => {
            let started = Instant::now();
            let folder = dir.unwrap_or_else(|| config.image_dir.clone());
            let dog_file = dogfile.unwrap_or_else(|| config.dog_file.clone());
            let arch = arch.unwrap_or_else(|| config.default_arch.clone());

            println!("🐶 pet-eval - 分類評価\n");

            let model = classifier::build_classifier(backend, &config, labels.as_deref())?;
            let options = pipeline::PipelineOptions {
                arch: arch.clone(),
                jobs: jobs.unwrap_or(config.jobs).max(1),
                show_progress: true,
            };

            println!(
                "[1/2] 分類中... (アーキテクチャ: {}, 方式: {}){}",
                arch,
                backend.display_name(),
                if use_cache { " (キャッシュ有効)" } else { "" }
            );
            let evaluation = evaluate::evaluate_folder(
                &folder,
                &dog_file,
                model.as_ref(),
                &options,
                use_cache,
            )
            .with_context(|| format!("{} の評価に失敗", folder.display()))?;
            println!("✔ {}枚を評価\n", evaluation.records.len());

            println!("[2/2] 集計結果\n");
            let options = report::ReportOptions {
                print_incorrect_breeds: !no_incorrect_breeds,
                print_incorrect_dogs: !no_incorrect_dogs,
            };
            print!(
                "{}",
                report::render_report(&evaluation.stats, &evaluation.records, &arch, options)
            );

            if output.is_some() || excel.is_some() {
                let full = export::EvaluationReport::new(&arch, evaluation.stats, &evaluation.records);

                if let Some(path) = output {
                    export::json::write_json(&full, &path)?;
                    println!("\n✔ JSON出力: {}", path.display());
                }
                if let Some(path) = excel {
                    export::excel::generate_excel(&full, &path)?;
                    println!("✔ Excel出力: {}", path.display());
                }
            }

            println!("\n所要時間: {}", report::format_elapsed(started.elapsed()));
        }

        Commands::Labels { dir } => {
            let images = scanner::scan_folder(&dir)?;
            for (file_name, label) in pipeline::truth_labels(&images) {
                let shown = if label.is_empty() { "(なし)" } else { label.as_str() };
                println!("{}\t{}", file_name, shown);
            }
        }

        Commands::Config { set_classifier, set_arch, show } => {
            let mut config = config;

            if let Some(command) = set_classifier {
                config.set_classifier(command)?;
                println!("✔ 分類器コマンドを設定しました");
            }

            if let Some(arch) = set_arch {
                config.set_arch(arch)?;
                println!("✔ 既定のアーキテクチャを設定しました");
            }

            if show {
                println!("設定:");
                println!(
                    "  分類器: {}",
                    config.classifier_command().unwrap_or_else(|_| "未設定".into())
                );
                println!("  引数: {}", config.classifier_args.join(" "));
                println!("  アーキテクチャ: {}", config.default_arch);
                println!("  犬名リスト: {}", config.dog_file.display());
                println!("  画像フォルダ: {}", config.image_dir.display());
                println!("  並列数: {}", config.jobs);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
            }
        }

        Commands::Cache { clear, dir, info } => {
            let target = dir.unwrap_or_else(|| PathBuf::from("."));
            let cache_path = CacheFile::cache_path(&target);

            if info || !clear {
                // デフォルトまたは--info: 情報表示
                if cache_path.exists() {
                    let cache = CacheFile::load(&target);
                    println!("キャッシュ情報:");
                    println!("  パス: {}", cache_path.display());
                    println!("  件数: {}", cache.len());
                    if let Ok(meta) = std::fs::metadata(&cache_path) {
                        println!("  サイズ: {} bytes", meta.len());
                    }
                } else {
                    println!("キャッシュファイルが存在しません: {}", cache_path.display());
                }
            }

            if clear {
                match CacheFile::clear(&target) {
                    Ok(true) => println!("✔ キャッシュを削除しました: {}", cache_path.display()),
                    Ok(false) => println!("キャッシュファイルが存在しません"),
                    Err(e) => println!("キャッシュ削除エラー: {}", e),
                }
            }
        }
    }

    Ok(())
}

// RUST_LOG が優先、なければ --verbose で debug
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
