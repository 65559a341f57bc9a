use clap::{Parser, Subcommand};
use crate::backend::ClassifierBackend;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pet-eval")]
#[command(about = "ペット画像分類器のラベル一致・犬判定の評価ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像フォルダを分類して評価結果を表示
    Evaluate {
        /// ペット画像フォルダ（省略時は設定値 / pet_images/）
        #[arg(long)]
        dir: Option<PathBuf>,

        /// モデルのアーキテクチャ名（分類器にそのまま渡す）
        #[arg(long)]
        arch: Option<String>,

        /// 犬名リストのテキストファイル
        #[arg(long)]
        dogfile: Option<PathBuf>,

        /// 分類器の呼び出し方式
        #[arg(long, value_enum, default_value = "command")]
        backend: ClassifierBackend,

        /// 保存済みラベルJSON（--backend label-file 用）
        #[arg(long)]
        labels: Option<PathBuf>,

        /// 分類の並列数
        #[arg(short, long)]
        jobs: Option<usize>,

        /// キャッシュを使用（再分類をスキップ）
        #[arg(long)]
        use_cache: bool,

        /// 犬種の誤分類一覧を表示しない
        #[arg(long)]
        no_incorrect_breeds: bool,

        /// 犬/非犬の誤分類一覧を表示しない
        #[arg(long)]
        no_incorrect_dogs: bool,

        /// 結果JSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 結果Excelの出力先
        #[arg(long)]
        excel: Option<PathBuf>,
    },

    /// ファイル名から抽出した正解ラベルを表示
    Labels {
        /// ペット画像フォルダ
        #[arg(required = true)]
        dir: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// 分類器コマンドを設定
        #[arg(long)]
        set_classifier: Option<String>,

        /// 既定のアーキテクチャ名を設定
        #[arg(long)]
        set_arch: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },

    /// キャッシュ管理
    Cache {
        /// キャッシュを削除
        #[arg(long)]
        clear: bool,

        /// 対象フォルダ（省略時はカレント）
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// キャッシュ情報を表示
        #[arg(long)]
        info: bool,
    },
}
