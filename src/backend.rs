use clap::ValueEnum;

/// 分類器の呼び出し方式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ClassifierBackend {
    /// 外部コマンドを画像ごとに実行
    #[default]
    Command,
    /// 保存済みのラベルJSONを参照
    LabelFile,
}

impl ClassifierBackend {
    pub fn display_name(&self) -> &'static str {
        match self {
            ClassifierBackend::Command => "command",
            ClassifierBackend::LabelFile => "label-file",
        }
    }
}
