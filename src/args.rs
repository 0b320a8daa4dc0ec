// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::options::OutputFormat;
use crate::parsers::parse_percentage;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "comment_rate",
    version = crate::VERSION,
    about = "ソースファイルのコメント率を計測するツール",
    long_about = "Classifies every line of a source file as code, comment or blank and \
                  reports the comment rate, its grade, and the number of documented \
                  methods and classes."
)]
pub struct Args {
    /// 解析対象のファイル
    #[arg(value_hint = ValueHint::FilePath)]
    pub path: PathBuf,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: OutputFormat,

    /// 対象とする拡張子（カンマ区切り/複数指定可）
    #[arg(long, value_delimiter = ',', help_heading = "フィルタ")]
    pub ext: Vec<String>,

    /// 拡張子チェックを行わない
    #[arg(long, conflicts_with = "ext", help_heading = "フィルタ")]
    pub all_extensions: bool,

    /// Javadoc のメソッド/クラス注釈を走査しない
    #[arg(long, help_heading = "解析")]
    pub no_doc_scan: bool,

    /// コメント率がこの値 (%) 未満なら失敗終了する
    #[arg(long, value_parser = parse_percentage, help_heading = "動作")]
    pub fail_under: Option<f64>,

    /// ログ出力を増やす (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,
}
