// crates/cli/src/args.rs
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "line_tally",
    version = crate::VERSION,
    about = "指定した拡張子のファイル行数を再帰的に集計します",
    after_help = "Examples:
  line_tally .
        Scan the current directory and ask for the extension
  line_tally /home/user/projects
        Scan '/home/user/projects' and ask for the extension
  line_tally src --ext rs
        Scan 'src' for '.rs' files without prompting"
)]
pub struct Args {
    /// 走査するルートディレクトリ
    #[arg(value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// 対象の拡張子（省略時は対話入力）
    #[arg(short, long, value_name = "EXT")]
    pub ext: Option<String>,

    /// ANSI カラーを無効化
    #[arg(long)]
    pub no_color: bool,

    /// ログの詳細度（-v, -vv, -vvv）
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
