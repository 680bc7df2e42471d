use clap::Parser;
use std::path::PathBuf;

/// ICOなどのアイコンファイルから、Webサイト用のPNGアイコン一式を生成するツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 変換元のアイコンファイルのパス
    #[arg(default_value = "logo_gb.ico")]
    pub source: PathBuf,

    /// 出力パス (public/images/...) の基準となるフォルダ (オプション: デフォルトはカレントディレクトリ)
    #[arg(short, long)]
    pub output_root: Option<PathBuf>,

    /// デバッグログを表示する (RUST_LOG で上書き可能)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_logo_gb_ico_in_current_directory() {
        let args = Args::parse_from(["icon_exporter"]);
        assert_eq!(args.source, PathBuf::from("logo_gb.ico"));
        assert!(args.output_root.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn accepts_source_and_output_root() {
        let args = Args::parse_from(["icon_exporter", "assets/logo.ico", "-o", "site", "-v"]);
        assert_eq!(args.source, PathBuf::from("assets/logo.ico"));
        assert_eq!(args.output_root, Some(PathBuf::from("site")));
        assert!(args.verbose);
    }
}
