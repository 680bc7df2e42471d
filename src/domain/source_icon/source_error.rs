use std::fmt;
use std::path::PathBuf;

// ソースアイコンの読み込み時に発生するエラー型を定義
#[derive(Debug)]
pub enum SourceError {
    /// 指定されたパスが存在しない場合。
    NotFound(PathBuf),
    /// パスは存在するが、通常のファイルではない場合（ディレクトリなど）。
    NotAFile(PathBuf),
    /// ファイルの読み込みに失敗した場合（権限不足など）。
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// ファイルは読めたが、画像としてデコードできなかった場合。
    DecodeError {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::NotFound(path) => {
                write!(f, "ファイル '{}' は存在しません。", path.display())
            }
            SourceError::NotAFile(path) => {
                write!(f, "パス '{}' はファイルではありません。", path.display())
            }
            SourceError::IoError { path, source } => {
                write!(f, "'{}' の読み込みに失敗しました: {}", path.display(), source)
            }
            SourceError::DecodeError { path, source } => {
                write!(
                    f,
                    "'{}' を画像としてデコードできません: {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::IoError { source, .. } => Some(source),
            SourceError::DecodeError { source, .. } => Some(source),
            _ => None,
        }
    }
}
