use super::source_error::SourceError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// 変換元アイコンファイルへのパス。存在する通常ファイルであることが保証される。
#[derive(Debug, Clone)]
pub struct SourceIconPath {
    pub path: PathBuf,
}

impl SourceIconPath {
    // コンストラクタ: パスを受け取り、バリデーションを行う
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();

        // `Path::exists` は NotFound 以外の失敗（権限不足、シンボリックリンクのループなど）も
        // false にしてしまうため、metadata のエラー種別で判定する
        let metadata = fs::metadata(path).map_err(|e| io_error(path, e))?;
        if !metadata.is_file() {
            return Err(SourceError::NotAFile(path.to_path_buf()));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    // 内部のPathBufへの参照を返す
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// ファイルの中身をバイト列として読み込む。
    ///
    /// 検証後にファイルが削除された場合も `NotFound` として扱う。
    pub fn read_bytes(&self) -> Result<Vec<u8>, SourceError> {
        fs::read(&self.path).map_err(|e| io_error(&self.path, e))
    }
}

// NotFound のみを「存在しない」として扱い、それ以外は I/O エラーとして返す
fn io_error(path: &Path, e: std::io::Error) -> SourceError {
    if e.kind() == std::io::ErrorKind::NotFound {
        SourceError::NotFound(path.to_path_buf())
    } else {
        SourceError::IoError {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

// Displayトレイトの実装（表示用）
impl fmt::Display for SourceIconPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
