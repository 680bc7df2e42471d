use crate::domain::conversion_target::TargetValidationError;
use crate::domain::png_export::ExportError;
use crate::domain::source_icon::source_error::SourceError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("ソースファイル {} が見つかりません", .0.display())]
    SourceNotFound(PathBuf),

    #[error("ソース画像の読み込みエラー: {0}")]
    Source(#[source] SourceError),

    #[error("出力ターゲットの定義エラー: {0}")]
    Target(#[from] TargetValidationError),

    #[error("PNG書き出しエラー: {0}")]
    Export(#[from] ExportError),
}

// 「ファイルが存在しない」ケースだけはトップレベルで区別して報告するため、専用のバリアントに振り分ける。
impl From<SourceError> for AppError {
    fn from(e: SourceError) -> Self {
        match e {
            SourceError::NotFound(path) => AppError::SourceNotFound(path),
            other => AppError::Source(other),
        }
    }
}
