// --- 依存モジュール ---

use crate::domain::conversion_target::{ConversionTarget, ConversionTargets};
use crate::domain::source_icon::source_image::NormalizedIcon;

use image::imageops::FilterType;
use image::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// 書き出しに成功した PNG ファイルの情報。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedIcon {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// PNG の書き出し中に発生する可能性のあるエラー。
#[derive(Debug, Error)]
pub enum ExportError {
    /// 出力先の親ディレクトリを作成できなかった場合。
    #[error("ディレクトリ '{path}' を作成できません: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// PNG のエンコード、またはファイルへの書き込みに失敗した場合。
    #[error("'{path}' の書き込みに失敗しました: {source}")]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// 正規化済みの画像を、すべての出力ターゲットに対して PNG として書き出します。
///
/// ターゲットはリストの順番どおりに1つずつ処理され、途中でエラーが発生した時点で
/// 残りのターゲットは処理されません。それまでに書き出したファイルはそのまま残ります。
///
/// # 引数
/// - `icon`: 書き出し元の画像。
/// - `targets`: 出力ターゲットのリスト。
/// - `output_root`: 出力パスの基準ディレクトリ。`None` ならカレントディレクトリ基準。
/// - `on_written`: 1ファイル書き出すごとに呼ばれるコールバック。
///
/// # 戻り値
/// - `Ok(Vec<ExportedIcon>)`: 書き出したファイルの一覧（処理順）。
/// - `Err(ExportError)`: ディレクトリ作成や書き込みに失敗した場合。
pub fn export_all<F>(
    icon: &NormalizedIcon,
    targets: &ConversionTargets,
    output_root: Option<&Path>,
    mut on_written: F,
) -> Result<Vec<ExportedIcon>, ExportError>
where
    F: FnMut(&ExportedIcon),
{
    let mut exported = Vec::with_capacity(targets.len());
    for target in targets {
        let written = export_one(icon, target, output_root)?;
        on_written(&written);
        exported.push(written);
    }
    Ok(exported)
}

fn export_one(
    icon: &NormalizedIcon,
    target: &ConversionTarget,
    output_root: Option<&Path>,
) -> Result<ExportedIcon, ExportError> {
    let output_path = target.resolve(output_root);
    let (width, height) = target.dimensions();

    // STEP 1: 指定寸法ちょうどにリサイズする（アスペクト比は維持しない）
    let resized = icon
        .image()
        .resize_exact(width, height, FilterType::Lanczos3);
    debug!(path = %output_path.display(), width, height, "リサイズしました");

    // STEP 2: 親ディレクトリを作成する（既に存在していてもエラーにはならない）
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ExportError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    // STEP 3: PNG として保存する（既存ファイルは上書き）
    if output_path.is_file() {
        debug!(path = %output_path.display(), "既存のファイルを上書きします");
    }
    resized
        .save_with_format(&output_path, ImageFormat::Png)
        .map_err(|e| ExportError::Write {
            path: output_path.clone(),
            source: e,
        })?;

    Ok(ExportedIcon {
        path: output_path,
        width,
        height,
    })
}

// --- テストモジュール ---
