//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! アイコン変換の具体的な処理フローを実装します。

use crate::cli::Args;
use icon_exporter::domain::conversion_target::ConversionTargets;
use icon_exporter::domain::png_export::{self, ExportedIcon};
use icon_exporter::domain::source_icon::icon_path::SourceIconPath;
use icon_exporter::domain::source_icon::source_image::SourceImage;
use icon_exporter::error::AppError;
use tracing::debug;

// --- public な関数 ---

/// アプリケーションのメインロジックを実行します。
///
/// # 引数
/// * `args`: コマンドラインからパースされた引数 (`cli::Args`)。
///
/// # 戻り値
/// * `Ok(Vec<ExportedIcon>)`: すべてのアイコンを書き出した場合。
/// * `Err(AppError)`: 最初に発生したエラー。以降のターゲットは処理されない。
pub fn run(args: &Args) -> Result<Vec<ExportedIcon>, AppError> {
    // 1. 出力ターゲットの準備
    let targets = ConversionTargets::standard_icon_set()?;

    // 2. ソースアイコンの読み込みと正規化
    // ここで失敗した場合は、まだ1つもファイルを書き出していない。
    let source_path = SourceIconPath::new(&args.source)?;
    let icon = SourceImage::load(&source_path)?.normalize();
    debug!(
        source = %source_path,
        mode = ?icon.color_mode(),
        targets = targets.len(),
        "変換を開始します"
    );

    // 3. 各ターゲットへ書き出し
    let exported = png_export::export_all(&icon, &targets, args.output_root.as_deref(), |e| {
        println!("✓ 作成しました: {}", e.path.display());
    })?;

    // 4. 完了メッセージ
    println!("\nすべてのアイコンを正常に変換しました！");
    Ok(exported)
}

/// トップレベルで表示するエラーメッセージを組み立てます。
///
/// ソースファイルが存在しない場合だけは専用のメッセージにし、それ以外はまとめて扱います。
pub fn error_message(err: &AppError) -> String {
    match err {
        AppError::SourceNotFound(path) => {
            format!("エラー: ファイル {} が見つかりません！", path.display())
        }
        other => format!("変換中にエラーが発生しました: {}", other),
    }
}
