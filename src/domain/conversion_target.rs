// use宣言：必要なクレートやモジュールをスコープに取り込む

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

// --- 定数定義 ---

/// 標準で出力するアイコンセット (出力パス, 幅, 高さ)。並び順がそのまま処理順になる。
const STANDARD_ICON_SET: [(&str, u32, u32); 9] = [
    ("public/images/favicon-96x96.png", 96, 96),
    ("public/images/favicon-96x96-notification.png", 96, 96),
    ("public/images/apple-touch-icon.png", 180, 180),
    ("public/images/android-chrome-192x192.png", 192, 192),
    ("public/images/android-chrome-192x192-maskable.png", 192, 192),
    ("public/images/android-chrome-512x512.png", 512, 512),
    ("public/images/android-chrome-512x512-maskable.png", 512, 512),
    ("public/images/logo_blue_512x512.png", 512, 512),
    ("public/images/mstile-150x150.png", 150, 150),
];

// --- 構造体定義 ---

/// 1つの出力ファイルとそのピクセル寸法。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionTarget {
    path: PathBuf,
    width: u32,
    height: u32,
}

/// 検証済みの出力ターゲットの順序付きリスト。
///
/// `new` を通じてのみインスタンス化でき、その際に以下の点が保証されます。
/// - リストが空でないこと
/// - 出力パスが互いに重複しないこと
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionTargets {
    targets: Vec<ConversionTarget>,
}

// --- エラー定義 ---

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetValidationError {
    #[error("出力ターゲットが1つも指定されていません")]
    EmptyTargets,

    #[error("'{path}' の寸法 {width}x{height} は無効です (0 は指定できません)")]
    ZeroDimension {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    #[error("出力パス '{0}' が重複しています")]
    DuplicatePath(PathBuf),
}

// --- 実装ブロック ---

impl ConversionTarget {
    /// 新しい出力ターゲットを作成します。幅・高さのどちらかが 0 の場合はエラーになります。
    pub fn new(
        path: impl Into<PathBuf>,
        width: u32,
        height: u32,
    ) -> Result<Self, TargetValidationError> {
        let path = path.into();
        if width == 0 || height == 0 {
            return Err(TargetValidationError::ZeroDimension {
                path,
                width,
                height,
            });
        }
        Ok(Self {
            path,
            width,
            height,
        })
    }

    /// 出力先のパスを解決します。
    ///
    /// `output_root` が `None` の場合はテーブルのパスをそのまま（カレントディレクトリ基準で）使います。
    pub fn resolve(&self, output_root: Option<&Path>) -> PathBuf {
        match output_root {
            Some(root) => root.join(&self.path),
            None => self.path.clone(),
        }
    }

    // --- ゲッターメソッド ---

    pub fn path(&self) -> &Path {
        &self.path
    }
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl ConversionTargets {
    pub fn new(targets: Vec<ConversionTarget>) -> Result<Self, TargetValidationError> {
        if targets.is_empty() {
            return Err(TargetValidationError::EmptyTargets);
        }

        let mut seen = HashSet::new();
        for target in &targets {
            if !seen.insert(target.path()) {
                return Err(TargetValidationError::DuplicatePath(
                    target.path().to_path_buf(),
                ));
            }
        }

        Ok(Self { targets })
    }

    /// Web 用の標準アイコンセット（favicon, apple-touch-icon, android-chrome, mstile）を返します。
    pub fn standard_icon_set() -> Result<Self, TargetValidationError> {
        let targets = STANDARD_ICON_SET
            .iter()
            .map(|&(path, width, height)| ConversionTarget::new(path, width, height))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(targets)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConversionTarget> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }
}

impl<'a> IntoIterator for &'a ConversionTargets {
    type Item = &'a ConversionTarget;
    type IntoIter = std::slice::Iter<'a, ConversionTarget>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}

// --- テストモジュール ---
