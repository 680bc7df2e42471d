use super::icon_path::SourceIconPath;
use super::source_error::SourceError;
use image::{DynamicImage, GenericImageView};
use tracing::debug;

/// 画像のカラーモード。アルファチャンネルの有無のみを区別する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// 不透明な RGB 3チャンネル。
    Rgb,
    /// アルファチャンネル付きの RGBA 4チャンネル。
    Rgba,
}

impl ColorMode {
    fn of(image: &DynamicImage) -> Self {
        if image.color().has_alpha() {
            ColorMode::Rgba
        } else {
            ColorMode::Rgb
        }
    }
}

/// デコード直後の変換元画像。
///
/// `load` でのみ生成され、以後は読み取り専用として扱う。
#[derive(Debug)]
pub struct SourceImage {
    image: DynamicImage,
    color_mode: ColorMode,
}

/// カラーモードを RGB8 / RGBA8 に揃えた画像。`png_export::export_all` の入力になる。
#[derive(Debug, Clone)]
pub struct NormalizedIcon {
    image: DynamicImage,
    color_mode: ColorMode,
}

impl SourceImage {
    /// アイコンファイルを読み込み、メモリ上の画像にデコードします。
    ///
    /// フォーマットは拡張子ではなくファイルの中身から判定するため、
    /// ICO コンテナに限らず `image` クレートが扱える形式であれば読み込めます。
    ///
    /// # 戻り値
    /// * `Ok(SourceImage)`: デコードに成功した場合。
    /// * `Err(SourceError::NotFound)`: ファイルが存在しない場合。
    /// * `Err(SourceError::DecodeError)`: 画像として解釈できない場合。
    pub fn load(path: &SourceIconPath) -> Result<Self, SourceError> {
        let bytes = path.read_bytes()?;
        debug!(path = %path, bytes = bytes.len(), "ソースアイコンを読み込みました");

        let image = image::load_from_memory(&bytes).map_err(|e| SourceError::DecodeError {
            path: path.as_path().to_path_buf(),
            source: e,
        })?;

        let color_mode = ColorMode::of(&image);
        let (width, height) = image.dimensions();
        debug!(width, height, color = ?image.color(), "デコード完了");

        Ok(Self { image, color_mode })
    }

    /// カラーモードを正規化します。
    ///
    /// アルファチャンネルを持つ画像は RGBA8 に、それ以外は RGB8 に変換します。
    /// 16bit や浮動小数点の画像は 8bit に落とされます。
    pub fn normalize(self) -> NormalizedIcon {
        let image = match self.color_mode {
            ColorMode::Rgba => DynamicImage::ImageRgba8(self.image.into_rgba8()),
            ColorMode::Rgb => DynamicImage::ImageRgb8(self.image.into_rgb8()),
        };
        debug!(mode = ?self.color_mode, "カラーモードを正規化しました");

        NormalizedIcon {
            image,
            color_mode: self.color_mode,
        }
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

impl NormalizedIcon {
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }
    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}
