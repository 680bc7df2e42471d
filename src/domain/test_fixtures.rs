// テスト用の画像ファイルを一時ディレクトリに書き出すヘルパー群
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{
    ExtendedColorType, GrayAlphaImage, ImageFormat, LumaA, Rgb, RgbImage, Rgba, RgbaImage,
};
use std::fs::File;
use std::path::{Path, PathBuf};

pub fn write_rgb_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    img.save_with_format(&path, ImageFormat::Png)
        .expect("PNGの書き込みに失敗");
    path
}

pub fn write_rgba_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let img = RgbaImage::from_fn(width, height, |x, y| {
        // 左半分は透明、右半分は不透明
        let alpha = if x < width / 2 { 0 } else { 255 };
        Rgba([200, (y % 256) as u8, 50, alpha])
    });
    img.save_with_format(&path, ImageFormat::Png)
        .expect("PNGの書き込みに失敗");
    path
}

pub fn write_la_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    let img = GrayAlphaImage::from_pixel(width, height, LumaA([90, 160]));
    img.save_with_format(&path, ImageFormat::Png)
        .expect("PNGの書き込みに失敗");
    path
}

/// 指定サイズの正方形エントリを持つ ICO ファイルを作成する。
pub fn write_ico(dir: &Path, name: &str, sizes: &[u32]) -> PathBuf {
    let buffers: Vec<(u32, Vec<u8>)> = sizes
        .iter()
        .map(|&size| {
            let img = RgbaImage::from_pixel(size, size, Rgba([10, 20, 200, 180]));
            (size, img.into_raw())
        })
        .collect();
    let frames: Vec<IcoFrame> = buffers
        .iter()
        .map(|(size, raw)| {
            IcoFrame::as_png(raw, *size, *size, ExtendedColorType::Rgba8)
                .expect("ICOフレームの作成に失敗")
        })
        .collect();

    let path = dir.join(name);
    let file = File::create(&path).expect("ICOファイルの作成に失敗");
    IcoEncoder::new(file)
        .encode_images(&frames)
        .expect("ICOのエンコードに失敗");
    path
}
