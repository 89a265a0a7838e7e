use std::path::Path;

use anyhow::{anyhow, Context};
use image::{ImageFormat, RgbImage};

/// Decodes an image file into an RGB buffer
pub fn load_maze<P: AsRef<Path>>(path: P) -> Result<RgbImage, anyhow::Error> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(anyhow!("input file {} does not exist", path.display()));
    }

    let img = image::open(path).with_context(|| format!("could not decode {}", path.display()))?;
    Ok(img.to_rgb8())
}

/// The encoder to use for an output path, by file extension
pub fn output_format<P: AsRef<Path>>(path: P) -> Result<ImageFormat, anyhow::Error> {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("bmp") => Ok(ImageFormat::Bmp),
        Some("png") => Ok(ImageFormat::Png),
        Some("jpg") | Some("jpeg") => Ok(ImageFormat::Jpeg),
        Some(other) => Err(anyhow!("unsupported output format: {}", other)),
        None => Err(anyhow!(
            "output file {} has no extension",
            path.as_ref().display()
        )),
    }
}

pub fn save_maze<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<(), anyhow::Error> {
    let path = path.as_ref();
    let format = output_format(path)?;
    image
        .save_with_format(path, format)
        .with_context(|| format!("could not write {}", path.display()))
}
