use pocketgate_tools::convert::encode_png;
use std::path::{Path, PathBuf};

/// Writes a `width x height` PNG where every pixel is `rgba`.
pub fn write_solid_png(dir: &Path, name: &str, width: u32, height: u32, rgba: [u8; 4]) -> PathBuf {
    let data = rgba.repeat((width * height) as usize);
    let png = encode_png(width, height, png::ColorType::Rgba, &data).expect("encodes");
    let path = dir.join(name);
    std::fs::write(&path, png).expect("writes png");

    path
}
