use pocketgate_core::draw::{ALPHA_CUTOFF, CHROMA_KEY};
use pocketgate_core::sprite::{SpriteFormat, SpriteSummary};
use pocketgate_core::{AlphaSprite, ChromaSprite, Result, Rgb565};
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

pub fn inspect_file(path: &Path, samples: usize) -> Result<String> {
    let data = std::fs::read(path)?;
    let mut report = format!("File: {}\n", path.display());
    report.push_str(&inspect(&data, samples)?);

    Ok(report)
}

/// Human readable description of a sprite file, listing up to `samples`
/// transparent and opaque pixels.
pub fn inspect(data: &[u8], samples: usize) -> Result<String> {
    let mut coverage = None;
    let (summary, pixels) = match SpriteFormat::detect(data)? {
        SpriteFormat::Alpha => {
            let sprite = AlphaSprite::parse(data)?;
            let pixels = sprite
                .pixels
                .iter()
                .map(|pixel| (pixel.color, pixel.alpha, pixel.alpha < ALPHA_CUTOFF))
                .collect::<Vec<_>>();
            coverage = Some(coverage_histogram(&sprite));
            (sprite.summary(), pixels)
        }
        SpriteFormat::ChromaKey => {
            let sprite = ChromaSprite::parse(data)?;
            let pixels = sprite
                .pixels
                .iter()
                .map(|&color| (color, u8::MAX, color == CHROMA_KEY))
                .collect::<Vec<_>>();
            (sprite.summary(), pixels)
        }
    };

    let mut report = header(&summary);
    let width = summary.width.max(1) as usize;

    for (title, transparent) in [("transparent", true), ("opaque", false)] {
        writeln!(report, "First {samples} {title} pixels:")?;
        for (index, (color, alpha, _)) in pixels
            .iter()
            .enumerate()
            .filter(|(_, (_, _, is_transparent))| *is_transparent == transparent)
            .take(samples)
        {
            writeln!(
                report,
                "  [{}, {}] {} {}",
                index % width,
                index / width,
                describe(*color),
                alpha
            )?;
        }
    }

    let total = (summary.transparent + summary.opaque).max(1);
    writeln!(
        report,
        "Transparent: {} ({}%)\nOpaque: {} ({}%)",
        summary.transparent,
        summary.transparent * 100 / total,
        summary.opaque,
        summary.opaque * 100 / total
    )?;

    if let Some(histogram) = coverage {
        writeln!(report, "Coverage histogram:")?;
        for (alpha, count) in histogram {
            let kind = if alpha < ALPHA_CUTOFF {
                "transparent"
            } else {
                "opaque"
            };
            writeln!(report, "  alpha {alpha:>3}: {count} pixels ({kind})")?;
        }
    }

    if summary.transparent == 0 {
        report.push_str("Warning: no transparent pixels found\n");
    } else if summary.opaque == 0 {
        report.push_str("Warning: every pixel is transparent\n");
    }

    Ok(report)
}

/// Pixel count per coverage value, in ascending coverage order.
pub fn coverage_histogram(sprite: &AlphaSprite) -> BTreeMap<u8, usize> {
    let mut histogram = BTreeMap::<u8, usize>::new();
    for pixel in &sprite.pixels {
        *histogram.entry(pixel.alpha).or_default() += 1;
    }

    histogram
}

fn header(summary: &SpriteSummary) -> String {
    format!(
        "Format: {:?}\nDimensions: {}x{}\nTotal pixels: {}\n",
        summary.format,
        summary.width,
        summary.height,
        summary.transparent + summary.opaque
    )
}

fn describe(color: Rgb565) -> String {
    let (r, g, b) = color.to_rgb888();
    format!("{color} -> RGB({r},{g},{b})")
}
