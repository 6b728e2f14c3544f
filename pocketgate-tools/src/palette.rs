use anyhow::anyhow;
use maplit::hashmap;
use once_cell::sync::Lazy;
use pocketgate_core::{Result, Rgb565};
use std::collections::HashMap;

pub static NAMED_COLORS: Lazy<HashMap<&'static str, Rgb565>> = Lazy::new(|| {
    hashmap! {
        "red" => Rgb565::RED,
        "green" => Rgb565::GREEN,
        "blue" => Rgb565::BLUE,
        "white" => Rgb565::WHITE,
        "black" => Rgb565::BLACK,
        "gray" => Rgb565::GRAY,
        "yellow" => Rgb565::YELLOW,
        "cyan" => Rgb565::CYAN,
        "magenta" => Rgb565::MAGENTA,
    }
});

/// Accepts a palette name or a `0x`-prefixed packed value.
pub fn parse_color(value: &str) -> Result<Rgb565> {
    let value = value.trim().to_ascii_lowercase();

    if let Some(hex) = value.strip_prefix("0x") {
        return u16::from_str_radix(hex, 16)
            .map(Rgb565)
            .map_err(|err| anyhow!("Invalid packed color {value:?}: {err}"));
    }

    NAMED_COLORS
        .get(value.as_str())
        .copied()
        .ok_or_else(|| anyhow!("Unknown color {value:?}"))
}
