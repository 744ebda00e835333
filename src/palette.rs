#![allow(non_snake_case)]

use serde_derive::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

impl Rgb {
    pub const fn new(r: i64, g: i64, b: i64) -> Self {
        Rgb { r, g, b }
    }
}

/// One entry of the input color list.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ColorRecord {
    pub name: String,
    pub colorId: i64,
    pub rgb: Rgb,
}

impl ColorRecord {
    pub fn new(name: &str, colorId: i64, rgb: Rgb) -> Self {
        ColorRecord {
            name: name.to_owned(),
            colorId,
            rgb,
        }
    }

    pub fn identifier(&self) -> String {
        deriveIdentifier(self)
    }
}

/// Enum entry name for a record: the name without its trailing digits,
/// followed by the color id. Collisions are left to the caller.
pub fn deriveIdentifier(record: &ColorRecord) -> String {
    let stem = record.name.trim_end_matches(|c: char| c.is_ascii_digit());
    format!("{}{}", stem, record.colorId)
}
