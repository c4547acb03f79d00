use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stored form of the "nothing painted here" sentinel.
pub const TRANSPARENT: &str = "transparent";

/// The value held by a single grid cell.
///
/// Concrete colors are always opaque; transparency only exists as the
/// sentinel. Persisted as a CSS-style string so stored artworks stay
/// readable and compatible with hand-edited data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Pixel {
    #[default]
    Transparent,
    Color(Color32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color value: {0:?}")]
pub struct ColorParseError(pub String);

impl Pixel {
    pub fn is_transparent(&self) -> bool {
        matches!(self, Self::Transparent)
    }

    /// RGBA bytes (straight alpha) for export.
    pub fn to_rgba(self) -> [u8; 4] {
        match self {
            Self::Transparent => [0, 0, 0, 0],
            Self::Color(c) => [c.r(), c.g(), c.b(), 255],
        }
    }
}

impl From<Color32> for Pixel {
    fn from(color: Color32) -> Self {
        Self::Color(opaque(color))
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transparent => f.write_str(TRANSPARENT),
            Self::Color(c) => f.write_str(&to_hex(*c)),
        }
    }
}

impl FromStr for Pixel {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(TRANSPARENT) {
            return Ok(Self::Transparent);
        }
        match parse_rgba(trimmed) {
            Some([_, _, _, 0]) => Ok(Self::Transparent),
            Some([r, g, b, _]) => Ok(Self::Color(Color32::from_rgb(r, g, b))),
            None => Err(ColorParseError(s.to_owned())),
        }
    }
}

impl TryFrom<String> for Pixel {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Pixel> for String {
    fn from(pixel: Pixel) -> Self {
        pixel.to_string()
    }
}

/// Drops any alpha; painted cells are always fully opaque.
pub fn opaque(color: Color32) -> Color32 {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    Color32::from_rgb(r, g, b)
}

/// Lowercase `#rrggbb`.
pub fn to_hex(color: Color32) -> String {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Parses a hex color (3, 4, 6 or 8 digits) or one of a handful of CSS
/// color names. Any alpha is ignored.
pub fn parse_color(s: &str) -> Option<Color32> {
    parse_rgba(s).map(|[r, g, b, _]| Color32::from_rgb(r, g, b))
}

/// Straight RGBA from `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` or a color name.
fn parse_rgba(s: &str) -> Option<[u8; 4]> {
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let [r, g, b] = match s.to_ascii_lowercase().as_str() {
        "black" => [0, 0, 0],
        "white" => [255, 255, 255],
        "red" => [255, 0, 0],
        "green" => [0, 128, 0],
        "blue" => [0, 0, 255],
        "yellow" => [255, 255, 0],
        "cyan" | "aqua" => [0, 255, 255],
        "magenta" | "fuchsia" => [255, 0, 255],
        "orange" => [255, 165, 0],
        "gray" | "grey" => [128, 128, 128],
        "purple" => [128, 0, 128],
        _ => return None,
    };
    Some([r, g, b, 255])
}

fn parse_hex(hex: &str) -> Option<[u8; 4]> {
    let digits = hex
        .bytes()
        .map(hex_val)
        .collect::<Option<Vec<u8>>>()?;

    match *digits.as_slice() {
        [r, g, b] => Some([r << 4 | r, g << 4 | g, b << 4 | b, 255]),
        [r, g, b, a] => Some([r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a]),
        [r1, r2, g1, g2, b1, b2] => Some([r1 << 4 | r2, g1 << 4 | g2, b1 << 4 | b2, 255]),
        [r1, r2, g1, g2, b1, b2, a1, a2] => {
            Some([r1 << 4 | r2, g1 << 4 | g2, b1 << 4 | b2, a1 << 4 | a2])
        }
        _ => None,
    }
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// `#[serde(with = "crate::color::hex")]` for plain `Color32` fields.
pub mod hex {
    use egui::Color32;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S: Serializer>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color32, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_color(s.trim()).ok_or_else(|| D::Error::custom(format!("invalid color {s:?}")))
    }
}
