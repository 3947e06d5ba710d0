use crate::foundation::error::{BitrifillError, BitrifillResult};

pub use kurbo::{Affine, BezPath, Line, Point, Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> BitrifillResult<Self> {
        if width == 0 || height == 0 {
            return Err(BitrifillError::render("canvas dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    pub fn min_side(self) -> f64 {
        f64::from(self.width.min(self.height))
    }
}

/// Straight (non-premultiplied) RGBA8.
///
/// Serialized as `#RRGGBB` or `#AARRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn parse_hex(s: &str) -> BitrifillResult<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| BitrifillError::config(format!("color '{s}' must start with '#'")))?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(BitrifillError::config(format!("color '{s}' is not valid hex")));
        }
        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| BitrifillError::config(format!("color '{s}' is not valid hex")))?;
        let [b3, b2, b1, b0] = value.to_be_bytes();
        match hex.len() {
            6 => Ok(Self::opaque(b2, b1, b0)),
            8 => Ok(Self {
                a: b3,
                r: b2,
                g: b1,
                b: b0,
            }),
            _ => Err(BitrifillError::config(format!(
                "color '{s}' must be #RRGGBB or #AARRGGBB"
            ))),
        }
    }

    /// Premultiplied bytes, as stored in raster frames.
    pub fn premultiplied(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = BitrifillError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(c: Rgba8) -> Self {
        if c.a == 255 {
            format!("#{:02X}{:02X}{:02X}", c.r, c.g, c.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", c.a, c.r, c.g, c.b)
        }
    }
}

/// Chain-wide traversal direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
