use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

fn default_one() -> f32 {
    1.0
}

fn is_one(num: &f32) -> bool {
    *num == 1.0
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(skip_serializing_if = "is_one", default = "default_one")]
    pub a: f32,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.hash(state);
        self.g.hash(state);
        self.b.hash(state);
        self.a.to_bits().hash(state);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0, g: 0, b: 0, a: 1.0 }
    }
}

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse a hex color string in `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` form.
    pub fn from_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Color must start with #, got: {}", s))?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex digits in color: {}", s));
        }

        // Short forms repeat each digit: "f" -> "ff".
        let channel = |digits: &str, name: &str| -> Result<u8, String> {
            let expanded = if digits.len() == 1 { digits.repeat(2) } else { digits.to_string() };
            u8::from_str_radix(&expanded, 16).map_err(|e| format!("Invalid {} component: {}", name, e))
        };

        let width = match hex.len() {
            3 | 4 => 1,
            6 | 8 => 2,
            len => {
                return Err(format!(
                    "Invalid hex color length: expected 3, 4, 6 or 8, got {}",
                    len
                ));
            }
        };

        let r = channel(&hex[0..width], "red")?;
        let g = channel(&hex[width..2 * width], "green")?;
        let b = channel(&hex[2 * width..3 * width], "blue")?;
        let a = if hex.len() == 4 * width {
            channel(&hex[3 * width..4 * width], "alpha")? as f32 / 255.0
        } else {
            1.0
        };
        Ok(Color { r, g, b, a })
    }

    /// The alpha channel as a byte, as written in `#RRGGBBAA`.
    pub fn alpha_byte(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Formats as lowercase CSS hex, dropping the alpha pair when fully opaque.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        let alpha = self.alpha_byte();
        if alpha != 255 {
            write!(f, "{:02x}", alpha)?;
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8, #[serde(default = "default_one")] a: f32 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => {
                Self::from_hex(&s).map_err(de::Error::custom)
            }
            ColorDef::Map { r, g, b, a } => Ok(Color { r, g, b, a }),
        }
    }
}
