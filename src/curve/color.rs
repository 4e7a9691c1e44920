use crate::curve::keyframe::Curve;
use crate::foundation::error::{CurveError, CurveResult};
use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA8 color sampled from an [`AnimatedColor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Color whose channels are curves over `0..=255`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimatedColor {
    /// Red channel curve.
    pub red: Curve,
    /// Green channel curve.
    pub green: Curve,
    /// Blue channel curve.
    pub blue: Curve,
    /// Alpha channel curve.
    pub alpha: Curve,
}

impl AnimatedColor {
    /// Constant color from 8-bit channels.
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            red: Curve::constant(f64::from(r)),
            green: Curve::constant(f64::from(g)),
            blue: Curve::constant(f64::from(b)),
            alpha: Curve::constant(f64::from(a)),
        }
    }

    /// Opaque black.
    pub fn black() -> Self {
        Self::rgba(0, 0, 0, 255)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional, case-insensitive).
    pub fn from_hex(s: &str) -> CurveResult<Self> {
        let [r, g, b, a] = parse_hex(s).map_err(CurveError::validation)?;
        Ok(Self::rgba(r, g, b, a))
    }

    /// Sample every channel at `frame`, clamped and rounded into `0..=255`.
    pub fn sample(&self, frame: f64) -> Rgba8 {
        fn to_u8(v: f64) -> u8 {
            if !v.is_finite() {
                return 0;
            }
            v.round().clamp(0.0, 255.0) as u8
        }

        Rgba8 {
            r: to_u8(self.red.value_at(frame)),
            g: to_u8(self.green.value_at(frame)),
            b: to_u8(self.blue.value_at(frame)),
            a: to_u8(self.alpha.value_at(frame)),
        }
    }

    /// Channel curves with their names.
    pub fn channels(&self) -> [(&'static str, &Curve); 4] {
        [
            ("red", &self.red),
            ("green", &self.green),
            ("blue", &self.blue),
            ("alpha", &self.alpha),
        ]
    }
}

impl Default for AnimatedColor {
    fn default() -> Self {
        Self::black()
    }
}

impl<'de> Deserialize<'de> for AnimatedColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Channels {
                red: Curve,
                green: Curve,
                blue: Curve,
                #[serde(default = "opaque")]
                alpha: Curve,
            },
        }

        fn opaque() -> Curve {
            Curve::constant(255.0)
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::from_hex(&s).map_err(serde::de::Error::custom),
            Repr::Channels {
                red,
                green,
                blue,
                alpha,
            } => Ok(Self {
                red,
                green,
                blue,
                alpha,
            }),
        }
    }
}

fn parse_hex(s: &str) -> Result<[u8; 4], String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }
    match s.len() {
        6 => Ok([
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        ]),
        8 => Ok([
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        ]),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/curve/color.rs"]
mod tests;
