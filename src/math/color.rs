use serde::{Deserialize, Serialize};

/// Convert HSL (all components in [0, 1]) to linear RGB triple
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = (h.rem_euclid(1.0) * 6.0) % 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

/// RGB color, serialized as a `#rrggbb` string
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Build from a packed `0xRRGGBB` value
    pub fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as f32 / 255.0,
            g: ((packed >> 8) & 0xff) as f32 / 255.0,
            b: (packed & 0xff) as f32 / 255.0,
        }
    }

    /// Parse `#rrggbb` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_u32)
    }

    pub fn to_hex(self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", channel(self.r), channel(self.g), channel(self.b))
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f32; 3]> for Rgb {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("invalid color `{value}`, expected #rrggbb"))
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_to_rgb_red() {
        let rgb = hsl_to_rgb(0.0, 1.0, 0.5);
        assert!((rgb[0] - 1.0).abs() < 0.01);
        assert!(rgb[1].abs() < 0.01);
        assert!(rgb[2].abs() < 0.01);
    }

    #[test]
    fn test_hsl_to_rgb_white_and_black() {
        let white = hsl_to_rgb(0.3, 0.7, 1.0);
        let black = hsl_to_rgb(0.3, 0.7, 0.0);
        for channel in 0..3 {
            assert!((white[channel] - 1.0).abs() < 0.01);
            assert!(black[channel].abs() < 0.01);
        }
    }

    #[test]
    fn test_hsl_field_palette_stays_in_gamut() {
        for i in 0..=20 {
            let rgb = hsl_to_rgb(i as f32 / 20.0, 0.7, 0.5);
            assert!(rgb.iter().all(|c| (0.0..=1.0).contains(c)), "{rgb:?}");
        }
    }

    #[test]
    fn test_hex_parsing() {
        let cyan = Rgb::from_hex("#00ffff").unwrap();
        assert_eq!(cyan, Rgb { r: 0.0, g: 1.0, b: 1.0 });
        assert_eq!(cyan.to_hex(), "#00ffff");
        assert_eq!(Rgb::from_hex("a855f7"), Some(Rgb::from_u32(0xa855f7)));
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("#gggggg"), None);
    }

    #[test]
    fn test_hex_rejects_signs_and_spaces() {
        assert_eq!(Rgb::from_hex("#+0ffff"), None);
        assert_eq!(Rgb::from_hex("-0ffff"), None);
        assert_eq!(Rgb::from_hex("#0ffff "), None);
        assert!(serde_json::from_str::<Rgb>("\"#+0ffff\"").is_err());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Rgb::from_u32(0x06b6d4)).unwrap();
        assert_eq!(json, "\"#06b6d4\"");
        let parsed: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Rgb::from_u32(0x06b6d4));
        assert!(serde_json::from_str::<Rgb>("\"blue\"").is_err());
    }
}
