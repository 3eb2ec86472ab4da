//! RGB channel math: hex formatting, HSL/HSV/HWB conversions and the
//! expression operations that act on them.
//!
//! All channel arithmetic happens in HSL space with `f32` precision and
//! rounds to the nearest 8 bit value on the way out. Percent arguments are
//! percentage points (`lighten 20` adds 0.2 to HSL lightness) and clamp at
//! the channel boundaries rather than wrapping.

/// An RGB triple, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats the triple as a lowercase six-digit hex string.
    ///
    /// ```rust
    /// use tinct::Rgb;
    /// assert_eq!(Rgb::new(255, 191, 0).to_hex(), "ffbf00");
    /// ```
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parses a 3 or 6 digit hex triplet, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |b: u8| -> u8 {
            match b {
                b'0'..=b'9' => b - b'0',
                b'a'..=b'f' => b - b'a' + 10,
                _ => b.to_ascii_lowercase() - b'a' + 10,
            }
        };
        let bytes = hex.as_bytes();
        match bytes.len() {
            3 => Some(Self::new(
                nibble(bytes[0]) * 17,
                nibble(bytes[1]) * 17,
                nibble(bytes[2]) * 17,
            )),
            6 => Some(Self::new(
                nibble(bytes[0]) * 16 + nibble(bytes[1]),
                nibble(bytes[2]) * 16 + nibble(bytes[3]),
                nibble(bytes[4]) * 16 + nibble(bytes[5]),
            )),
            _ => None,
        }
    }

    /// Converts to HSL. Hue is in degrees, saturation and lightness in 0..=1.
    pub fn to_hsl(self) -> (f32, f32, f32) {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let mut h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h /= 6.0;
        (h * 360.0, s, l)
    }

    /// Builds a triple from HSL. Hue is in degrees, saturation and lightness
    /// in 0..=1.
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        if s == 0.0 {
            let gray = (l * 255.0).round() as u8;
            return Self::new(gray, gray, gray);
        }

        let h = h.rem_euclid(360.0) / 360.0;
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let channel = |t: f32| (hue_to_rgb(p, q, t) * 255.0).round() as u8;
        Self::new(
            channel(h + 1.0 / 3.0),
            channel(h),
            channel(h - 1.0 / 3.0),
        )
    }

    /// Builds a triple from HSV (also known as HSB). Hue is in degrees,
    /// saturation and value in 0..=1.
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let c = v * s;
        let hp = h.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - ((hp % 2.0) - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Self::new(
            ((r + m) * 255.0).round() as u8,
            ((g + m) * 255.0).round() as u8,
            ((b + m) * 255.0).round() as u8,
        )
    }

    /// Builds a triple from HWB. Hue is in degrees, whiteness and blackness
    /// in 0..=1; when they sum past 1 the result collapses to the gray they
    /// describe.
    pub fn from_hwb(h: f32, w: f32, bl: f32) -> Self {
        if w + bl >= 1.0 {
            let gray = ((w / (w + bl)) * 255.0).round() as u8;
            return Self::new(gray, gray, gray);
        }
        let v = 1.0 - bl;
        let s = 1.0 - w / v;
        Self::from_hsv(h, s, v)
    }

    /// Raises HSL lightness by `amount` percentage points, clamped.
    pub fn lighten(self, amount: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l + amount / 100.0).clamp(0.0, 1.0))
    }

    /// Lowers HSL lightness by `amount` percentage points, clamped.
    pub fn darken(self, amount: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l - amount / 100.0).clamp(0.0, 1.0))
    }

    /// Raises HSL saturation by `amount` percentage points, clamped.
    pub fn saturate(self, amount: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, (s + amount / 100.0).clamp(0.0, 1.0), l)
    }

    /// Lowers HSL saturation by `amount` percentage points, clamped.
    /// `desaturate 100` is the `mono` operation.
    pub fn desaturate(self, amount: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, (s - amount / 100.0).clamp(0.0, 1.0), l)
    }

    /// Rotates hue counterclockwise by `degrees`: `spin 60` takes red to
    /// magenta, `spin 30` takes green toward chartreuse.
    pub fn spin(self, degrees: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl((h - degrees).rem_euclid(360.0), s, l)
    }

    /// Averages toward `other`, 50% per channel.
    pub fn mix(self, other: Self) -> Self {
        let mid = |a: u8, b: u8| ((a as f32 + b as f32) / 2.0).round() as u8;
        Self::new(
            mid(self.r, other.r),
            mid(self.g, other.g),
            mid(self.b, other.b),
        )
    }
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
