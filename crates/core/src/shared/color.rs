use std::fmt;

use super::pixel_error::PixelError;

/// An immutable 8-bit RGB color.
///
/// Channel values are always within `0..=255`; fallible construction from
/// wider integers goes through [`Color::new`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Builds a color from integer channels, rejecting anything outside `0..=255`.
    pub fn new(r: i64, g: i64, b: i64) -> Result<Self, PixelError> {
        Ok(Self {
            r: channel("red", r)?,
            g: channel("green", g)?,
            b: channel("blue", b)?,
        })
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    /// Per-channel arithmetic mean of `colors`, rounded half up.
    ///
    /// Uses integer arithmetic: `(sum + n / 2) / n`. The mean of `[1, 2]`
    /// is therefore `2`, and the mean of `[0, 255]` is `128`.
    pub fn average(colors: &[Color]) -> Result<Color, PixelError> {
        if colors.is_empty() {
            return Err(PixelError::EmptyInput);
        }
        let n = colors.len() as u64;
        let (r, g, b) = colors.iter().fold((0u64, 0u64, 0u64), |(r, g, b), c| {
            (r + c.r as u64, g + c.g as u64, b + c.b as u64)
        });
        let mean = |sum: u64| ((sum + n / 2) / n) as u8;
        Ok(Color::from_rgb(mean(r), mean(g), mean(b)))
    }
}

fn channel(name: &'static str, value: i64) -> Result<u8, PixelError> {
    u8::try_from(value).map_err(|_| PixelError::InvalidChannelValue {
        channel: name,
        value,
    })
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::from_rgb(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}
