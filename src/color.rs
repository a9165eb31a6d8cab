//! This module defines the two value types a color can be expressed in -- an [`Rgb`] triple of
//! 0-255 channels and an [`Hsv`] triple of a hue on the 0-360 wheel with percentage saturation
//! and value -- along with the validation that guards their ranges, the crate-wide
//! [`ColorError`] type, and the mutable [`Color`] entity that holds both views of one color and
//! keeps them synchronized through every edit. The entity never clamps: a write that would
//! leave a channel out of range is rejected whole, before either representation is touched.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use convert::{hex_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsv};
use parse::{parse_input_string, ColorInput};

/// One named component of a color, used in errors to say exactly which channel was out of
/// range. The first three belong to the RGB view, the last three to the HSV view.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Channel {
    /// The red channel of the RGB view, valid on `[0, 255]`.
    Red,
    /// The green channel of the RGB view, valid on `[0, 255]`.
    Green,
    /// The blue channel of the RGB view, valid on `[0, 255]`.
    Blue,
    /// The hue of the HSV view, valid on `[0, 360)`: the upper bound is exclusive because 360
    /// degrees is the same point on the wheel as 0.
    Hue,
    /// The saturation percentage of the HSV view, valid on `[0, 100]`.
    Saturation,
    /// The value (brightness) percentage of the HSV view, valid on `[0, 100]`.
    Value,
}

impl Channel {
    /// The channel's upper bound, inclusive for everything but hue.
    fn max(&self) -> f64 {
        match *self {
            Channel::Red | Channel::Green | Channel::Blue => 255.,
            Channel::Hue => 360.,
            Channel::Saturation | Channel::Value => 100.,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Value => "value",
        };
        write!(f, "{}", name)
    }
}

/// An error raised while constructing or mutating a color. Range violations carry the offending
/// [`Channel`] and the direction of the violation in the variant itself, so callers can match
/// on them; the `Display` impl carries the human-readable text.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    /// A channel was assigned a value above its maximum. For hue the bound is exclusive, so
    /// 360 itself lands here.
    AboveMax(Channel),
    /// A channel was assigned a value below zero. A non-finite value also lands here: NaN
    /// fails the lower-bound check rather than slipping past both comparisons.
    BelowMin(Channel),
    /// A hue outside `[0, 360)` reached the HSV-to-RGB conversion itself. Entity-level
    /// validation makes this unreachable through [`Color`]; it exists so the pure conversion
    /// function is safe to call directly with arbitrary input.
    HueOutOfDomain(f64),
    /// A hex string was not exactly six hexadecimal digits.
    MalformedHex(String),
    /// An input string matched none of the recognized color formats.
    UnrecognizedFormat(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorError::AboveMax(Channel::Hue) => write!(f, "hue is greater than or equal to 360"),
            ColorError::AboveMax(ch) => write!(f, "{} is greater than {}", ch, ch.max()),
            ColorError::BelowMin(ch) => write!(f, "{} is less than 0", ch),
            ColorError::HueOutOfDomain(h) => {
                write!(f, "hue {} is outside the conversion domain [0, 360)", h)
            }
            ColorError::MalformedHex(ref s) => {
                write!(f, "\"{}\" is not six hexadecimal digits", s)
            }
            ColorError::UnrecognizedFormat(ref s) => {
                write!(f, "\"{}\" matches no recognized color format", s)
            }
        }
    }
}

impl Error for ColorError {
    fn description(&self) -> &str {
        match *self {
            ColorError::AboveMax(_) => "channel above its maximum",
            ColorError::BelowMin(_) => "channel below its minimum",
            ColorError::HueOutOfDomain(_) => "hue outside [0, 360)",
            ColorError::MalformedHex(_) => "malformed hex color",
            ColorError::UnrecognizedFormat(_) => "unrecognized color format",
        }
    }
}

/// Checks one channel value against `[0, max]`. Written so that NaN fails the lower-bound
/// check instead of passing both.
fn check(channel: Channel, value: f64, exclusive_max: bool) -> Result<(), ColorError> {
    if !(value >= 0.) {
        Err(ColorError::BelowMin(channel))
    } else if value > channel.max() || (exclusive_max && value == channel.max()) {
        Err(ColorError::AboveMax(channel))
    } else {
        Ok(())
    }
}

/// An RGB triple: red, green, and blue channels, each valid on `[0, 255]`. Channels are `f64`
/// rather than `u8` so that fractional values assigned through the [`Color`] setters survive
/// until they are quantized at hex-encoding time.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    /// The red channel, 0 to 255.
    pub r: f64,
    /// The green channel, 0 to 255.
    pub g: f64,
    /// The blue channel, 0 to 255.
    pub b: f64,
}

impl Rgb {
    /// Checks every channel against `[0, 255]`, reporting the first violation with its channel
    /// and direction. Never clamps.
    pub fn validate(&self) -> Result<(), ColorError> {
        check(Channel::Red, self.r, false)?;
        check(Channel::Green, self.g, false)?;
        check(Channel::Blue, self.b, false)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from(tuple: (u8, u8, u8)) -> Rgb {
        Rgb {
            r: f64::from(tuple.0),
            g: f64::from(tuple.1),
            b: f64::from(tuple.2),
        }
    }
}

/// An HSV triple: a hue in degrees on `[0, 360)` and saturation and value percentages on
/// `[0, 100]`. As with [`Rgb`], components are `f64` and may sit between integers.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    /// The hue in degrees, 0 inclusive to 360 exclusive.
    pub h: f64,
    /// The saturation percentage, 0 to 100.
    pub s: f64,
    /// The value (brightness) percentage, 0 to 100.
    pub v: f64,
}

impl Hsv {
    /// Checks the hue against `[0, 360)` and saturation and value against `[0, 100]`,
    /// reporting the first violation with its channel and direction. Never clamps.
    pub fn validate(&self) -> Result<(), ColorError> {
        check(Channel::Hue, self.h, true)?;
        check(Channel::Saturation, self.s, false)?;
        check(Channel::Value, self.v, false)
    }
}

/// A single color held simultaneously in RGB and HSV form, always describing the same visual
/// color within rounding tolerance. Whole-representation setters replace both views together;
/// single-component setters change one field of the view it belongs to and rederive the other
/// view completely. The derived view is always stored rounded to integers, while the view that
/// was assigned directly keeps whatever precision it was given. Every setter validates before
/// committing anything, so a failed write is a no-op.
///
/// # Example
/// ```
/// # use tangerine::prelude::*;
/// let mut color = Color::from_rgb(Rgb { r: 255., g: 128., b: 0. }).unwrap();
/// assert_eq!(color.hex_string(), "ff8000");
/// // editing the hue leaves saturation and value alone and rederives RGB
/// color.set_h(39.).unwrap();
/// assert_eq!(color.hsv(), Hsv { h: 39., s: 100., v: 100. });
/// ```
#[derive(Debug)]
pub struct Color {
    rgb: Rgb,
    hsv: Hsv,
}

impl Color {
    /// Builds a color from an already-parsed [`ColorInput`], dispatching on its variant. Use
    /// the [`FromStr`] impl to go straight from text.
    pub fn new(input: ColorInput) -> Result<Color, ColorError> {
        match input {
            ColorInput::HexText(hex) => Color::from_hex(&hex),
            ColorInput::Rgb(rgb) => Color::from_rgb(rgb),
            ColorInput::Hsv(hsv) => Color::from_hsv(hsv),
        }
    }

    /// Builds a color from six hex digits (case-insensitive, no `#` prefix at this layer --
    /// prefixed and short forms go through the parser instead).
    pub fn from_hex(hex: &str) -> Result<Color, ColorError> {
        Color::from_rgb(hex_to_rgb(hex)?)
    }

    /// Builds a color from an RGB triple, deriving the HSV view. Errors if any channel is out
    /// of range.
    pub fn from_rgb(rgb: Rgb) -> Result<Color, ColorError> {
        rgb.validate()?;
        Ok(Color {
            rgb,
            hsv: rgb_to_hsv(&rgb, true),
        })
    }

    /// Builds a color from an HSV triple, deriving the RGB view. Errors if any component is
    /// out of range.
    pub fn from_hsv(hsv: Hsv) -> Result<Color, ColorError> {
        hsv.validate()?;
        Ok(Color {
            rgb: hsv_to_rgb(&hsv, true)?,
            hsv,
        })
    }

    /// The current RGB view.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// The current HSV view.
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// The six-digit lowercase hex form of the RGB view, no `#` prefix. Channels are rounded
    /// here, at read time: nothing pre-rounded is stored.
    pub fn hex_string(&self) -> String {
        rgb_to_hex(&self.rgb)
    }

    /// The red channel.
    pub fn r(&self) -> f64 {
        self.rgb.r
    }

    /// The green channel.
    pub fn g(&self) -> f64 {
        self.rgb.g
    }

    /// The blue channel.
    pub fn b(&self) -> f64 {
        self.rgb.b
    }

    /// The hue in degrees.
    pub fn h(&self) -> f64 {
        self.hsv.h
    }

    /// The saturation percentage.
    pub fn s(&self) -> f64 {
        self.hsv.s
    }

    /// The value percentage.
    pub fn v(&self) -> f64 {
        self.hsv.v
    }

    /// Replaces the RGB view, rederiving HSV. Validation runs first: on error neither view
    /// changes.
    pub fn set_rgb(&mut self, rgb: Rgb) -> Result<(), ColorError> {
        rgb.validate()?;
        self.hsv = rgb_to_hsv(&rgb, true);
        self.rgb = rgb;
        Ok(())
    }

    /// Replaces the HSV view, rederiving RGB. Validation runs first: on error neither view
    /// changes.
    pub fn set_hsv(&mut self, hsv: Hsv) -> Result<(), ColorError> {
        hsv.validate()?;
        self.rgb = hsv_to_rgb(&hsv, true)?;
        self.hsv = hsv;
        Ok(())
    }

    /// Replaces both views from six hex digits, the same path as [`Color::set_rgb`].
    pub fn set_hex_string(&mut self, hex: &str) -> Result<(), ColorError> {
        self.set_rgb(hex_to_rgb(hex)?)
    }

    /// Sets the red channel alone, rederiving the whole HSV view.
    pub fn set_r(&mut self, r: f64) -> Result<(), ColorError> {
        self.set_rgb(Rgb { r, ..self.rgb })
    }

    /// Sets the green channel alone, rederiving the whole HSV view.
    pub fn set_g(&mut self, g: f64) -> Result<(), ColorError> {
        self.set_rgb(Rgb { g, ..self.rgb })
    }

    /// Sets the blue channel alone, rederiving the whole HSV view.
    pub fn set_b(&mut self, b: f64) -> Result<(), ColorError> {
        self.set_rgb(Rgb { b, ..self.rgb })
    }

    /// Sets the hue alone, rederiving the whole RGB view. Any finite hue is first brought onto
    /// the wheel with a Euclidean remainder, so -40 means 320 and 480 means 120.
    ///
    /// # Example
    /// ```
    /// # use tangerine::prelude::*;
    /// let mut color: Color = "hsv(10, 80, 90)".parse().unwrap();
    /// color.set_h(-40.).unwrap();
    /// assert_eq!(color.h(), 320.);
    /// ```
    pub fn set_h(&mut self, h: f64) -> Result<(), ColorError> {
        self.set_hsv(Hsv {
            h: h.rem_euclid(360.),
            ..self.hsv
        })
    }

    /// Sets the saturation alone, rederiving the whole RGB view.
    pub fn set_s(&mut self, s: f64) -> Result<(), ColorError> {
        self.set_hsv(Hsv { s, ..self.hsv })
    }

    /// Sets the value alone, rederiving the whole RGB view.
    pub fn set_v(&mut self, v: f64) -> Result<(), ColorError> {
        self.set_hsv(Hsv { v, ..self.hsv })
    }
}

/// Cloning round-trips through the hex form: channels are quantized to their rounded integers
/// and the HSV view is rederived from them. Fractional precision accumulated through chained
/// component writes is deliberately lost, and the two copies are fully independent afterwards.
impl Clone for Color {
    fn clone(&self) -> Color {
        let rgb = Rgb {
            r: self.rgb.r.round(),
            g: self.rgb.g.round(),
            b: self.rgb.b.round(),
        };
        Color {
            rgb,
            hsv: rgb_to_hsv(&rgb, true),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Accepts any of the five textual formats the parser recognizes: `RRGGBB`, `#RRGGBB`,
    /// three-digit short hex, `rgb(r, g, b)` with an optional ignored alpha, and
    /// `hsv(h, s, v)`.
    fn from_str(s: &str) -> Result<Color, ColorError> {
        Color::new(parse_input_string(s)?)
    }
}

impl fmt::Display for Color {
    /// Renders the six-digit lowercase hex form, no `#` prefix.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_formats() {
        let cases = [
            ("ff80cc", "ff80cc"),
            ("     ff80cc", "ff80cc"),
            ("f8c", "ff88cc"),
            ("FF80CC", "ff80cc"),
            ("#ff80cc", "ff80cc"),
            ("rgb(255,128,0)", "ff8000"),
            ("rgb(255,128,0,1.0)", "ff8000"),
            ("rgb(255,128,0,0)", "ff8000"),
            ("rgb(255,128,0,0.221576454)", "ff8000"),
            ("rgb (255, 128, 0)", "ff8000"),
            ("hsv(0,50,100)", "ff8080"),
        ];
        for &(input, hex) in cases.iter() {
            let color: Color = input.parse().unwrap();
            assert_eq!(color.hex_string(), hex);
        }
    }

    #[test]
    fn test_hex_to_hsv_components() {
        let data = [
            ("ff0000", 0., 100., 100.),
            ("800000", 0., 100., 50.),
            ("ff8080", 0., 50., 100.),
        ];
        for &(hex, h, s, v) in data.iter() {
            let color: Color = hex.parse().unwrap();
            assert_eq!(color.h(), h);
            assert_eq!(color.s(), s);
            assert_eq!(color.v(), v);
        }
        // and the same triples in the other direction
        for &(hex, h, s, v) in data.iter() {
            let color = Color::from_hsv(Hsv { h, s, v }).unwrap();
            assert_eq!(color.hex_string(), hex);
        }
    }

    #[test]
    fn test_sequenced_mutation() {
        let mut color: Color = "ff8080".parse().unwrap();
        color.set_h(120.).unwrap();
        assert_eq!(color.hex_string(), "80ff80");
        color.set_s(100.).unwrap();
        assert_eq!(color.hex_string(), "00ff00");
        color.set_v(50.).unwrap();
        assert_eq!(color.hex_string(), "008000");
        color.set_h(150.).unwrap();
        assert_eq!(color.hex_string(), "008040");
        color.set_v(100.).unwrap();
        assert_eq!(color.hex_string(), "00ff80");
    }

    #[test]
    fn test_clone_independence() {
        let color: Color = "ff8080".parse().unwrap();
        let mut clone_h = color.clone();
        let mut clone_hex = color.clone();
        clone_h.set_h(120.).unwrap();
        clone_hex.set_hex_string("8080ff").unwrap();
        assert_eq!(color.hex_string(), "ff8080");
        assert_eq!(clone_h.hex_string(), "80ff80");
        assert_eq!(clone_hex.hex_string(), "8080ff");
    }

    #[test]
    fn test_clone_quantizes_to_hex() {
        let mut color: Color = "ff8080".parse().unwrap();
        color.set_r(200.5).unwrap();
        assert_eq!(color.r(), 200.5);
        let clone = color.clone();
        // the clone went through hex, so the fractional red is gone
        assert_eq!(clone.r(), 201.);
        assert_eq!(clone.hex_string(), color.hex_string());
    }

    #[test]
    fn test_component_isolation() {
        let mut color: Color = "ff80cc".parse().unwrap();
        let before = (
            color.r(),
            color.g(),
            color.b(),
            color.h(),
            color.s(),
            color.v(),
        );
        color.set_h(200.).unwrap();
        assert_ne!(color.hex_string(), "ff80cc");
        color.set_hex_string("ff80cc").unwrap();
        let after = (
            color.r(),
            color.g(),
            color.b(),
            color.h(),
            color.s(),
            color.v(),
        );
        assert_eq!(before, after);
        assert_eq!(color.hex_string(), "ff80cc");
    }

    #[test]
    fn test_range_errors() {
        assert_eq!(
            Color::from_hsv(Hsv { h: 400., s: 0., v: 0. }).unwrap_err(),
            ColorError::AboveMax(Channel::Hue)
        );
        // the hue bound is exclusive: 360 itself is already out
        assert_eq!(
            Color::from_hsv(Hsv { h: 360., s: 0., v: 0. }).unwrap_err(),
            ColorError::AboveMax(Channel::Hue)
        );
        assert_eq!(
            Color::from_rgb(Rgb { r: -1., g: 0., b: 0. }).unwrap_err(),
            ColorError::BelowMin(Channel::Red)
        );
        assert_eq!(
            "42".parse::<Color>().unwrap_err(),
            ColorError::UnrecognizedFormat("42".to_string())
        );
        // inclusive edges are fine
        assert!(Color::from_rgb(Rgb { r: 255., g: 0., b: 0. }).is_ok());
        assert!(Color::from_hsv(Hsv { h: 359.9, s: 100., v: 100. }).is_ok());
    }

    #[test]
    fn test_failed_write_leaves_color_untouched() {
        let mut color: Color = "ff8000".parse().unwrap();
        assert!(color.set_g(300.).is_err());
        assert!(color.set_hsv(Hsv { h: 10., s: 101., v: 50. }).is_err());
        assert_eq!(color.hex_string(), "ff8000");
        assert_eq!(color.g(), 128.);
    }

    #[test]
    fn test_hue_normalization() {
        let mut color: Color = "ff0000".parse().unwrap();
        color.set_h(-40.).unwrap();
        assert_eq!(color.h(), 320.);
        color.set_h(-400.).unwrap();
        assert_eq!(color.h(), 320.);
        color.set_h(480.).unwrap();
        assert_eq!(color.h(), 120.);
        color.set_h(360.).unwrap();
        assert_eq!(color.h(), 0.);
    }

    #[test]
    fn test_nan_rejected() {
        let mut color: Color = "ff0000".parse().unwrap();
        assert_eq!(
            color.set_v(std::f64::NAN).unwrap_err(),
            ColorError::BelowMin(Channel::Value)
        );
        assert_eq!(
            color.set_r(std::f64::NAN).unwrap_err(),
            ColorError::BelowMin(Channel::Red)
        );
        assert_eq!(color.hex_string(), "ff0000");
    }

    #[test]
    fn test_display() {
        let color: Color = "rgb(255,128,0)".parse().unwrap();
        assert_eq!(color.to_string(), "ff8000");
        assert_eq!(
            ColorError::AboveMax(Channel::Hue).to_string(),
            "hue is greater than or equal to 360"
        );
        assert_eq!(
            ColorError::AboveMax(Channel::Green).to_string(),
            "green is greater than 255"
        );
        assert_eq!(
            ColorError::BelowMin(Channel::Saturation).to_string(),
            "saturation is less than 0"
        );
    }

    #[test]
    fn test_rgb_from_tuple() {
        let color = Color::from_rgb(Rgb::from((255, 128, 204))).unwrap();
        assert_eq!(color.hex_string(), "ff80cc");
    }
}
