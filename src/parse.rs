//! The free-form input parser. One entry point, [`parse_input_string`], takes whatever string
//! a user throws at it -- `RRGGBB`, `#RRGGBB`, a three-digit short hex, `rgb(r, g, b)` with an
//! optional ignored alpha, or `hsv(h, s, v)`, whitespace anywhere -- and resolves it to a
//! [`ColorInput`] that the [`Color`](::color::Color) constructor dispatches on with a plain
//! `match`. The parser checks shape, not ranges: `rgb(999, 0, 0)` parses fine here and is
//! rejected by the entity's validation instead.

use regex::Regex;

use color::{ColorError, Hsv, Rgb};

lazy_static! {
    // whitespace is stripped before matching, so the patterns themselves stay compact
    static ref HEX_SHORT: Regex = Regex::new(r"^#?([0-9a-fA-F]{3})$").unwrap();
    static ref HEX_LONG: Regex = Regex::new(r"^#?([0-9a-fA-F]{6})$").unwrap();
    static ref RGB_FUNC: Regex =
        Regex::new(r"^rgba?\(([0-9]{1,3}),([0-9]{1,3}),([0-9]{1,3})(,[0-9]\.?[0-9]*)?\)$")
            .unwrap();
    static ref HSV_FUNC: Regex =
        Regex::new(r"^hsv\(([0-9]{1,3}),([0-9]{1,3}),([0-9]{1,3})\)$").unwrap();
}

/// A parsed color input, ready for construction: hex text or one of the two structured
/// triples. This is the boundary between "any string" and the typed world, and it's a plain
/// enum so that constructing from the wrong kind of value is impossible rather than a runtime
/// error.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// Six hex digits with any `#` prefix already stripped and any short form already
    /// expanded. Case is preserved here; decoding is case-insensitive.
    HexText(String),
    /// An explicit RGB triple, ranges not yet checked.
    Rgb(Rgb),
    /// An explicit HSV triple, ranges not yet checked.
    Hsv(Hsv),
}

impl From<Rgb> for ColorInput {
    fn from(rgb: Rgb) -> ColorInput {
        ColorInput::Rgb(rgb)
    }
}

impl From<Hsv> for ColorInput {
    fn from(hsv: Hsv) -> ColorInput {
        ColorInput::Hsv(hsv)
    }
}

/// Parses a regex-prechecked decimal integer. Panics on anything the color patterns wouldn't
/// have matched.
fn prechecked(num: &str) -> f64 {
    num.parse().unwrap()
}

/// Strips all whitespace from the input, then tries the recognized formats in order --
/// three-digit hex, six-digit hex (each with an optional `#`), `rgb()`/`rgba()`, `hsv()` --
/// returning the first match. A string matching none of them is an
/// [`ColorError::UnrecognizedFormat`] error, never a silently garbage value.
///
/// # Example
/// ```
/// # use tangerine::prelude::*;
/// assert_eq!(
///     parse_input_string("#f8c").unwrap(),
///     ColorInput::HexText("ff88cc".to_string())
/// );
/// assert_eq!(
///     parse_input_string("rgb (255, 128, 0)").unwrap(),
///     ColorInput::Rgb(Rgb { r: 255., g: 128., b: 0. })
/// );
/// assert!(parse_input_string("forty-two").is_err());
/// ```
pub fn parse_input_string(input: &str) -> Result<ColorInput, ColorError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if let Some(caps) = HEX_SHORT.captures(&compact) {
        // "f8c" doubles every digit into "ff88cc"
        let mut hex = String::with_capacity(6);
        for c in caps[1].chars() {
            hex.push(c);
            hex.push(c);
        }
        return Ok(ColorInput::HexText(hex));
    }
    if let Some(caps) = HEX_LONG.captures(&compact) {
        return Ok(ColorInput::HexText(caps[1].to_string()));
    }
    if let Some(caps) = RGB_FUNC.captures(&compact) {
        // the fourth capture is an alpha component, matched only so that rgba() input is
        // accepted: the color model stores no alpha
        return Ok(ColorInput::Rgb(Rgb {
            r: prechecked(&caps[1]),
            g: prechecked(&caps[2]),
            b: prechecked(&caps[3]),
        }));
    }
    if let Some(caps) = HSV_FUNC.captures(&compact) {
        return Ok(ColorInput::Hsv(Hsv {
            h: prechecked(&caps[1]),
            s: prechecked(&caps[2]),
            v: prechecked(&caps[3]),
        }));
    }
    Err(ColorError::UnrecognizedFormat(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(
            parse_input_string("ff80cc").unwrap(),
            ColorInput::HexText("ff80cc".to_string())
        );
        assert_eq!(
            parse_input_string("  ff 80 cc ").unwrap(),
            ColorInput::HexText("ff80cc".to_string())
        );
        assert_eq!(
            parse_input_string("#ff80cc").unwrap(),
            ColorInput::HexText("ff80cc".to_string())
        );
        // case survives parsing; decoding downstream is case-insensitive
        assert_eq!(
            parse_input_string("FF80CC").unwrap(),
            ColorInput::HexText("FF80CC".to_string())
        );
        // each short-form digit doubles
        assert_eq!(
            parse_input_string("f8c").unwrap(),
            ColorInput::HexText("ff88cc".to_string())
        );
        assert_eq!(
            parse_input_string("#f8c").unwrap(),
            ColorInput::HexText("ff88cc".to_string())
        );
    }

    #[test]
    fn test_rgb_function_forms() {
        let orange = ColorInput::Rgb(Rgb { r: 255., g: 128., b: 0. });
        assert_eq!(parse_input_string("rgb(255,128,0)").unwrap(), orange);
        assert_eq!(parse_input_string("rgb (255, 128, 0)").unwrap(), orange);
        // alpha in any of its accepted shapes is matched, then discarded
        assert_eq!(parse_input_string("rgba(255,128,0,0.5)").unwrap(), orange);
        assert_eq!(parse_input_string("rgb(255,128,0,1.0)").unwrap(), orange);
        assert_eq!(parse_input_string("rgb(255,128,0,0)").unwrap(), orange);
        assert_eq!(
            parse_input_string("rgb(255,128,0,0.221576454)").unwrap(),
            orange
        );
        // out-of-range components parse fine; range checks belong to the entity
        assert_eq!(
            parse_input_string("rgb(999,0,0)").unwrap(),
            ColorInput::Rgb(Rgb { r: 999., g: 0., b: 0. })
        );
    }

    #[test]
    fn test_hsv_function_form() {
        assert_eq!(
            parse_input_string("hsv(0,50,100)").unwrap(),
            ColorInput::Hsv(Hsv { h: 0., s: 50., v: 100. })
        );
        assert_eq!(
            parse_input_string("hsv (300, 2, 9)").unwrap(),
            ColorInput::Hsv(Hsv { h: 300., s: 2., v: 9. })
        );
    }

    #[test]
    fn test_unrecognized_formats() {
        let bad_inputs = [
            "",
            "42",
            "ff80c",
            "ff80ccdd",
            "rgb(1,2)",
            "rgb(1,2,3",
            "hsl(1,2,3)",
            "hsv(1,2,3,4)",
            "forty-two",
        ];
        for bad in bad_inputs.iter() {
            assert_eq!(
                parse_input_string(bad).unwrap_err(),
                ColorError::UnrecognizedFormat(bad.to_string())
            );
        }
    }
}
