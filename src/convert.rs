//! Pure, stateless conversions between the three forms a color takes: six-digit hex text, an
//! [`Rgb`] triple, and an [`Hsv`] triple. Everything the [`Color`](::color::Color) entity does
//! funnels through these four functions, and each is usable on its own without constructing an
//! entity. The RGB-HSV math is the standard hexagonal-prism derivation: hue walks the six
//! 60-degree sectors of the color hexagon rather than using any trigonometry.

use color::{ColorError, Hsv, Rgb};

/// Decodes exactly six hex digits (case-insensitive, no `#` prefix) into an RGB triple by
/// reading them as a 24-bit integer: red is bits 16-23, green bits 8-15, blue bits 0-7.
/// Anything that is not six ASCII hex digits is rejected with [`ColorError::MalformedHex`]
/// rather than being left to degrade into garbage channels downstream.
///
/// # Example
/// ```
/// # use tangerine::prelude::*;
/// assert_eq!(hex_to_rgb("ff80cc").unwrap(), Rgb { r: 255., g: 128., b: 204. });
/// assert!(hex_to_rgb("ff80c").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::MalformedHex(hex.to_string()));
    }
    // the charset check above makes this parse infallible
    let bits = u32::from_str_radix(hex, 16).unwrap();
    Ok(Rgb {
        r: f64::from((bits & 0xff0000) >> 16),
        g: f64::from((bits & 0x00ff00) >> 8),
        b: f64::from(bits & 0x0000ff),
    })
}

/// Encodes an RGB triple as six lowercase hex digits, two zero-padded digits per channel, no
/// `#` prefix. Channels are rounded to the nearest integer at encoding time. This function does
/// no range checking of its own: validation lives in the entity, and the float-to-byte cast
/// saturates on anything that slips past it.
pub fn rgb_to_hex(rgb: &Rgb) -> String {
    format!(
        "{:02x}{:02x}{:02x}",
        rgb.r.round() as u8,
        rgb.g.round() as u8,
        rgb.b.round() as u8
    )
}

/// Converts an RGB triple to HSV. With `round` the components are rounded to the nearest
/// integer, which is the form the [`Color`](::color::Color) entity stores; pass `false` to keep
/// full precision, as the round-trip tests do.
///
/// A rounded hue always lands on `[0, 360)`: a true hue like 359.76 rounds to 360, which is the
/// same point on the wheel as 0 and is stored as such, so the result never violates the
/// [`Hsv`] invariant.
pub fn rgb_to_hsv(rgb: &Rgb, round: bool) -> Hsv {
    let r = rgb.r / 255.;
    let g = rgb.g / 255.;
    let b = rgb.b / 255.;
    let c_max = r.max(g).max(b);
    let c_min = r.min(g).min(b);
    let delta = c_max - c_min;

    // hue walks the hexagon: which sixth we're in depends on the largest channel, and the
    // position within it on the other two
    let sector = if delta == 0. {
        // gray: hue is undefined, zero by convention
        0.
    } else if c_max == r {
        ((g - b) / delta) % 6.
    } else if c_max == g {
        (b - r) / delta + 2.
    } else {
        (r - g) / delta + 4.
    };
    let mut h = sector * 60.;
    if h < 0. {
        h += 360.;
    }
    let s = if c_max == 0. {
        // black: saturation is as undefined as hue, and likewise zero
        0.
    } else {
        delta / c_max * 100.
    };
    let v = c_max * 100.;
    if round {
        Hsv {
            h: h.round() % 360.,
            s: s.round(),
            v: v.round(),
        }
    } else {
        Hsv { h, s, v }
    }
}

/// Converts an HSV triple to RGB. The hue selects one of six 60-degree-wide sectors of the
/// color hexagon, each assigning the chroma, an intermediate value, and zero to the three
/// channels in rotating order; saturation and value then scale and offset the result onto
/// 0-255. With `round` each channel is rounded to the nearest integer.
///
/// A hue outside `[0, 360)` -- including NaN -- belongs to no sector and is rejected with
/// [`ColorError::HueOutOfDomain`]. The [`Color`](::color::Color) entity validates before
/// calling this, so through the entity the error is unreachable; it guards direct callers.
pub fn hsv_to_rgb(hsv: &Hsv, round: bool) -> Result<Rgb, ColorError> {
    let s = hsv.s / 100.;
    let v = hsv.v / 100.;
    let c = v * s;
    let x = c * (1. - ((hsv.h / 60.) % 2. - 1.).abs());
    let m = v - c;
    let (r1, g1, b1) = if hsv.h < 0. {
        return Err(ColorError::HueOutOfDomain(hsv.h));
    } else if hsv.h < 60. {
        (c, x, 0.)
    } else if hsv.h < 120. {
        (x, c, 0.)
    } else if hsv.h < 180. {
        (0., c, x)
    } else if hsv.h < 240. {
        (0., x, c)
    } else if hsv.h < 300. {
        (x, 0., c)
    } else if hsv.h < 360. {
        (c, 0., x)
    } else {
        // covers 360 and up, and NaN, which fails every comparison above
        return Err(ColorError::HueOutOfDomain(hsv.h));
    };
    let r = (r1 + m) * 255.;
    let g = (g1 + m) * 255.;
    let b = (b1 + m) * 255.;
    if round {
        Ok(Rgb {
            r: r.round(),
            g: g.round(),
            b: b.round(),
        })
    } else {
        Ok(Rgb { r, g, b })
    }
}
