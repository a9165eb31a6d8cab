//! This module simply brings the whole public surface under a single namespace, to prevent
//! excessive imports: the [`Color`] entity with its value types and error, the four pure
//! conversion functions, and the input parser. The crate is small enough that nothing is left
//! out.

pub use color::{Channel, Color, ColorError, Hsv, Rgb};
pub use convert::{hex_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsv};
pub use parse::{parse_input_string, ColorInput};
