//! Tangerine is a small library for a ubiquitous chore: holding a single color that people edit
//! by hand. It models the two coordinate systems such colors actually arrive in -- RGB, with
//! each channel between 0 and 255, and HSV, with a hue on the 0-360 wheel and saturation and
//! value as percentages -- along with the six-digit hex text form, and it keeps the two views
//! consistent while the color is edited one component at a time. Change just the hue and the
//! red, green, and blue channels follow; change one RGB channel and the whole HSV view is
//! rederived. Out-of-range writes are rejected before anything is stored, never silently
//! clamped.
//!
//! # Example
//! ```
//! use tangerine::prelude::*;
//!
//! let mut color: Color = "#ff8080".parse().unwrap();
//! assert_eq!(color.hsv(), Hsv { h: 0., s: 50., v: 100. });
//! color.set_h(120.).unwrap();
//! assert_eq!(color.hex_string(), "80ff80");
//! // a rejected write leaves the color exactly as it was
//! assert!(color.set_s(250.).is_err());
//! assert_eq!(color.hex_string(), "80ff80");
//! ```

#![doc(html_root_url = "https://docs.rs/tangerine/1.0.0")]
#![deny(missing_docs)]

extern crate regex;
#[macro_use]
extern crate lazy_static;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg(test)]
#[macro_use]
extern crate float_cmp;

pub mod color;
pub mod convert;
pub mod parse;
pub mod prelude;
