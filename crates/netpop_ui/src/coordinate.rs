//! Anchor coordinate coercion.
//!
//! Hosts hand the popup whatever they have at hand: integer node positions,
//! fractional canvas coordinates after a zoom, or numeric strings read back
//! from a style attribute. All of them end up as integer pixels.
//!
//! - integers convert losslessly (or are rejected when out of range)
//! - floats are truncated toward zero
//! - strings use leading-integer semantics: optional whitespace and sign,
//!   then decimal digits (or `0x` hex digits); anything after them is ignored

use std::fmt;

/// The axis a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

/// A value that can be coerced to an integer pixel coordinate.
pub trait Coordinate: fmt::Display {
    /// Returns the integer pixel value, or `None` for non-numeric input.
    fn to_pixel(&self) -> Option<i32>;
}

macro_rules! lossless_coordinate {
    ($($ty:ty),*) => {
        $(
            impl Coordinate for $ty {
                #[inline]
                fn to_pixel(&self) -> Option<i32> {
                    Some(i32::from(*self))
                }
            }
        )*
    };
}

macro_rules! ranged_coordinate {
    ($($ty:ty),*) => {
        $(
            impl Coordinate for $ty {
                #[inline]
                fn to_pixel(&self) -> Option<i32> {
                    i32::try_from(*self).ok()
                }
            }
        )*
    };
}

lossless_coordinate!(i8, u8, i16, u16, i32);
ranged_coordinate!(u32, i64, u64, isize, usize);

impl Coordinate for f64 {
    fn to_pixel(&self) -> Option<i32> {
        truncate(*self)
    }
}

impl Coordinate for f32 {
    fn to_pixel(&self) -> Option<i32> {
        truncate(f64::from(*self))
    }
}

impl Coordinate for str {
    fn to_pixel(&self) -> Option<i32> {
        parse_leading_int(self)
    }
}

impl Coordinate for String {
    fn to_pixel(&self) -> Option<i32> {
        parse_leading_int(self)
    }
}

impl<T: Coordinate + ?Sized> Coordinate for &T {
    #[inline]
    fn to_pixel(&self) -> Option<i32> {
        (**self).to_pixel()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(value: f64) -> Option<i32> {
    let value = value.trunc();
    // out-of-range values saturate in the cast and are discarded
    (value.is_finite() && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX))
        .then_some(value as i32)
}

/// Parses the leading integer of `input`.
///
/// `" 12.7px"` is 12, `"-3e5"` is -3, `"0x1A"` is 26, `"px12"` has no value.
#[must_use]
pub fn parse_leading_int(input: &str) -> Option<i32> {
    let s = input.trim_start();
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        _ => (10, s),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&digits[..end], radix).ok()?;
    i32::try_from(if negative { -magnitude } else { magnitude }).ok()
}
