use std::fmt;

use crate::{
    bounded::BoundedString,
    numeric::{convert_float, convert_integer, convert_unsigned},
};

/// One positional argument, tagged with how it is rendered.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Arg<'a> {
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Copied verbatim, without quoting or escaping.
    Text(&'a str),
}

impl Arg<'_> {
    pub const fn is_numeric(&self) -> bool {
        !matches!(self, Arg::Text(_))
    }

    /// Runs `f` with the text this argument renders to.
    pub fn with_text<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        match *self {
            Arg::Int(n) => f(convert_integer(n).as_str()),
            Arg::UInt(n) => f(convert_unsigned(n).as_str()),
            Arg::Float(x) => f(convert_float(x).as_str()),
            Arg::Text(s) => f(s),
        }
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_text(|text| f.write_str(text))
    }
}

macro_rules! impl_from_primitive {
    ($variant:ident as $target:ty: $($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Arg<'_> {
            fn from(value: $ty) -> Self {
                Self::$variant(value as $target)
            }
        }
    )*};
}

impl_from_primitive!(Int as i64: i8, i16, i32, i64, isize);
impl_from_primitive!(UInt as u64: u8, u16, u32, u64, usize);
impl_from_primitive!(Float as f64: f32, f64);

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl<'a, const N: usize> From<&'a BoundedString<N>> for Arg<'a> {
    fn from(value: &'a BoundedString<N>) -> Self {
        Self::Text(value.as_str())
    }
}

impl From<bool> for Arg<'_> {
    fn from(value: bool) -> Self {
        Self::Text(if value { "true" } else { "false" })
    }
}
