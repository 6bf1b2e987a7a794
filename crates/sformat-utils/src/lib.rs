//! Positional `{}` formatting into fixed-capacity strings.
//!
//! - [`bounded`]: [`BoundedString`], an inline UTF-8 buffer with a logical length.
//! - [`numeric`]: allocation-free decimal conversion of integers and floats.
//! - [`format`]: the run-time engine, with lenient and strict [`Policy`]s.
//! - [`ctfe`]: the same lenient algorithm as a `const fn`.

pub mod arg;
pub mod bounded;
pub mod ctfe;
pub mod format;
pub mod numeric;
pub mod template;

pub use arg::Arg;
pub use bounded::{BoundedString, CapacityError};
pub use format::{
    FormatError, FormattedString, MAX_LEN, Policy, format, format_bounded, format_with,
};
