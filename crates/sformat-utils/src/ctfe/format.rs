use std::str;

use crate::{
    arg::Arg,
    bounded::BoundedString,
    numeric::{convert_float, convert_integer, convert_unsigned},
    template::{Placeholder, find_placeholder},
};

/// A `const` writer into a fixed buffer. A write that does not fit is dropped
/// whole and latches the overflow flag; nothing is written after that.
pub struct CtfeFormatter<const CAP: usize> {
    output: BoundedString<CAP>,
    overflowed: bool,
}

impl<const CAP: usize> CtfeFormatter<CAP> {
    #[expect(clippy::new_without_default)]
    pub const fn new() -> Self {
        Self {
            output: BoundedString::new(),
            overflowed: false,
        }
    }

    pub const fn write_str(&mut self, str: &str) {
        if self.overflowed {
            return;
        }

        if self.output.try_push_str(str).is_err() {
            self.overflowed = true;
        }
    }

    pub const fn write_char(&mut self, ch: char) {
        let mut dst = [0u8; 4];
        self.write_str(ch.encode_utf8(&mut dst));
    }

    pub const fn write_arg(&mut self, arg: &Arg<'_>) {
        match *arg {
            Arg::Int(n) => self.write_str(convert_integer(n).as_str()),
            Arg::UInt(n) => self.write_str(convert_unsigned(n).as_str()),
            Arg::Float(x) => self.write_str(convert_float(x).as_str()),
            Arg::Text(s) => self.write_str(s),
        }
    }

    pub const fn overflowed(&self) -> bool {
        self.overflowed
    }

    #[must_use]
    pub const fn finish(&self) -> &str {
        self.output.as_str()
    }

    #[must_use]
    pub const fn into_inner(self) -> BoundedString<CAP> {
        self.output
    }
}

/// Lenient `{}` formatting that can run in a `const` item.
///
/// Placeholder and argument mismatches degrade exactly as in
/// [`format`](crate::format::format). Output that does not fit in `CAP` is a
/// panic, which in a `const` item is a compile error.
///
/// ```
/// use sformat_utils::{Arg, BoundedString, ctfe::format::format_const};
///
/// const GREETING: BoundedString<16> = format_const("{}, format!", &[Arg::Text("Hello")]);
/// assert_eq!(GREETING, "Hello, format!");
/// ```
pub const fn format_const<const CAP: usize>(
    template: &str,
    args: &[Arg<'_>],
) -> BoundedString<CAP> {
    let bytes = template.as_bytes();
    let mut f = CtfeFormatter::<CAP>::new();
    let mut cursor = 0;
    let mut i = 0;

    while i < args.len() {
        let (open, close) = match find_placeholder(bytes, cursor) {
            Placeholder::Found { open, close } => (open, close),
            Placeholder::Missing | Placeholder::Unclosed { .. } => break,
        };

        f.write_str(sub_str(template, cursor, open - cursor));
        f.write_arg(&args[i]);

        cursor = close + 1;
        i += 1;
    }

    f.write_str(sub_str(template, cursor, bytes.len() - cursor));

    assert!(!f.overflowed(), "formatted output exceeds the declared capacity");
    f.into_inner()
}

// Callers only split at ASCII brace positions, which are always char
// boundaries.
const fn sub_str(parent: &str, start: usize, len: usize) -> &str {
    unsafe { str::from_utf8_unchecked(sub_slice(parent.as_bytes(), start, len)) }
}

const fn sub_slice<T>(parent: &[T], start: usize, len: usize) -> &[T] {
    assert!(start <= parent.len());
    assert!(len <= parent.len() - start);

    unsafe { std::slice::from_raw_parts(parent.as_ptr().add(start), len) }
}
