//! Allocation-free decimal conversion of numbers into [`BoundedString`]s.
//!
//! Integers are rendered exactly. Floats follow a deliberately limited policy:
//! the integer part is truncated toward zero and rendered exactly, then at most
//! [`FLOAT_MAX_FRAC_DIGITS`] fractional digits are produced by repeated
//! multiplication, stopping early once the remainder drops below
//! [`FLOAT_EPSILON`]. Digits are truncated, not rounded.

use crate::bounded::BoundedString;

/// Remainders below this are treated as zero by [`convert_float`].
pub const FLOAT_EPSILON: f64 = 1e-6;

/// Maximum number of digits [`convert_float`] emits after the `.`.
pub const FLOAT_MAX_FRAC_DIGITS: usize = 6;

/// `i64::MIN` needs 19 digits plus its sign.
pub const INT_TEXT_CAP: usize = 20;

pub const UINT_TEXT_CAP: usize = 20;

pub const FLOAT_TEXT_CAP: usize = INT_TEXT_CAP + 1 + FLOAT_MAX_FRAC_DIGITS;

// 2^63, the first magnitude `as i64` saturates at.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

// === Integers === //

macro_rules! impl_signed_converters {
    ($($name:ident($ty:ty) -> $cap:expr),* $(,)?) => {$(
        #[doc = concat!("Renders an `", stringify!($ty), "` in base 10.")]
        pub const fn $name(n: $ty) -> BoundedString<{ $cap }> {
            let mut out = BoundedString::<{ $cap }>::new();
            let buffer = out.buffer_mut();
            let mut pos = 0;
            let mut rest = n;

            // Digits come out least-significant first. Taking the absolute
            // value of each remainder keeps `MIN` from overflowing.
            loop {
                buffer[pos] = b'0' + (rest % 10).unsigned_abs() as u8;
                pos += 1;
                rest /= 10;

                if rest == 0 {
                    break;
                }
            }

            if n < 0 {
                buffer[pos] = b'-';
                pos += 1;
            }

            reverse_prefix(buffer, pos);
            out.set_size(pos);
            out
        }
    )*};
}

macro_rules! impl_unsigned_converters {
    ($($name:ident($ty:ty) -> $cap:expr),* $(,)?) => {$(
        #[doc = concat!("Renders a `", stringify!($ty), "` in base 10.")]
        pub const fn $name(n: $ty) -> BoundedString<{ $cap }> {
            let mut out = BoundedString::<{ $cap }>::new();
            let buffer = out.buffer_mut();
            let mut pos = 0;
            let mut rest = n;

            loop {
                buffer[pos] = b'0' + (rest % 10) as u8;
                pos += 1;
                rest /= 10;

                if rest == 0 {
                    break;
                }
            }

            reverse_prefix(buffer, pos);
            out.set_size(pos);
            out
        }
    )*};
}

impl_signed_converters! {
    convert_i8(i8) -> 4,
    convert_i16(i16) -> 6,
    convert_i32(i32) -> 11,
    convert_i64(i64) -> INT_TEXT_CAP,
    convert_i128(i128) -> 40,
}

impl_unsigned_converters! {
    convert_u8(u8) -> 3,
    convert_u16(u16) -> 5,
    convert_u32(u32) -> 10,
    convert_u64(u64) -> UINT_TEXT_CAP,
    convert_u128(u128) -> 39,
}

pub const fn convert_integer(n: i64) -> BoundedString<INT_TEXT_CAP> {
    convert_i64(n)
}

pub const fn convert_unsigned(n: u64) -> BoundedString<UINT_TEXT_CAP> {
    convert_u64(n)
}

const fn reverse_prefix(buffer: &mut [u8], len: usize) {
    let mut lo = 0;
    let mut hi = len;

    while lo + 1 < hi {
        hi -= 1;

        let tmp = buffer[lo];
        buffer[lo] = buffer[hi];
        buffer[hi] = tmp;

        lo += 1;
    }
}

// === Floats === //

/// Renders `x` as `<integer>[.<fraction>]`.
///
/// `NaN` and the infinities render as `NaN`, `inf` and `-inf`. Magnitudes of
/// 2^63 and beyond saturate the integer part and carry no fraction.
pub const fn convert_float(x: f64) -> BoundedString<FLOAT_TEXT_CAP> {
    let mut out = BoundedString::new();

    if x.is_nan() {
        out.push_fitting("NaN");
        return out;
    }

    if x.is_infinite() {
        out.push_fitting(if x < 0.0 { "-inf" } else { "inf" });
        return out;
    }

    let negative = x < 0.0;
    let magnitude = if negative { -x } else { x };
    let int_part = x as i64;

    let mut frac = if magnitude >= I64_LIMIT {
        0.0
    } else {
        magnitude - int_part.unsigned_abs() as f64
    };

    // `-0.5` truncates to `0`, which has no sign of its own.
    if negative && int_part == 0 && frac >= FLOAT_EPSILON {
        out.push_byte(b'-');
    }

    out.push_fitting(convert_integer(int_part).as_str());

    if frac < FLOAT_EPSILON {
        return out;
    }

    out.push_byte(b'.');

    let mut written = 0;

    while written < FLOAT_MAX_FRAC_DIGITS {
        frac *= 10.0;

        let mut digit = frac as u8;
        if digit > 9 {
            digit = 9;
        }

        out.push_byte(b'0' + digit);
        frac -= digit as f64;
        written += 1;

        if frac < FLOAT_EPSILON {
            break;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_signed() {
        fn check_num(v: i64) {
            assert_eq!(convert_integer(v), v.to_string().as_str());
        }

        check_num(0);
        check_num(1);
        check_num(-1);
        check_num(7);
        check_num(10);
        check_num(-42);
        check_num(10003);
        check_num(-10003);
        check_num(i64::MAX);
        check_num(i64::MIN);
        check_num(i64::MIN + 1);
    }

    #[test]
    fn write_unsigned() {
        fn check_num(v: u64) {
            assert_eq!(convert_unsigned(v), v.to_string().as_str());
        }

        check_num(0);
        check_num(9);
        check_num(100);
        check_num(u64::MAX);
        check_num(u64::MAX - 1);
    }

    #[test]
    fn every_width_fits_its_extremes() {
        assert_eq!(convert_i8(i8::MIN), "-128");
        assert_eq!(convert_i8(i8::MAX), "127");
        assert_eq!(convert_i16(i16::MIN), i16::MIN.to_string().as_str());
        assert_eq!(convert_i32(i32::MIN), i32::MIN.to_string().as_str());
        assert_eq!(convert_i128(i128::MIN), i128::MIN.to_string().as_str());
        assert_eq!(convert_i128(i128::MAX), i128::MAX.to_string().as_str());
        assert_eq!(convert_u8(u8::MAX), "255");
        assert_eq!(convert_u16(u16::MAX), "65535");
        assert_eq!(convert_u32(u32::MAX), u32::MAX.to_string().as_str());
        assert_eq!(convert_u128(u128::MAX), u128::MAX.to_string().as_str());
    }

    #[test]
    fn sweep_matches_std() {
        let mut n = -100_000i64;
        while n <= 100_000 {
            assert_eq!(convert_integer(n), n.to_string().as_str());
            n += 37;
        }
    }

    #[test]
    fn whole_floats_have_no_point() {
        assert_eq!(convert_float(3.0), "3");
        assert_eq!(convert_float(0.0), "0");
        assert_eq!(convert_float(-0.0), "0");
        assert_eq!(convert_float(-12.0), "-12");
        assert_eq!(convert_float(3.000_000_1), "3");
    }

    #[test]
    fn short_fractions() {
        assert_eq!(convert_float(3.14), "3.14");
        assert_eq!(convert_float(161.75), "161.75");
        assert_eq!(convert_float(0.5), "0.5");
        assert_eq!(convert_float(1.05), "1.05");
        assert_eq!(convert_float(-2.25), "-2.25");
    }

    #[test]
    fn negative_below_one_keeps_sign() {
        assert_eq!(convert_float(-0.5), "-0.5");
        assert_eq!(convert_float(-0.000_000_1), "0");
    }

    #[test]
    fn fraction_is_truncated_to_six_digits() {
        assert_eq!(convert_float(1.0 / 3.0), "0.333333");
        assert_eq!(convert_float(2.0 / 3.0), "0.666666");

        for x in [0.1, 176.1, 1e-3, 123.456_789_1, -98.765_432_1] {
            let text = convert_float(x);
            let (_, frac) = text.split_once('.').unwrap();
            assert!(frac.len() <= FLOAT_MAX_FRAC_DIGITS, "{x} -> {text}");
        }
    }

    #[test]
    fn non_finite_and_huge() {
        assert_eq!(convert_float(f64::NAN), "NaN");
        assert_eq!(convert_float(f64::INFINITY), "inf");
        assert_eq!(convert_float(f64::NEG_INFINITY), "-inf");
        assert_eq!(convert_float(1e300), i64::MAX.to_string().as_str());
        assert_eq!(convert_float(-1e300), i64::MIN.to_string().as_str());
    }

    #[test]
    fn usable_in_const() {
        const TEXT: BoundedString<FLOAT_TEXT_CAP> = convert_float(161.75);
        const INT: BoundedString<INT_TEXT_CAP> = convert_integer(-42);

        assert_eq!(TEXT, "161.75");
        assert_eq!(INT, "-42");
    }
}
