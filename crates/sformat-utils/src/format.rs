//! The run-time `{}` formatter.
//!
//! Arguments are substituted left to right into bare `{}` placeholders. Text is
//! accumulated in a growable buffer and only bounded when the call finishes.
//!
//! Under [`Policy::Lenient`] nothing ever fails: arguments without a
//! placeholder are dropped, surplus placeholders stay in the output literally
//! and overlong output is cut at the bound. [`Policy::Strict`] runs the same
//! scan but reports each of those cases as a [`FormatError`].

use thiserror::Error;

use crate::{
    arg::Arg,
    bounded::BoundedString,
    template::{Placeholder, count_placeholders, find_byte, find_placeholder},
};

/// Default bound on formatted output, in bytes.
pub const MAX_LEN: usize = 1000;

pub type FormattedString = BoundedString<MAX_LEN>;

#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub enum Policy {
    #[default]
    Lenient,
    Strict,
}

#[derive(Debug, Clone, Hash, Eq, PartialEq, Error)]
pub enum FormatError {
    #[error("`{{` at byte {offset} is never closed")]
    UnclosedPlaceholder { offset: usize },

    #[error("`}}` at byte {offset} has no matching `{{`")]
    UnopenedPlaceholder { offset: usize },

    #[error("unsupported format specification `{spec}` at byte {offset}")]
    UnsupportedSpec { offset: usize, spec: String },

    #[error("template has {placeholders} placeholder(s) but {args} argument(s) were supplied")]
    ArgumentCountMismatch { placeholders: usize, args: usize },

    #[error("formatted output is {len} byte(s) long but the capacity is {capacity}")]
    CapacityExceeded { len: usize, capacity: usize },
}

/// Formats with [`Policy::Lenient`] into [`MAX_LEN`] bytes.
pub fn format(template: &str, args: &[Arg<'_>]) -> FormattedString {
    let mut engine = Engine::new(Policy::Lenient, template);

    // Lenient runs never produce an error.
    let _ = engine.run(args);
    engine.into_bounded_lossy()
}

pub fn format_with(
    policy: Policy,
    template: &str,
    args: &[Arg<'_>],
) -> Result<FormattedString, FormatError> {
    format_bounded(policy, template, args)
}

pub fn format_bounded<const N: usize>(
    policy: Policy,
    template: &str,
    args: &[Arg<'_>],
) -> Result<BoundedString<N>, FormatError> {
    let mut engine = Engine::new(policy, template);
    engine.run(args)?;

    match policy {
        Policy::Lenient => Ok(engine.into_bounded_lossy()),
        Policy::Strict => engine.into_bounded_exact(),
    }
}

/// Formats a template with any mix of integers, floats and strings.
///
/// ```
/// let text = sformat_utils::sformat!("Student #{} : {}, height = {}cm", 1, "Alice", 161.75);
/// assert_eq!(text, "Student #1 : Alice, height = 161.75cm");
/// ```
#[macro_export]
macro_rules! sformat {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format::format($template, &[$($crate::arg::Arg::from($arg)),*])
    };
}

// === Engine === //

#[derive(Debug)]
struct Engine<'t> {
    policy: Policy,
    template: &'t str,
    accum: String,
    cursor: usize,
}

impl<'t> Engine<'t> {
    fn new(policy: Policy, template: &'t str) -> Self {
        Self {
            policy,
            template,
            accum: String::with_capacity(template.len()),
            cursor: 0,
        }
    }

    fn is_strict(&self) -> bool {
        self.policy == Policy::Strict
    }

    fn run(&mut self, args: &[Arg<'_>]) -> Result<(), FormatError> {
        let template = self.template;
        let bytes = template.as_bytes();

        for (index, arg) in args.iter().enumerate() {
            let (open, close) = match find_placeholder(bytes, self.cursor) {
                Placeholder::Found { open, close } => (open, close),
                Placeholder::Missing => {
                    if self.is_strict() {
                        return Err(FormatError::ArgumentCountMismatch {
                            placeholders: count_placeholders(self.template),
                            args: args.len(),
                        });
                    }

                    log::warn!(
                        "Dropping {} argument(s): the template has no placeholder left.",
                        args.len() - index,
                    );
                    break;
                }
                Placeholder::Unclosed { open } => {
                    if self.is_strict() {
                        return Err(FormatError::UnclosedPlaceholder { offset: open });
                    }

                    log::warn!(
                        "Dropping {} argument(s): `{{` at byte {open} is never closed.",
                        args.len() - index,
                    );
                    break;
                }
            };

            self.push_literal(open)?;
            self.check_spec(open, close)?;

            log::trace!("Substituting argument {index} at byte {open}.");
            arg.with_text(|text| self.accum.push_str(text));
            self.cursor = close + 1;
        }

        self.push_tail(args.len())
    }

    /// Appends the template text from the cursor up to `end`.
    fn push_literal(&mut self, end: usize) -> Result<(), FormatError> {
        if self.is_strict() {
            if let Some(offset) = find_byte(self.template.as_bytes(), self.cursor, b'}') {
                if offset < end {
                    return Err(FormatError::UnopenedPlaceholder { offset });
                }
            }
        }

        self.accum.push_str(&self.template[self.cursor..end]);
        Ok(())
    }

    fn check_spec(&self, open: usize, close: usize) -> Result<(), FormatError> {
        if self.is_strict() && close != open + 1 {
            return Err(FormatError::UnsupportedSpec {
                offset: open,
                spec: self.template[open..=close].to_string(),
            });
        }

        Ok(())
    }

    fn push_tail(&mut self, args: usize) -> Result<(), FormatError> {
        match find_placeholder(self.template.as_bytes(), self.cursor) {
            Placeholder::Missing => {}
            Placeholder::Found { .. } => {
                if self.is_strict() {
                    return Err(FormatError::ArgumentCountMismatch {
                        placeholders: count_placeholders(self.template),
                        args,
                    });
                }

                log::debug!("Passing surplus placeholder(s) through literally.");
            }
            Placeholder::Unclosed { open } => {
                if self.is_strict() {
                    return Err(FormatError::UnclosedPlaceholder { offset: open });
                }
            }
        }

        self.push_literal(self.template.len())
    }

    fn into_bounded_lossy<const N: usize>(self) -> BoundedString<N> {
        if self.accum.len() > N {
            log::warn!(
                "Truncating formatted output of {} byte(s) to a capacity of {N}.",
                self.accum.len(),
            );
        }

        BoundedString::truncated(&self.accum)
    }

    fn into_bounded_exact<const N: usize>(self) -> Result<BoundedString<N>, FormatError> {
        BoundedString::try_from(self.accum.as_str()).map_err(|_| FormatError::CapacityExceeded {
            len: self.accum.len(),
            capacity: N,
        })
    }
}
