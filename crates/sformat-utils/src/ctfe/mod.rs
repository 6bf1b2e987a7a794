//! Formatting that runs in `const` contexts.

pub mod format;
