//! Value types exchanged with callers: actions in, results out.

pub mod action;
pub mod result;

pub use action::*;
pub use result::*;
