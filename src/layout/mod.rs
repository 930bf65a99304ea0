//! The stages of the wrapping pipeline, exposed for callers that need finer control.
//!
//! Wrapping happens in three steps:
//!
//! - [`tokenize`](crate::layout::tokenize()) - splits text into measured [`Word`](crate::layout::Word)s,
//!   giving every Han ideograph a word of its own
//! - [`break_lines`](crate::layout::break_lines) - chooses where lines end, minimizing the sum of
//!   squared slack across all but the last line
//! - [`render_line`](crate::layout::render_line) - turns each group of words back into text
//!
//! Most callers want [`wrap_text`](crate::wrap_text) or [`WrapOptions`](crate::WrapOptions)
//! instead, which run all three.
//!
//! # Example
//!
//! ```
//! use rag_wrap::{is_han, UnicodeWidth, Width, DEFAULT_PENALTY};
//! use rag_wrap::layout::{break_lines, effective_limit, render_line, tokenize};
//!
//! let words = tokenize("a bb ccc dddd", is_han, &UnicodeWidth);
//! let limit = effective_limit(&words, 6);
//! let widths: Vec<Width> = words.iter().map(|word| word.width).collect();
//! let breaks = break_lines(&widths, Width(1), limit, DEFAULT_PENALTY);
//!
//! let lines: Vec<String> = breaks
//!     .lines
//!     .into_iter()
//!     .map(|range| render_line(&words[range], is_han))
//!     .collect();
//! assert_eq!(lines, vec!["a bb ", "ccc ", "dddd "]);
//! ```

mod assemble;
mod linebreak;
mod words;

pub use assemble::*;
pub use linebreak::*;
pub use words::*;
