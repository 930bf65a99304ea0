//! Minimum-raggedness word wrapping for fixed-width text.
//!
//! Rather than greedily filling each line, the whole paragraph is considered at once and
//! line breaks are chosen to minimize the sum of the squared gaps left at the end of every
//! line but the last. Widths are measured in display cells, so wide glyphs count double,
//! and Han ideographs are wrapped as standalone words that need no spaces around them.
//!
//! ```
//! use rag_wrap::wrap_text;
//!
//! let wrapped = wrap_text("aaa bb cc ddddd", 6);
//! assert_eq!(wrapped.lines, vec!["aaa ", "bb cc ", "ddddd "]);
//! assert_eq!(wrapped.limit, 6);
//! ```
//!
//! Every call is a pure function of its inputs: there is no shared state, so wrapping
//! may freely happen on many threads at once.

mod error;
pub use error::*;

/// The individual stages of the wrapping pipeline
pub mod layout;

mod measure;
pub use measure::*;

mod script;
pub use script::*;

mod units;
pub use units::*;

mod wrap;
pub use wrap::*;
