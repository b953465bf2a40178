//! CSS `transition` parsing for the segue engine.
//!
//! This crate converts the raw text of a `transition` shorthand, or of the
//! four `transition-*` longhand properties, into normalized
//! [`TransitionDeclaration`] values the runtime can drive. Parsing never
//! fails: malformed input degrades to defaults or an empty list.

pub mod longhand;
pub mod shorthand;
pub mod types;

pub use longhand::{
    parse_delay_list, parse_duration_list, parse_property_list, parse_timing_function_list,
};
pub use shorthand::{parse_duration, parse_shorthand, parse_timing_function};
pub use types::{TimingCurve, TransitionDeclaration};
