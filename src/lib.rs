//! cardmeta - Twitter card meta tag generator
//!
//! Generates the extra HTML `<meta>` tags for Twitter/X link previews
//! (card layout, reply/topic/karma annotations, creator handle) from
//! forum page context exports.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::CardmetaError;
