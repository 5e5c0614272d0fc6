//! Helper functions for rendering

mod date;
mod url;

pub use date::*;
pub use url::*;
