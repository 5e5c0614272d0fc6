//! Content module - view models and the transformations that build them

pub mod model;
pub mod reading_time;
pub mod rich_text;

pub use model::{Banner, PostDetail, PostSummary, Section};
pub use reading_time::estimate_minutes;
