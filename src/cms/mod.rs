//! Content service client and wire types

pub mod client;
pub mod document;

pub use client::{Client, CmsError};
pub use document::{Document, SearchResponse};
