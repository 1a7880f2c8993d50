//! Crypto Brief - a keyword-filtered news digest
//!
//! Fetches a single RSS feed, keeps the items that mention any configured
//! keyword, and writes them as a dated Markdown brief for an Obsidian vault.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod filter;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod writer;

pub use error::{BriefError, Result};
