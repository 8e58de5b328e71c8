//! quizforge-core — Question bank, selection, and assessment assembly.
//!
//! This crate defines the fundamental data model and the selection logic
//! that the entire quizforge system builds on.

pub mod assessment;
pub mod bank;
pub mod duration;
pub mod error;
pub mod model;
pub mod parser;
pub mod select;
