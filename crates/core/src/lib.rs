//! Trivia domain logic.
//!
//! Holds the question/category records, fixed-size pagination, the quiz
//! selection rules and the store interfaces. Has no knowledge of HTTP or of
//! any particular database, so the API crate and the tests can both drive it.

pub mod error;
pub mod memory;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod service;
pub mod store;
pub mod types;
