//! Shared test fixtures for OptiQuiz crates.
//!
//! This crate provides fixed boards and distance matrices with known
//! answers, plus seeded random instances for property-style tests.
//!
//! - [`boards`] - boards with hand-checked minimum throw counts
//! - [`matrices`] - distance matrices with hand-checked optimal tours
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! optiquiz-test = { workspace = true }
//! ```

pub mod boards;
pub mod matrices;

pub use boards::{ladder_shortcut, plain_board, snake_detour};
pub use matrices::{asymmetric_four, random_symmetric, ring};
