//! Algorithms operating on household data

pub mod classify;

pub use classify::{Classification, classify};
