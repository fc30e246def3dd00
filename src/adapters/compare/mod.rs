//! Content comparers
//!
//! Implements `ContentComparer` for the two supported strategies:
//!
//! - [`ExactByteComparer`] - identical bytes and length
//! - [`NormalizedTextComparer`] - carriage returns are transparent
//! - [`ComparisonStrategy`] - configuration-selected choice between the two

mod exact;
mod normalized;
mod strategy;

pub use exact::ExactByteComparer;
pub use normalized::NormalizedTextComparer;
pub use strategy::ComparisonStrategy;
