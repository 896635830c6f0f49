//! Recommendation engine and its output

mod engine;
mod recommendation;
pub mod guidance;
pub mod summary;

pub use engine::{Evaluation, RecommendationEngine};
pub use guidance::{Advice, Hint};
pub use recommendation::{Plan, Recommendation};
