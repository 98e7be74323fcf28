pub mod calc;
pub mod coherence;
pub mod contribution;
pub mod portfolio;
pub mod ranking;
pub mod rebalance;
pub mod scoring;
pub mod utils;
pub mod validation;

pub use portfolio::Portfolio;
