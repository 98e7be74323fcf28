pub mod dto;
pub mod snapshot;
pub mod utils;

pub use snapshot::{load_quotes, load_ranked_instruments, load_rule_table};
