pub mod allocation;
pub mod asset;
pub mod evidence;
pub mod holding;
pub mod instrument;
pub mod position_state;
pub mod quote;
pub mod rebalance;
pub mod rules;
pub mod score;
pub mod suggestion;
pub mod transaction;

pub use allocation::{AllocationTarget, RiskProfile, TARGET_ALLOCATIONS};
pub use asset::AssetClass;
pub use evidence::{EvidenceEntry, EvidenceKind};
pub use holding::Holding;
pub use instrument::{InstrumentIndex, RankedInstrument};
pub use position_state::PositionState;
pub use quote::Quote;
pub use rebalance::RebalanceReport;
pub use rules::{BonusRule, Penalty, RuleTable};
pub use score::ScoreRecord;
pub use suggestion::{AllocationFocus, ContributionPlan, Suggestion, SuggestionReason};
pub use transaction::{Transaction, TransactionType};
