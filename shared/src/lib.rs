pub mod battle;
pub mod error;
pub mod format;
pub mod ranking;
pub mod schedule;
pub mod search;
pub mod store;

pub use battle::*;
pub use error::FetchError;
pub use ranking::BattleMvps;
pub use search::{FetchRequest, FetchTrigger, PAGE_SIZE, SearchFilters, SearchState};
pub use store::{BattleState, BattleStore, FetchTicket};
