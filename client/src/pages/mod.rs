mod battle_detail;
mod battle_search;

pub use battle_detail::BattleDetailPage;
pub use battle_search::BattleSearchPage;
