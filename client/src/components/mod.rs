mod battle_list;
mod loader;
mod mvp;
mod stats;
mod tables;

pub use battle_list::{BattleList, BattleListHeader};
pub use loader::{Loader, LoaderPanel};
pub use mvp::BattleMvpPanel;
pub use stats::{OverallStats, TotalFameStats, TotalKillStats, TotalPlayerStats};
pub use tables::{AllianceTable, GuildTable, PlayerTable};
