use std::cmp::Reverse;

use crate::battle::{Battle, GuildStats, PlayerStats};

/// Order items by `key`, highest first. The sort is stable, so equal keys keep
/// their input order.
pub fn rank_by<T, K, F>(items: &[T], key: F) -> Vec<&T>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by_key(|item| Reverse(key(*item)));
    ranked
}

/// Highest-ranked item with a non-zero key, first in input order on ties.
fn top_by<T, F>(items: &[T], key: F) -> Option<&T>
where
    F: Fn(&T) -> u64,
{
    rank_by(items, &key)
        .into_iter()
        .next()
        .filter(|item| key(*item) > 0)
}

/// Standout performers of a single battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BattleMvps<'a> {
    pub top_killer: Option<&'a PlayerStats>,
    pub top_fame: Option<&'a PlayerStats>,
    pub top_guild: Option<&'a GuildStats>,
}

impl<'a> BattleMvps<'a> {
    pub fn from_battle(battle: &'a Battle) -> Self {
        let players = &battle.players.players;
        Self {
            top_killer: top_by(players, |p| u64::from(p.kills)),
            top_fame: top_by(players, |p| p.fame),
            top_guild: top_by(&battle.guilds.guilds, |g| g.fame),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top_killer.is_none() && self.top_fame.is_none() && self.top_guild.is_none()
    }
}
