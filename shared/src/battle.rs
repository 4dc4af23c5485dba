use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate stats for one alliance that took part in a battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllianceStats {
    pub name: String,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default, alias = "killFame")]
    pub fame: u64,
    #[serde(default)]
    pub players: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildStats {
    pub name: String,
    #[serde(default)]
    pub alliance: String,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default, alias = "killFame")]
    pub fame: u64,
    #[serde(default)]
    pub players: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub name: String,
    #[serde(default)]
    pub guild_name: String,
    #[serde(default)]
    pub alliance_name: String,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default, alias = "killFame")]
    pub fame: u64,
}

/// Alliance section of a battle: display names in API order plus per-alliance stats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllianceRoster {
    #[serde(default)]
    pub list: Vec<String>,
    #[serde(default)]
    pub alliances: Vec<AllianceStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildRoster {
    #[serde(default)]
    pub guilds: Vec<GuildStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRoster {
    #[serde(default)]
    pub players: Vec<PlayerStats>,
}

/// Full battle report as served by the detail endpoint.
/// Replaced wholesale on every fetch; never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    pub id: u64,
    pub start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_kills: u32,
    #[serde(default)]
    pub total_fame: u64,
    #[serde(default)]
    pub alliances: AllianceRoster,
    #[serde(default)]
    pub guilds: GuildRoster,
    #[serde(default)]
    pub players: PlayerRoster,
}

impl Battle {
    pub fn alliance_names(&self) -> &[String] {
        &self.alliances.list
    }

    pub fn player_count(&self) -> usize {
        self.players.players.len()
    }

    /// Seconds between start and end; zero when the end is unknown or precedes the start.
    pub fn duration_secs(&self) -> i64 {
        self.end_time
            .map(|end| (end - self.start_time).num_seconds().max(0))
            .unwrap_or(0)
    }
}

/// Lightweight list projection returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleSummary {
    pub id: u64,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub alliances: Vec<String>,
    #[serde(default)]
    pub total_players: u32,
    #[serde(default)]
    pub total_kills: u32,
    #[serde(default)]
    pub total_fame: u64,
}

#[cfg(test)]
mod tests {
    use super::{Battle, BattleSummary};
    use serde_json::json;

    fn sample_battle() -> serde_json::Value {
        json!({
            "id": 118_345_221u64,
            "startTime": "2024-03-02T18:04:11Z",
            "endTime": "2024-03-02T18:31:40Z",
            "totalKills": 42,
            "totalFame": 8_400_000u64,
            "alliances": {
                "list": ["ARCH", "OWL"],
                "alliances": [
                    { "name": "ARCH", "kills": 30, "deaths": 12, "killFame": 6_000_000u64 },
                    { "name": "OWL", "kills": 12, "deaths": 30, "fame": 2_400_000u64, "players": 19 }
                ]
            },
            "guilds": {
                "guilds": [
                    { "name": "Tuga Army", "alliance": "ARCH", "kills": 30, "deaths": 12, "killFame": 6_000_000u64 }
                ]
            },
            "players": {
                "players": [
                    { "name": "Kazz", "guildName": "Tuga Army", "allianceName": "ARCH", "kills": 9, "deaths": 0, "killFame": 1_100_000u64 },
                    { "name": "Mirrow", "kills": 0, "deaths": 3 }
                ]
            }
        })
    }

    #[test]
    fn battle_deserializes_nested_rosters() {
        let battle: Battle = serde_json::from_value(sample_battle()).expect("battle json");

        assert_eq!(battle.id, 118_345_221);
        assert_eq!(battle.alliance_names(), ["ARCH".to_string(), "OWL".to_string()]);
        assert_eq!(battle.alliances.alliances[0].fame, 6_000_000);
        assert_eq!(battle.alliances.alliances[1].players, 19);
        assert_eq!(battle.guilds.guilds[0].alliance, "ARCH");
        assert_eq!(battle.player_count(), 2);
        assert_eq!(battle.players.players[1].guild_name, "");
        assert_eq!(battle.players.players[1].fame, 0);
    }

    #[test]
    fn duration_uses_end_time_when_present() {
        let battle: Battle = serde_json::from_value(sample_battle()).expect("battle json");
        assert_eq!(battle.duration_secs(), 27 * 60 + 29);
    }

    #[test]
    fn duration_is_zero_without_end_time() {
        let mut value = sample_battle();
        value.as_object_mut().expect("object").remove("endTime");
        let battle: Battle = serde_json::from_value(value).expect("battle json");
        assert_eq!(battle.duration_secs(), 0);
    }

    #[test]
    fn battle_with_missing_sections_defaults_to_empty() {
        let battle: Battle = serde_json::from_value(json!({
            "id": 7,
            "startTime": "2024-03-02T18:04:11Z"
        }))
        .expect("battle json");

        assert!(battle.alliance_names().is_empty());
        assert!(battle.guilds.guilds.is_empty());
        assert_eq!(battle.player_count(), 0);
    }

    #[test]
    fn summary_list_deserializes() {
        let rows: Vec<BattleSummary> = serde_json::from_value(json!([
            {
                "id": 1,
                "startTime": "2024-03-02T18:04:11Z",
                "alliances": ["ARCH"],
                "totalPlayers": 61,
                "totalKills": 42,
                "totalFame": 8_400_000u64
            },
            { "id": 2, "startTime": "2024-03-02T19:00:00Z" }
        ]))
        .expect("summary json");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].total_players, 61);
        assert!(rows[1].alliances.is_empty());
    }
}
