use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use battlelog_shared::{Battle, BattleSummary, FetchError, SearchFilters};

use crate::config;

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, FetchError> {
    if !resp.ok() {
        return Err(FetchError::from_status(resp.status()));
    }

    resp.json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch one page of the battle list for the given filters.
pub async fn fetch_battles(filters: &SearchFilters) -> Result<Vec<BattleSummary>, FetchError> {
    let resp = Request::get(&config::battles_url())
        .query(filters.query_pairs())
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    read_json(resp).await
}

/// Fetch the full report of a single battle.
pub async fn fetch_battle(id: &str) -> Result<Battle, FetchError> {
    let resp = Request::get(&config::battle_url(id))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    read_json(resp).await
}
