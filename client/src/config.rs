/// API root, overridable at build time with `BATTLELOG_API_ROOT`.
pub const API_ROOT: &str = match option_env!("BATTLELOG_API_ROOT") {
    Some(root) => root,
    None => "/api",
};

/// Document title of the battle index.
pub const SEARCH_PAGE_TITLE: &str = "Albion Battle Reports";

/// localStorage key for the "exclude small battles" toggle.
pub const LARGE_ONLY_KEY: &str = "largeOnly";

/// Quiet period before typed search text is committed.
pub const SEARCH_QUIET_MS: u32 = 100;

/// Refresh interval of the battle list.
pub const POLL_INTERVAL_MS: u32 = 60_000;

pub fn battles_url() -> String {
    format!("{}/battles", API_ROOT.trim_end_matches('/'))
}

pub fn battle_url(id: &str) -> String {
    format!("{}/battles/{}", API_ROOT.trim_end_matches('/'), id)
}
