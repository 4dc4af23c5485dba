use std::sync::Arc;

use leptos::prelude::*;

use battlelog_shared::Battle;
use battlelog_shared::format::{format_date, format_duration, format_fame};

#[component]
fn StatCard(label: &'static str, value: String, detail: Option<String>) -> impl IntoView {
    view! {
        <div style="background: #0f131a; border: 1px solid #1c2030; border-radius: 6px; padding: 1rem; height: 100%;">
            <div style="font-size: 0.72rem; color: #8a8f9c; letter-spacing: 0.08em; text-transform: uppercase;">{label}</div>
            <div style="font-size: 1.6rem; font-weight: 700; margin-top: 0.35rem;">{value}</div>
            {detail.map(|detail| view! {
                <div style="font-size: 0.78rem; color: #5a5f70; margin-top: 0.25rem;">{detail}</div>
            })}
        </div>
    }
}

/// Start time and duration.
#[component]
pub fn OverallStats(battle: Arc<Battle>) -> impl IntoView {
    let detail = match battle.duration_secs() {
        0 => None,
        secs => Some(format!("Lasted {}", format_duration(secs))),
    };
    view! { <StatCard label="Started" value=format_date(battle.start_time) detail=detail /> }
}

#[component]
pub fn TotalPlayerStats(battle: Arc<Battle>) -> impl IntoView {
    let detail = match battle.alliances.alliances.len() {
        0 => None,
        1 => Some("1 alliance".to_string()),
        n => Some(format!("{n} alliances")),
    };
    view! { <StatCard label="Players" value=battle.player_count().to_string() detail=detail /> }
}

#[component]
pub fn TotalKillStats(battle: Arc<Battle>) -> impl IntoView {
    let detail = Some(format!("{} guilds involved", battle.guilds.guilds.len()));
    view! { <StatCard label="Kills" value=battle.total_kills.to_string() detail=detail /> }
}

#[component]
pub fn TotalFameStats(battle: Arc<Battle>) -> impl IntoView {
    let per_kill = battle
        .total_fame
        .checked_div(u64::from(battle.total_kills))
        .map(|fame| format!("{} per kill", format_fame(fame)));
    view! { <StatCard label="Fame" value=format_fame(battle.total_fame) detail=per_kill /> }
}
