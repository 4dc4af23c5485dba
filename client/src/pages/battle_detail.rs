use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use battlelog_shared::format::{battle_time_label, format_alliance_names, format_description};
use battlelog_shared::{Battle, BattleState};

use crate::analytics;
use crate::components::{
    AllianceTable, BattleMvpPanel, GuildTable, Loader, OverallStats, PlayerTable, TotalFameStats,
    TotalKillStats, TotalPlayerStats,
};
use crate::store::BattleStoreHandle;

const STAT_CELL_STYLE: &str = "flex: 1 1 200px; min-width: 0;";

/// Report page for a single battle, keyed by the `:id` route segment.
#[component]
pub fn BattleDetailPage() -> impl IntoView {
    let store: BattleStoreHandle = expect_context();
    let params = use_params_map();
    let id = Memo::new(move |_| {
        params
            .with(|p| p.get("id").map(|id| id.to_string()))
            .unwrap_or_default()
    });

    // The memo only notifies on a new id, so this runs once per battle
    // even when the router reuses this page for another id.
    Effect::new(move || {
        let id = id.get();
        analytics::page_view(&format!("/battles/{id}"));
        store.fetch_battle(id);
    });

    on_cleanup(move || store.clear_battle());

    move || match store.state() {
        BattleState::Failed(message) => view! { <ErrorPanel message=message /> }.into_any(),
        BattleState::Ready(battle) => view! { <BattleReport battle=battle /> }.into_any(),
        BattleState::Idle | BattleState::Loading { .. } => view! { <LoadingPanel /> }.into_any(),
    }
}

#[component]
fn ErrorPanel(message: String) -> impl IntoView {
    view! {
        <div style="width: 100%; max-width: 450px; margin: 5vh auto 0; padding: 4rem; background: #0f131a; text-align: center; border-radius: 6px; box-shadow: 0 4px 20px rgba(0,0,0,0.4);">
            <p style="margin-bottom: 2rem;">{message}</p>
            <A href="/battles">
                <span style="color: #34c3ff; text-decoration: none;">"Return to Battle Index"</span>
            </A>
        </div>
    }
}

#[component]
fn LoadingPanel() -> impl IntoView {
    view! {
        <div>
            <div style="height: 5vh;" />
            <div style="max-width: 300px; margin: auto; padding: 1rem; text-align: center; background: #0f131a; border-radius: 6px; box-shadow: 0 4px 20px rgba(0,0,0,0.4);">
                <Loader size=18 />
            </div>
        </div>
    }
}

#[component]
fn BattleReport(battle: Arc<Battle>) -> impl IntoView {
    let title = format!("Battle Report - {}", battle.id);
    let description = format_description(
        battle.alliance_names(),
        &battle_time_label(battle.start_time),
        battle.player_count(),
        battle.total_kills,
    );
    let heading = format_alliance_names(battle.alliance_names());

    view! {
        <Title text=title />
        <Meta name="description" content=description />
        <div style="min-height: 600px; max-width: 1200px; margin: 0 auto; padding-top: 1rem;">
            <div style="display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 1rem; gap: 1rem;">
                <h2 style="margin: 0; font-size: 1.2rem;">{heading}</h2>
                <A href="/">
                    <span style="color: #34c3ff;">"Return to index"</span>
                </A>
            </div>
            <div style="display: flex; flex-wrap: wrap; gap: 1rem; margin-bottom: 1rem;">
                <div style=STAT_CELL_STYLE><OverallStats battle=battle.clone() /></div>
                <div style=STAT_CELL_STYLE><TotalPlayerStats battle=battle.clone() /></div>
                <div style=STAT_CELL_STYLE><TotalKillStats battle=battle.clone() /></div>
                <div style=STAT_CELL_STYLE><TotalFameStats battle=battle.clone() /></div>
            </div>
            <BattleMvpPanel battle=battle.clone() />
            <div style="display: flex; flex-direction: column; gap: 1rem;">
                <AllianceTable alliances=battle.alliances.alliances.clone() />
                <GuildTable guilds=battle.guilds.guilds.clone() />
                <PlayerTable players=battle.players.players.clone() />
            </div>
        </div>
    }
}
