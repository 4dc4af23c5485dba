use leptos::prelude::*;
use leptos_router::components::A;

use battlelog_shared::BattleSummary;
use battlelog_shared::format::{format_alliance_names, format_date, format_fame};

const ROW_STYLE: &str = "display: grid; grid-template-columns: 3fr 10fr 3fr 3fr 2fr 3fr; gap: 0.5rem; align-items: center; padding: 0.6rem 0.5rem; border-bottom: 1px solid #141824; color: #e2e0d8; text-decoration: none;";
const PAGE_BUTTON_STYLE: &str = "padding: 0.4rem 0.9rem; background: #1a1d2a; color: #e2e0d8; border: 1px solid #282c3e; border-radius: 4px; cursor: pointer;";

/// Column header shared by the list and its loading placeholder.
#[component]
pub fn BattleListHeader() -> impl IntoView {
    view! {
        <div style="background: #0f131a; margin-bottom: 1rem; padding: 0.5rem; color: #aaaaaa;">
            <div style="display: grid; grid-template-columns: 3fr 10fr 3fr 3fr 2fr 3fr; gap: 0.5rem;">
                <span>"Date"</span>
                <span>"Alliances"</span>
                <span style="text-align: right;">"Fame"</span>
                <span style="text-align: right;">"Players"</span>
                <span style="text-align: right;">"Kills"</span>
                <span style="text-align: right;">"ID"</span>
            </div>
        </div>
    }
}

#[component]
fn BattleRow(battle: BattleSummary) -> impl IntoView {
    let href = format!("/battles/{}", battle.id);
    view! {
        <A href=href>
            <div style=ROW_STYLE>
                <span style="color: #8a8f9c;">{format_date(battle.start_time)}</span>
                <span>{format_alliance_names(&battle.alliances)}</span>
                <span style="text-align: right;">{format_fame(battle.total_fame)}</span>
                <span style="text-align: right;">{battle.total_players}</span>
                <span style="text-align: right;">{battle.total_kills}</span>
                <span style="text-align: right; color: #5a5f70;">{battle.id}</span>
            </div>
        </A>
    }
}

/// Rows of one result page plus pager controls.
#[component]
pub fn BattleList(
    battles: Vec<BattleSummary>,
    active_page: u32,
    has_next: bool,
    on_page: Callback<u32>,
) -> impl IntoView {
    let empty = battles.is_empty();
    let rows = battles
        .into_iter()
        .map(|battle| view! { <BattleRow battle=battle /> })
        .collect_view();

    view! {
        <div style="background: #0f131a; border-radius: 6px;">
            {rows}
            {empty.then(|| view! {
                <p style="padding: 2rem; text-align: center; color: #5a5f70;">"No battles found"</p>
            })}
        </div>
        <div style="display: flex; justify-content: center; align-items: center; gap: 1rem; margin-top: 1rem;">
            <button
                style=PAGE_BUTTON_STYLE
                disabled={active_page <= 1}
                on:click=move |_| on_page.run(active_page.saturating_sub(1))
            >
                "Prev"
            </button>
            <span style="color: #8a8f9c;">{format!("Page {active_page}")}</span>
            <button
                style=PAGE_BUTTON_STYLE
                disabled={!has_next}
                on:click=move |_| on_page.run(active_page.saturating_add(1))
            >
                "Next"
            </button>
        </div>
    }
}
