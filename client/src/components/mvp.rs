use std::sync::Arc;

use leptos::prelude::*;

use battlelog_shared::{Battle, BattleMvps};
use battlelog_shared::format::format_fame;

#[component]
fn MvpCard(title: &'static str, name: String, subtitle: String, value: String) -> impl IntoView {
    view! {
        <div style="flex: 1 1 200px; background: #0f131a; border: 1px solid rgba(245,197,66,0.18); border-radius: 6px; padding: 0.9rem 1rem;">
            <div style="font-size: 0.7rem; color: #f5c542; letter-spacing: 0.1em; text-transform: uppercase;">{title}</div>
            <div style="font-size: 1.1rem; font-weight: 700; margin-top: 0.3rem;">{name}</div>
            <div style="font-size: 0.78rem; color: #5a5f70;">{subtitle}</div>
            <div style="font-size: 0.9rem; margin-top: 0.4rem;">{value}</div>
        </div>
    }
}

/// Top killer, top fame earner and top guild of a battle. Renders nothing for empty battles.
#[component]
pub fn BattleMvpPanel(battle: Arc<Battle>) -> impl IntoView {
    let mvps = BattleMvps::from_battle(&battle);
    if mvps.is_empty() {
        return None;
    }

    let killer = mvps.top_killer.map(|p| {
        view! {
            <MvpCard
                title="Most Kills"
                name=p.name.clone()
                subtitle=p.guild_name.clone()
                value=format!("{} kills", p.kills)
            />
        }
    });
    let fame = mvps.top_fame.map(|p| {
        view! {
            <MvpCard
                title="Most Fame"
                name=p.name.clone()
                subtitle=p.guild_name.clone()
                value=format!("{} fame", format_fame(p.fame))
            />
        }
    });
    let guild = mvps.top_guild.map(|g| {
        view! {
            <MvpCard
                title="Top Guild"
                name=g.name.clone()
                subtitle=g.alliance.clone()
                value=format!("{} fame / {} kills", format_fame(g.fame), g.kills)
            />
        }
    });

    Some(view! {
        <div style="display: flex; flex-wrap: wrap; gap: 1rem; margin-bottom: 1rem;">
            {killer}
            {fame}
            {guild}
        </div>
    })
}
