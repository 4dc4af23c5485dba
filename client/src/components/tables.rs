use leptos::prelude::*;

use battlelog_shared::format::format_fame;
use battlelog_shared::ranking::rank_by;
use battlelog_shared::{AllianceStats, GuildStats, PlayerStats};

const TABLE_STYLE: &str = "width: 100%; border-collapse: collapse; font-size: 0.88rem;";
const HEAD_STYLE: &str = "color: #8a8f9c; font-weight: 500; text-align: right; padding: 0.5rem; border-bottom: 1px solid #1c2030;";
const HEAD_NAME_STYLE: &str = "color: #8a8f9c; font-weight: 500; text-align: left; padding: 0.5rem; border-bottom: 1px solid #1c2030;";
const CELL_STYLE: &str = "text-align: right; padding: 0.45rem 0.5rem; border-bottom: 1px solid #141824;";
const CELL_NAME_STYLE: &str = "text-align: left; padding: 0.45rem 0.5rem; border-bottom: 1px solid #141824;";

#[component]
fn TablePanel(title: &'static str, count: usize, children: Children) -> impl IntoView {
    view! {
        <section style="background: #0f131a; border-radius: 6px; padding: 1rem; overflow-x: auto;">
            <h3 style="margin: 0 0 0.75rem; font-size: 1rem;">
                {title}
                <span style="margin-left: 0.5rem; color: #5a5f70; font-size: 0.8rem;">{count}</span>
            </h3>
            {children()}
        </section>
    }
}

#[component]
pub fn AllianceTable(alliances: Vec<AllianceStats>) -> impl IntoView {
    let rows = rank_by(&alliances, |a| a.fame)
        .into_iter()
        .map(|a| {
            view! {
                <tr>
                    <td style=CELL_NAME_STYLE>{a.name.clone()}</td>
                    <td style=CELL_STYLE>{a.players}</td>
                    <td style=CELL_STYLE>{a.kills}</td>
                    <td style=CELL_STYLE>{a.deaths}</td>
                    <td style=CELL_STYLE>{format_fame(a.fame)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <TablePanel title="Alliances" count=alliances.len()>
            <table style=TABLE_STYLE>
                <thead>
                    <tr>
                        <th style=HEAD_NAME_STYLE>"Alliance"</th>
                        <th style=HEAD_STYLE>"Players"</th>
                        <th style=HEAD_STYLE>"Kills"</th>
                        <th style=HEAD_STYLE>"Deaths"</th>
                        <th style=HEAD_STYLE>"Fame"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </TablePanel>
    }
}

#[component]
pub fn GuildTable(guilds: Vec<GuildStats>) -> impl IntoView {
    let rows = rank_by(&guilds, |g| g.fame)
        .into_iter()
        .map(|g| {
            view! {
                <tr>
                    <td style=CELL_NAME_STYLE>{g.name.clone()}</td>
                    <td style=CELL_NAME_STYLE>{g.alliance.clone()}</td>
                    <td style=CELL_STYLE>{g.players}</td>
                    <td style=CELL_STYLE>{g.kills}</td>
                    <td style=CELL_STYLE>{g.deaths}</td>
                    <td style=CELL_STYLE>{format_fame(g.fame)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <TablePanel title="Guilds" count=guilds.len()>
            <table style=TABLE_STYLE>
                <thead>
                    <tr>
                        <th style=HEAD_NAME_STYLE>"Guild"</th>
                        <th style=HEAD_NAME_STYLE>"Alliance"</th>
                        <th style=HEAD_STYLE>"Players"</th>
                        <th style=HEAD_STYLE>"Kills"</th>
                        <th style=HEAD_STYLE>"Deaths"</th>
                        <th style=HEAD_STYLE>"Fame"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </TablePanel>
    }
}

#[component]
pub fn PlayerTable(players: Vec<PlayerStats>) -> impl IntoView {
    let rows = rank_by(&players, |p| p.fame)
        .into_iter()
        .map(|p| {
            view! {
                <tr>
                    <td style=CELL_NAME_STYLE>{p.name.clone()}</td>
                    <td style=CELL_NAME_STYLE>{p.guild_name.clone()}</td>
                    <td style=CELL_NAME_STYLE>{p.alliance_name.clone()}</td>
                    <td style=CELL_STYLE>{p.kills}</td>
                    <td style=CELL_STYLE>{p.deaths}</td>
                    <td style=CELL_STYLE>{format_fame(p.fame)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <TablePanel title="Players" count=players.len()>
            <table style=TABLE_STYLE>
                <thead>
                    <tr>
                        <th style=HEAD_NAME_STYLE>"Player"</th>
                        <th style=HEAD_NAME_STYLE>"Guild"</th>
                        <th style=HEAD_NAME_STYLE>"Alliance"</th>
                        <th style=HEAD_STYLE>"Kills"</th>
                        <th style=HEAD_STYLE>"Deaths"</th>
                        <th style=HEAD_STYLE>"Fame"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </TablePanel>
    }
}
