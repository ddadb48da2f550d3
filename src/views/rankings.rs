use crate::auth::role;
use crate::error::AppError;
use crate::stats::{compute_standings, sort_standings, PlayerStats, SortDirection, SortKey};
use crate::views::layout::{base, render_goal_difference, render_percent, AuthState};
use crate::{db, AppState};
use axum::{
    extract::{Query, State},
    response::Html,
};
use axum_extra::extract::cookie::CookieJar;
use maud::{html, Markup};
use serde::Deserialize;
use std::sync::Arc;

/// Table columns in display order
const COLUMNS: &[(SortKey, &str)] = &[
    (SortKey::Name, "Name"),
    (SortKey::Score, "Score"),
    (SortKey::MatchesPlayed, "Matches"),
    (SortKey::Wins, "W"),
    (SortKey::Losses, "L"),
    (SortKey::Draws, "D"),
    (SortKey::GoalsFor, "GF"),
    (SortKey::GoalsAgainst, "GA"),
    (SortKey::GoalDifference, "GD"),
    (SortKey::WinRate, "Win Rate"),
];

/// Query params selecting the sort column
#[derive(Debug, Default, Deserialize)]
pub struct RankingsQuery {
    sort: Option<SortKey>,
    dir: Option<SortDirection>,
}

/// Rankings page - league standings
pub async fn page(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(query): Query<RankingsQuery>,
) -> Result<Html<String>, AppError> {
    let players = db::get_all_players(&state.db).await?;
    let matches = db::get_all_matches(&state.db).await?;
    let auth = AuthState::new(state.config.admin_password.is_some(), role(&jar, &state));

    let mut standings = compute_standings(&players, &matches);
    let key = query.sort.unwrap_or_default();
    let direction = query.dir.unwrap_or_default();
    if query.sort.is_some() {
        sort_standings(&mut standings, key, direction);
    }

    let content = html! {
        h2 { "Rankings 🏆" }
        @if standings.is_empty() {
            p { "No players yet. Add some on the Players page." }
        } @else {
            (render_table(&standings, key, direction))
        }
    };

    Ok(Html(base("Rankings", "rankings", &auth, content).into_string()))
}

fn render_table(standings: &[PlayerStats], key: SortKey, direction: SortDirection) -> Markup {
    html! {
        div class="overflow-auto" {
            table class="striped" {
                thead {
                    tr {
                        th { "Rank" }
                        @for (column, label) in COLUMNS {
                            th {
                                a href=(sort_link(*column, header_direction(key, direction, *column))) {
                                    (label)
                                    @if *column == key {
                                        " " (sort_icon(direction))
                                    }
                                }
                            }
                        }
                    }
                }
                tbody {
                    @for (index, player) in standings.iter().enumerate() {
                        tr {
                            td { (medal(index + 1)) }
                            td { a href=(format!("/players/{}", player.id)) { (player.name) } }
                            td { strong { (player.score) } }
                            td { (player.matches_played) }
                            td class="win" { (player.wins) }
                            td class="loss" { (player.losses) }
                            td class="draw" { (player.draws) }
                            td { (player.goals_for) }
                            td { (player.goals_against) }
                            td { (render_goal_difference(player.goal_difference)) }
                            td {
                                @if player.matches_played > 0 {
                                    (render_percent(player.win_rate))
                                } @else {
                                    "-"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Direction a header link applies: ascending first, descending on a second click
fn header_direction(current: SortKey, direction: SortDirection, column: SortKey) -> SortDirection {
    if current == column && direction == SortDirection::Asc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    }
}

fn sort_link(column: SortKey, direction: SortDirection) -> String {
    format!("/?sort={}&dir={}", column.as_str(), direction.as_str())
}

fn sort_icon(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "▲",
        SortDirection::Desc => "▼",
    }
}

/// Medal for the podium, plain rank otherwise
fn medal(rank: usize) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => n.to_string(),
    }
}
