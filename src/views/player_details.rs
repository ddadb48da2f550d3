use crate::auth::role;
use crate::error::AppError;
use crate::stats::{
    compute_head_to_head, compute_partner_stats, player_stats, HeadToHead, Matchup, PartnerRecord,
    PartnerStats, PlayerStats,
};
use crate::views::layout::{base, render_goal_difference, render_percent, AuthState};
use crate::{db, AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use maud::{html, Markup};
use std::sync::Arc;

/// Player details page - general stats, matchups and partners
pub async fn page(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let players = db::get_all_players(&state.db).await?;
    let matches = db::get_all_matches(&state.db).await?;
    let auth = AuthState::new(state.config.admin_password.is_some(), role(&jar, &state));

    let Some(stats) = player_stats(id, &players, &matches) else {
        let content = html! { p { "Player not found" } };
        return Ok((
            StatusCode::NOT_FOUND,
            Html(base("Player", "players", &auth, content).into_string()),
        )
            .into_response());
    };

    let head_to_head = compute_head_to_head(id, &players, &matches);
    let partners = compute_partner_stats(id, &players, &matches);

    let content = html! {
        h2 { (stats.name) "'s Statistics 📊" }
        div class="grid" {
            (render_general(&stats))
            (render_matchups(&head_to_head))
        }
        (render_partners(&partners))
    };

    Ok(Html(base(&stats.name, "players", &auth, content).into_string()).into_response())
}

fn render_general(stats: &PlayerStats) -> Markup {
    html! {
        article {
            header { "General Stats 🏆" }
            ul {
                li { "🎮 Matches Played: " strong { (stats.matches_played) } }
                li { "🏅 Wins: " strong class="win" { (stats.wins) } }
                li { "😓 Losses: " strong class="loss" { (stats.losses) } }
                li { "🤝 Draws: " strong class="draw" { (stats.draws) } }
                li { "⚽ Goals Scored: " strong { (stats.goals_for) } }
                li { "🥅 Goals Conceded: " strong { (stats.goals_against) } }
                li { "📈 Goal Difference: " strong { (render_goal_difference(stats.goal_difference)) } }
                li { "🏆 Win Rate: " strong { (render_percent(stats.win_rate)) } }
            }
        }
    }
}

fn render_matchups(head_to_head: &HeadToHead) -> Markup {
    html! {
        article {
            header { "Matchups 🤼 " small { "(by win rate)" } }
            ul {
                li { "😈 Nemesis: " (render_matchup(head_to_head.nemesis.as_ref(), "loss")) }
                li { "🦸 Best Matchup: " (render_matchup(head_to_head.best_matchup.as_ref(), "win")) }
            }
        }
    }
}

fn render_matchup(matchup: Option<&Matchup>, class: &str) -> Markup {
    match matchup {
        Some(m) => html! {
            strong class=(class) {
                (player_link(m.id, &m.name)) " (W: " (m.wins) ", L: " (m.losses) ", WR: " (render_percent(m.win_rate * 100.0)) ")"
            }
        },
        None => not_available(),
    }
}

fn render_partners(partners: &PartnerStats) -> Markup {
    html! {
        article {
            header { "Partner Stats 🤝" }
            ul {
                li {
                    "🤼 Most Played Partner: "
                    @match &partners.most_played_partner {
                        Some(p) => { strong { (player_link(p.id, &p.name)) " (" (p.matches) " matches)" } }
                        None => { (not_available()) }
                    }
                }
                li { "🏆 Best Partner: " (render_partner(partners.best_partner.as_ref(), "win")) }
                li { "😓 Worst Partner: " (render_partner(partners.worst_partner.as_ref(), "loss")) }
            }
        }
    }
}

fn render_partner(partner: Option<&PartnerRecord>, class: &str) -> Markup {
    match partner {
        Some(p) => html! {
            strong class=(class) {
                (player_link(p.id, &p.name)) " (W: " (p.wins) ", L: " (p.losses) ", D: " (p.draws)
                ", WR: " (render_percent(p.win_rate * 100.0)) ")"
            }
        },
        None => not_available(),
    }
}

fn player_link(id: i32, name: &str) -> Markup {
    html! { a href=(format!("/players/{}", id)) { (name) } }
}

fn not_available() -> Markup {
    html! { span class="draw" { "N/A" } }
}
