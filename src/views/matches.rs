use crate::auth::role;
use crate::error::AppError;
use crate::models::{Match, MatchError, NewMatch, Player, Side, MAX_SCORE};
use crate::views::layout::{base, AuthState};
use crate::{db, AppState};
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse},
};
use axum_extra::extract::{cookie::CookieJar, Form};
use chrono::{Duration, Local, NaiveDate, TimeZone};
use itertools::Itertools;
use maud::{html, Markup};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Matches page - score entry and match history
pub async fn page(State(state): State<Arc<AppState>>, jar: CookieJar) -> Result<Html<String>, AppError> {
    let players = db::get_all_players(&state.db).await?;
    let matches = db::get_all_matches(&state.db).await?;
    let role = role(&jar, &state);
    let auth = AuthState::new(state.config.admin_password.is_some(), role);

    let content = html! {
        @if role.is_admin() {
            (render_score_form(&players))
            div id="result-display" {}
            hr;
        }

        h2 { "Matches ⚽" }
        div id="match-list" {
            (render_match_list(&matches, &players, role.is_admin(), today()))
        }

        @if role.is_admin() {
            div class="danger-zone" {
                button
                    class="secondary"
                    hx-delete="/api/matches"
                    hx-target="#match-list"
                    hx-confirm="Delete every recorded match?"
                {
                    "Reset All Matches"
                }
                button
                    class="contrast"
                    hx-post="/api/reset"
                    hx-confirm="Delete every match AND every player?"
                {
                    "Reset All Data"
                }
            }
        }
    };

    Ok(Html(base("Matches", "matches", &auth, content).into_string()))
}

/// Server-local date; set `TZ` to move the day boundary
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Score entry form
fn render_score_form(players: &[Player]) -> Markup {
    let slots = [
        ("team1_player1", "Select Player 1"),
        ("team1_player2", "Select Player 2"),
        ("team2_player1", "Select Player 1"),
        ("team2_player2", "Select Player 2"),
    ];

    html! {
        h2 { "Enter Match Score" }
        form hx-post="/api/matches" hx-target="#result-display" hx-on--after-request="if(event.detail.successful) this.reset()" {
            div class="team-grid" {
                @for (team, team_slots) in [("Team 1", &slots[..2]), ("Team 2", &slots[2..])] {
                    fieldset {
                        legend { (team) }
                        @for (name, placeholder) in team_slots {
                            select name=(name) required {
                                option value="" { (placeholder) }
                                @for player in players {
                                    option value=(player.id) { (player.name) }
                                }
                            }
                        }
                    }
                }
            }
            div class="team-grid" {
                @for (name, label) in [("score1", "Team 1 Score"), ("score2", "Team 2 Score")] {
                    label {
                        (label)
                        select name=(name) required {
                            @for score in 0..=MAX_SCORE {
                                option value=(score) { (score) }
                            }
                        }
                    }
                }
            }
            button type="submit" { "Submit Match" }
        }
    }
}

/// Form data for recording a match; empty selects arrive as ""
#[derive(Debug, Deserialize)]
pub struct MatchForm {
    #[serde(default)]
    team1_player1: String,
    #[serde(default)]
    team1_player2: String,
    #[serde(default)]
    team2_player1: String,
    #[serde(default)]
    team2_player2: String,
    score1: i32,
    score2: i32,
}

impl MatchForm {
    fn into_new_match(self) -> Result<NewMatch, MatchError> {
        let id = |s: &str| s.trim().parse::<i32>().map_err(|_| MatchError::IncompleteLineup);
        Ok(NewMatch {
            team1: [id(&self.team1_player1)?, id(&self.team1_player2)?],
            team2: [id(&self.team2_player1)?, id(&self.team2_player2)?],
            score1: self.score1,
            score2: self.score2,
        })
    }
}

/// Record a match (htmx endpoint)
pub async fn submit_match(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<MatchForm>,
) -> Result<impl IntoResponse, AppError> {
    let role = role(&jar, &state);
    role.require_admin()?;

    let new_match = form.into_new_match()?;
    let players = db::get_all_players(&state.db).await?;
    new_match.validate(&players)?;

    let recorded = db::create_match(&state.db, &new_match).await?;
    tracing::info!(
        "Recorded match {}: {:?} {} - {} {:?}",
        recorded.id,
        recorded.team1,
        recorded.score1,
        recorded.score2,
        recorded.team2
    );

    let matches = db::get_all_matches(&state.db).await?;
    Ok(Html(
        html! {
            p class="win" { "Match recorded: " (recorded.score1) " - " (recorded.score2) }
            // Out-of-band swap refreshes the history below the form
            div id="match-list" hx-swap-oob="true" {
                (render_match_list(&matches, &players, role.is_admin(), today()))
            }
        }
        .into_string(),
    ))
}

/// Delete a single match (htmx endpoint)
pub async fn delete_match(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    role(&jar, &state).require_admin()?;

    if !db::delete_match(&state.db, id).await? {
        return Err(AppError::NotFound("Match"));
    }
    tracing::info!("Deleted match {}", id);

    render_current_list(&state).await
}

/// Delete every match (htmx endpoint)
pub async fn delete_all_matches(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<Html<String>, AppError> {
    role(&jar, &state).require_admin()?;

    let deleted = db::delete_all_matches(&state.db).await?;
    tracing::warn!("Deleted all {} matches", deleted);

    render_current_list(&state).await
}

/// Delete every match and player, then reload the page (htmx endpoint)
pub async fn reset_data(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    role(&jar, &state).require_admin()?;

    db::reset_all(&state.db).await?;
    tracing::warn!("Reset all league data");

    Ok([("HX-Redirect", "/matches")])
}

async fn render_current_list(state: &AppState) -> Result<Html<String>, AppError> {
    let players = db::get_all_players(&state.db).await?;
    let matches = db::get_all_matches(&state.db).await?;
    Ok(Html(
        render_match_list(&matches, &players, true, today()).into_string(),
    ))
}

/// Group matches by calendar day in `tz`, newest day and newest match first
fn group_by_day<'a, Tz: TimeZone>(matches: &'a [Match], tz: &Tz) -> Vec<(NaiveDate, Vec<&'a Match>)> {
    let sorted = matches
        .iter()
        .sorted_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

    let mut groups = Vec::new();
    for (day, group) in &sorted.chunk_by(|m| m.created_at.with_timezone(tz).date_naive()) {
        groups.push((day, group.collect()));
    }
    groups
}

/// "Today", "Yesterday" or dd/mm/yyyy
fn day_label(day: NaiveDate, today: NaiveDate) -> String {
    if day == today {
        "Today".to_string()
    } else if day == today - Duration::days(1) {
        "Yesterday".to_string()
    } else {
        day.format("%d/%m/%Y").to_string()
    }
}

/// Render the match history (used for full page and htmx updates)
fn render_match_list(matches: &[Match], players: &[Player], is_admin: bool, today: NaiveDate) -> Markup {
    if matches.is_empty() {
        return html! {
            p { "No matches recorded yet." }
        };
    }

    let names: HashMap<i32, &str> = players.iter().map(|p| (p.id, p.name.as_str())).collect();

    html! {
        @for (day, day_matches) in group_by_day(matches, &Local) {
            div class="day-label" { "🗓️ " (day_label(day, today)) }
            @for m in day_matches {
                (render_match(m, &names, is_admin))
            }
        }
    }
}

/// Render a single match row
fn render_match(m: &Match, names: &HashMap<i32, &str>, is_admin: bool) -> Markup {
    let team_names = |team: &[i32]| {
        team.iter()
            .map(|id| names.get(id).copied().unwrap_or("Unknown"))
            .join(" & ")
    };
    let winner = m.winner();

    html! {
        div class="match-row" id=(format!("match-{}", m.id)) {
            div {
                (team_names(&m.team1))
                @if winner == Some(Side::Team1) { " 🏆" }
            }
            div class="score" { (m.score1) " - " (m.score2) }
            div class="team2" {
                @if winner == Some(Side::Team2) { "🏆 " }
                (team_names(&m.team2))
            }
            div {
                @if is_admin {
                    button
                        class="secondary outline"
                        hx-delete=(format!("/api/matches/{}", m.id))
                        hx-target="#match-list"
                        hx-confirm="Delete this match?"
                    {
                        "Delete"
                    }
                }
            }
        }
    }
}
