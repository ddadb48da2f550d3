use crate::auth::role;
use crate::error::AppError;
use crate::models::{NewPlayer, Player};
use crate::views::layout::{base, AuthState};
use crate::{db, AppState};
use axum::{
    extract::{Path, State},
    response::Html,
};
use axum_extra::extract::{cookie::CookieJar, Form};
use maud::{html, Markup};
use std::sync::Arc;

/// Players page - roster management
pub async fn page(State(state): State<Arc<AppState>>, jar: CookieJar) -> Result<Html<String>, AppError> {
    let players = db::get_all_players(&state.db).await?;
    let role = role(&jar, &state);
    let auth = AuthState::new(state.config.admin_password.is_some(), role);

    let content = html! {
        h2 { "Players 🏃" }

        @if role.is_admin() {
            (render_add_form())
        }

        div id="player-list" {
            (render_player_list(&players, role.is_admin()))
        }
    };

    Ok(Html(base("Players", "players", &auth, content).into_string()))
}

/// Add-player form; notices land in `#player-result`, the list is swapped out of band
fn render_add_form() -> Markup {
    html! {
        form hx-post="/api/players" hx-target="#player-result" hx-on--after-request="if(event.detail.successful) this.reset()" {
            fieldset role="group" {
                input type="text" name="name" placeholder="Enter player name" required;
                button type="submit" { "Add Player" }
            }
        }
        div id="player-result" {}
    }
}

/// Render the player list (used for full page and htmx updates)
fn render_player_list(players: &[Player], is_admin: bool) -> Markup {
    if players.is_empty() {
        return html! {
            p { "No players yet." }
        };
    }

    html! {
        table {
            tbody {
                @for player in players {
                    tr id=(format!("player-{}", player.id)) {
                        td { a href=(format!("/players/{}", player.id)) { (player.name) } }
                        @if is_admin {
                            td style="text-align: right;" {
                                button
                                    class="secondary outline"
                                    hx-delete=(format!("/api/players/{}", player.id))
                                    hx-target="#player-list"
                                    hx-swap="innerHTML"
                                    hx-confirm=(format!("Delete {}? Their past matches are kept.", player.name))
                                {
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Create a new player (htmx endpoint)
pub async fn create_player(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<NewPlayer>,
) -> Result<Html<String>, AppError> {
    role(&jar, &state).require_admin()?;
    let name = form.validated_name()?;

    let player = db::create_player(&state.db, name).await?;
    tracing::info!("Added player {} ({})", player.name, player.id);

    let players = db::get_all_players(&state.db).await?;
    Ok(Html(render_player_added(&player, &players).into_string()))
}

fn render_player_added(player: &Player, players: &[Player]) -> Markup {
    html! {
        p class="win" { "Added " (player.name) "!" }
        div id="player-list" hx-swap-oob="true" {
            (render_player_list(players, true))
        }
    }
}

/// Delete a player (htmx endpoint)
pub async fn delete_player(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    role(&jar, &state).require_admin()?;

    if !db::delete_player(&state.db, id).await? {
        return Err(AppError::NotFound("Player"));
    }
    tracing::info!("Deleted player {}", id);

    let players = db::get_all_players(&state.db).await?;
    Ok(Html(render_player_list(&players, true).into_string()))
}
