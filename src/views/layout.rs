use crate::auth::Role;
use maud::{html, Markup, DOCTYPE};

/// Auth state for layout
pub struct AuthState {
    pub enabled: bool,
    pub role: Role,
}

impl AuthState {
    pub fn new(enabled: bool, role: Role) -> Self {
        Self { enabled, role }
    }
}

/// Base layout wrapper for all pages
pub fn base(title: &str, current_page: &str, auth: &AuthState, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - Baby-foot League" }
                // PicoCSS
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
                // htmx
                script src="https://unpkg.com/htmx.org@2.0.4" {}
                style {
                    r#"
                    .nav-buttons { display: flex; gap: 0.5rem; flex-wrap: wrap; margin-bottom: 1rem; }
                    .nav-buttons a { flex: 1; text-align: center; min-width: 120px; }
                    .team-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                    .header-row { display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 1rem; margin-bottom: 1rem; }
                    .auth-form { display: flex; gap: 0.5rem; align-items: stretch; margin: 0; }
                    .auth-form input, .auth-form button { margin: 0; padding: 0.5rem 0.75rem; height: auto; }
                    .auth-form input { width: 150px; }
                    .auth-status { display: flex; gap: 0.5rem; align-items: center; }
                    .win { color: var(--pico-ins-color); }
                    .loss { color: var(--pico-del-color); }
                    .draw { color: var(--pico-muted-color); }
                    .match-row { display: grid; grid-template-columns: 1fr auto 1fr auto; gap: 1rem; align-items: center; padding: 0.5rem 0; border-bottom: 1px solid var(--pico-muted-border-color); }
                    .match-row .score { font-size: 1.5rem; text-align: center; min-width: 80px; }
                    .match-row .team2 { text-align: right; }
                    .day-label { text-align: center; font-weight: bold; margin-top: 1.5rem; }
                    .danger-zone { display: flex; gap: 0.5rem; margin-top: 2rem; }
                    "#
                }
            }
            body {
                main class="container" {
                    div class="header-row" {
                        h1 style="margin: 0;" { "Baby-foot League" }

                        @if auth.enabled {
                            @if auth.role.is_admin() {
                                div class="auth-status" {
                                    span class="win" { "Admin" }
                                    form action="/api/logout" method="post" class="auth-form" {
                                        button type="submit" class="secondary outline" { "Logout" }
                                    }
                                }
                            } @else {
                                form action="/api/login" method="post" class="auth-form" {
                                    input type="password" name="password" placeholder="Admin password" required;
                                    button type="submit" { "Login" }
                                }
                            }
                        }
                    }

                    nav class="nav-buttons" {
                        a href="/" role="button" class=(nav_class(current_page, "rankings")) { "Rankings" }
                        a href="/players" role="button" class=(nav_class(current_page, "players")) { "Players" }
                        a href="/matches" role="button" class=(nav_class(current_page, "matches")) { "Matches" }
                    }

                    hr;

                    (content)
                }
            }
        }
    }
}

fn nav_class(current_page: &str, page: &str) -> &'static str {
    if current_page == page {
        "primary"
    } else {
        "secondary outline"
    }
}

/// Format a percentage with one decimal
pub fn render_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Signed goal difference, e.g. "+3"
pub fn render_goal_difference(diff: i32) -> Markup {
    let class = match diff {
        d if d > 0 => "win",
        d if d < 0 => "loss",
        _ => "draw",
    };
    html! {
        span class=(class) { (format!("{:+}", diff)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_percent() {
        assert_eq!(render_percent(66.666), "66.7%");
        assert_eq!(render_percent(0.0), "0.0%");
    }

    #[test]
    fn test_render_goal_difference() {
        assert!(render_goal_difference(3).into_string().contains("+3"));
        assert!(render_goal_difference(-2).into_string().contains("-2"));
        assert!(render_goal_difference(0).into_string().contains("+0"));
    }
}
