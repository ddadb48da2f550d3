use crate::models::{Match, NewMatch, Player};
use sqlx::PgPool;

/// Get all players ordered by name
pub async fn get_all_players(pool: &PgPool) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>("SELECT id, name, created_at FROM players ORDER BY name, id")
        .fetch_all(pool)
        .await
}

/// Create a new player
pub async fn create_player(pool: &PgPool, name: &str) -> Result<Player, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        "INSERT INTO players (name) VALUES ($1) RETURNING id, name, created_at",
    )
    .bind(name)
    .fetch_one(pool)
    .await
}

/// Delete a player. Matches referencing them are kept.
pub async fn delete_player(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM players WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Get all matches, most recent first
pub async fn get_all_matches(pool: &PgPool) -> Result<Vec<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        "SELECT id, team1, team2, score1, score2, created_at
         FROM matches ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await
}

/// Create a new match record
pub async fn create_match(pool: &PgPool, new_match: &NewMatch) -> Result<Match, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        "INSERT INTO matches (team1, team2, score1, score2)
         VALUES ($1, $2, $3, $4)
         RETURNING id, team1, team2, score1, score2, created_at",
    )
    .bind(&new_match.team1[..])
    .bind(&new_match.team2[..])
    .bind(new_match.score1)
    .bind(new_match.score2)
    .fetch_one(pool)
    .await
}

/// Delete a single match
pub async fn delete_match(pool: &PgPool, id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM matches WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete every match, keeping players
pub async fn delete_all_matches(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM matches").execute(pool).await?;
    Ok(result.rows_affected())
}

/// Delete every match and player
pub async fn reset_all(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM matches").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM players").execute(&mut *tx).await?;
    tx.commit().await
}
