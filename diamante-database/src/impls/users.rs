use anyhow::Context as _;

use crate::{database::Database, model::user::UserProfile};

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i64,
    diamantes: i64,
    level: i64,
    xp: i64,
    last_daily: Option<i64>,
}

impl UserRow {
    fn into_profile(self) -> anyhow::Result<UserProfile> {
        let user_id = u64::try_from(self.user_id).context("user_id row out of u64 range")?;
        Ok(UserProfile {
            user_id,
            diamantes: self.diamantes,
            level: self.level,
            xp: self.xp,
            last_daily: self.last_daily,
        })
    }
}

/// Look up a user's profile, returning `None` when no row exists.
pub async fn find_user(db: &Database, user_id: u64) -> anyhow::Result<Option<UserProfile>> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    let row: Option<UserRow> = sqlx::query_as(
        "SELECT user_id, diamantes, level, xp, last_daily FROM users WHERE user_id = $1",
    )
    .bind(user_id_i64)
    .fetch_optional(db.pool())
    .await?;

    row.map(UserRow::into_profile).transpose()
}

/// Load a user's profile, inserting a row with schema defaults if absent.
///
/// The insert uses `ON CONFLICT DO NOTHING` so concurrent first accesses for
/// the same user settle on one row instead of racing a find-then-create pair.
pub async fn get_or_create_user(db: &Database, user_id: u64) -> anyhow::Result<UserProfile> {
    let user_id_i64 = i64::try_from(user_id).context("user_id out of i64 range")?;

    sqlx::query("INSERT INTO users (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING")
        .bind(user_id_i64)
        .execute(db.pool())
        .await?;

    let row: UserRow = sqlx::query_as(
        "SELECT user_id, diamantes, level, xp, last_daily FROM users WHERE user_id = $1",
    )
    .bind(user_id_i64)
    .fetch_one(db.pool())
    .await?;

    row.into_profile()
}

/// Persist all mutable fields of a profile by key.
pub async fn save_user(db: &Database, profile: &UserProfile) -> anyhow::Result<()> {
    let user_id_i64 = i64::try_from(profile.user_id).context("user_id out of i64 range")?;

    sqlx::query(
        "UPDATE users SET diamantes = $2, level = $3, xp = $4, last_daily = $5 WHERE user_id = $1",
    )
    .bind(user_id_i64)
    .bind(profile.diamantes)
    .bind(profile.level)
    .bind(profile.xp)
    .bind(profile.last_daily)
    .execute(db.pool())
    .await?;

    Ok(())
}
