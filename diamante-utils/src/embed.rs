use poise::serenity_prelude as serenity;

/// Default embed color used across the bot UI (Discord "Gold").
pub const DEFAULT_EMBED_COLOR: u32 = 0xF1_C4_0F;

/// Build the rank status embed shown by `/rank`.
pub fn build_rank_embed(
    username: &str,
    diamantes: i64,
    level: i64,
    xp: i64,
    xp_needed: i64,
) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(format!("🏅 Status de {}", username))
        .color(DEFAULT_EMBED_COLOR)
        .field("💎 Diamantes", diamantes.to_string(), true)
        .field("🆙 Nível", level.to_string(), true)
        .field("✨ XP", format!("{} / {}", xp, xp_needed), false)
}
