use poise::serenity_prelude as serenity;
use rand::Rng;
use serenity::Mentionable;
use tracing::{error, warn};

use diamante_core::Data;
use diamante_database::impls::users::{get_or_create_user, save_user};
use diamante_database::model::user::{XP_GAIN_MAX, XP_GAIN_MIN};

/// Accrue XP for an incoming guild message, applying the per-user cooldown
/// and announcing level-ups in the originating channel.
pub async fn handle_message_xp(
    ctx: &serenity::Context,
    data: &Data,
    message: &serenity::Message,
) {
    // Ignore bots and webhooks; direct messages accrue nothing.
    if message.author.bot || message.webhook_id.is_some() {
        return;
    }

    if message.guild_id.is_none() {
        return;
    }

    let user_id = message.author.id.get();
    if data.cooldowns.is_on_cooldown(user_id) {
        return;
    }

    let mut profile = match get_or_create_user(&data.db, user_id).await {
        Ok(profile) => profile,
        Err(source) => {
            error!(?source, "failed to load leveling profile");
            return;
        }
    };

    let gain = rand::rng().random_range(XP_GAIN_MIN..=XP_GAIN_MAX);
    let leveled_up = profile.grant_xp(gain);

    if leveled_up {
        let announcement = format!(
            "🎉 **Level Up!** {} subiu para o nível **{}**!",
            message.author.mention(),
            profile.level
        );
        if let Err(source) = message.channel_id.say(&ctx.http, announcement).await {
            warn!(?source, "failed to announce level-up");
        }
    }

    if let Err(source) = save_user(&data.db, &profile).await {
        error!(?source, "failed to persist leveling profile");
        return;
    }

    data.cooldowns.start_cooldown(user_id);
}
