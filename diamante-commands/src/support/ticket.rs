use poise::serenity_prelude as serenity;

use diamante_core::{Context, Error};
use diamante_utils::embed::DEFAULT_EMBED_COLOR;

/// Component id of the panel button; the bot's interaction handler matches on
/// it to open a ticket channel.
pub const TICKET_OPEN_BUTTON_ID: &str = "ticket_open";

/// Suporte: Painel de tickets
#[poise::command(
    slash_command,
    rename = "setup-ticket",
    guild_only,
    default_member_permissions = "MANAGE_CHANNELS",
    category = "Suporte"
)]
pub async fn setup_ticket(ctx: Context<'_>) -> Result<(), Error> {
    let embed = serenity::CreateEmbed::new()
        .title("🎫 Suporte")
        .description("Clique no botão abaixo para abrir um ticket com a equipe.")
        .color(DEFAULT_EMBED_COLOR);

    ctx.send(
        poise::CreateReply::default()
            .embed(embed)
            .components(vec![serenity::CreateActionRow::Buttons(vec![
                serenity::CreateButton::new(TICKET_OPEN_BUTTON_ID)
                    .label("Abrir ticket")
                    .style(serenity::ButtonStyle::Primary)
                    .emoji('🎫'),
            ])]),
    )
    .await?;

    Ok(())
}
