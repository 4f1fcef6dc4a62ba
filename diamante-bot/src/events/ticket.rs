use poise::serenity_prelude as serenity;
use tracing::error;

use diamante_commands::support::ticket::TICKET_OPEN_BUTTON_ID;
use diamante_core::Error;

const TICKET_OPEN_FAILED: &str = "❌ Não foi possível abrir o ticket.";

/// Open a private ticket channel when the support panel button is pressed.
pub async fn handle_ticket_button(
    ctx: &serenity::Context,
    interaction: &serenity::ComponentInteraction,
) -> Result<(), Error> {
    if interaction.data.custom_id != TICKET_OPEN_BUTTON_ID {
        return Ok(());
    }

    let Some(guild_id) = interaction.guild_id else {
        return Ok(());
    };

    let channel_name = format!("ticket-{}", interaction.user.name.to_lowercase());

    // Hidden from @everyone, visible to the opener.
    let permissions = vec![
        serenity::PermissionOverwrite {
            allow: serenity::Permissions::empty(),
            deny: serenity::Permissions::VIEW_CHANNEL,
            kind: serenity::PermissionOverwriteType::Role(serenity::RoleId::new(guild_id.get())),
        },
        serenity::PermissionOverwrite {
            allow: serenity::Permissions::VIEW_CHANNEL
                | serenity::Permissions::SEND_MESSAGES
                | serenity::Permissions::READ_MESSAGE_HISTORY,
            deny: serenity::Permissions::empty(),
            kind: serenity::PermissionOverwriteType::Member(interaction.user.id),
        },
    ];

    let builder = serenity::CreateChannel::new(channel_name)
        .kind(serenity::ChannelType::Text)
        .permissions(permissions);

    let content = match guild_id.create_channel(&ctx.http, builder).await {
        Ok(channel) => format!("🎫 Ticket aberto: <#{}>", channel.id),
        Err(source) => {
            error!(?source, "failed to create ticket channel");
            TICKET_OPEN_FAILED.to_owned()
        }
    };

    interaction
        .create_response(
            &ctx.http,
            serenity::CreateInteractionResponse::Message(
                serenity::CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}
