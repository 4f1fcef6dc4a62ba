use diamante_core::{Context, Error};
use diamante_database::impls::users::{get_or_create_user, save_user};
use diamante_utils::time::now_unix_millis;

pub const DAILY_REJECTED: &str = "❌ Você já resgatou seu prêmio hoje!";
pub const DAILY_GRANTED: &str = "🎁 Você recebeu **200 diamantes**!";

/// Economia: Ganha diamantes diários
#[poise::command(slash_command, category = "Economia")]
pub async fn daily(ctx: Context<'_>) -> Result<(), Error> {
    let mut profile = get_or_create_user(&ctx.data().db, ctx.author().id.get()).await?;

    if !profile.try_claim_daily(now_unix_millis()) {
        ctx.send(
            poise::CreateReply::default()
                .content(DAILY_REJECTED)
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    save_user(&ctx.data().db, &profile).await?;
    ctx.say(DAILY_GRANTED).await?;
    Ok(())
}
