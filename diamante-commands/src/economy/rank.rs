use diamante_core::{Context, Error};
use diamante_database::impls::users::find_user;
use diamante_database::model::user::UserProfile;
use diamante_utils::embed::build_rank_embed;

/// Economia: Vê seu nível e diamantes
#[poise::command(slash_command, category = "Economia")]
pub async fn rank(ctx: Context<'_>) -> Result<(), Error> {
    let user_id = ctx.author().id.get();

    // Unknown users see all-default values; the read path persists nothing.
    let profile = profile_or_defaults(find_user(&ctx.data().db, user_id).await?, user_id);

    let embed = build_rank_embed(
        &ctx.author().name,
        profile.diamantes,
        profile.level,
        profile.xp,
        profile.xp_to_next_level(),
    );

    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

/// Map a store lookup onto the displayed profile: a stored row as-is, or
/// schema defaults for a never-seen user, without creating a row.
fn profile_or_defaults(profile: Option<UserProfile>, user_id: u64) -> UserProfile {
    profile.unwrap_or_else(|| UserProfile::with_defaults(user_id))
}
