use crate::bot::{Context, Data, Error};
use crate::utils::format::{create_error_embed, create_summary_embed};
use crate::utils::time::local_date;
use chrono::Utc;
use poise::serenity_prelude as serenity;

/// Builds this month's overtime summary embed for `user_id`.
pub async fn summary_embed(data: &Data, user_id: &str, username: &str) -> serenity::CreateEmbed {
    let settings = data.recorder.settings();
    let today = local_date(Utc::now(), settings.utc_offset);

    match data.aggregator.monthly_summary(user_id, today).await {
        Ok(summary) => create_summary_embed(username, &summary, &settings.currency),
        Err(e) => {
            tracing::error!("Failed to load monthly records for {}: {:?}", user_id, e);
            create_error_embed("Error", "Could not load your records. Please try again later.")
        }
    }
}

/// Shows this month's attendance and overtime pay
#[poise::command(slash_command)]
pub async fn overtime(ctx: Context<'_>) -> Result<(), Error> {
    let user_id = ctx.author().id.to_string();
    let username = ctx.author().name.clone();

    let embed = summary_embed(ctx.data(), &user_id, &username).await;
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
