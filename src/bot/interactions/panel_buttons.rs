use crate::bot::commands::overtime::summary_embed;
use crate::bot::commands::punch::punch_reply;
use crate::bot::{Data, Error};
use poise::serenity_prelude as serenity;

pub const PUNCH_BUTTON_ID: &str = "clock_in_out";
pub const VIEW_RECORDS_BUTTON_ID: &str = "view_records";

pub async fn handle_panel_interaction(
    ctx: &serenity::Context,
    interaction: &serenity::ComponentInteraction,
    data: &Data,
) -> Result<(), Error> {
    let user_id = interaction.user.id.to_string();

    // Replies are ephemeral so the shared panel stays clean.
    let response = match interaction.data.custom_id.as_str() {
        PUNCH_BUTTON_ID => {
            let msg = punch_reply(data, &user_id, None).await;
            serenity::CreateInteractionResponseMessage::new()
                .content(msg)
                .ephemeral(true)
        }
        VIEW_RECORDS_BUTTON_ID => {
            let embed = summary_embed(data, &user_id, &interaction.user.name).await;
            serenity::CreateInteractionResponseMessage::new()
                .embed(embed)
                .ephemeral(true)
        }
        other => {
            tracing::warn!("Unknown component interaction: {}", other);
            serenity::CreateInteractionResponseMessage::new()
                .content("This button is no longer supported")
                .ephemeral(true)
        }
    };

    interaction
        .create_response(
            &ctx.http,
            serenity::CreateInteractionResponse::Message(response),
        )
        .await?;

    Ok(())
}
