use crate::bot::interactions::panel_buttons::{PUNCH_BUTTON_ID, VIEW_RECORDS_BUTTON_ID};
use crate::bot::{Context, Error};
use poise::serenity_prelude as serenity;

/// Posts the punch / view records button panel in this channel
#[poise::command(slash_command)]
pub async fn panel(ctx: Context<'_>) -> Result<(), Error> {
    let components = vec![serenity::CreateActionRow::Buttons(vec![
        serenity::CreateButton::new(PUNCH_BUTTON_ID)
            .label("🕘 Punch")
            .style(serenity::ButtonStyle::Primary),
        serenity::CreateButton::new(VIEW_RECORDS_BUTTON_ID)
            .label("📋 Overtime records")
            .style(serenity::ButtonStyle::Secondary),
    ])];

    let builder = poise::CreateReply::default()
        .content("**Attendance**: punch in/out or check this month's overtime")
        .components(components);

    ctx.send(builder).await?;

    Ok(())
}
