use crate::attendance::PunchError;
use crate::bot::{Context, Data, Error};
use crate::database::models::PunchKind;
use crate::utils::format::{format_error_message, format_success_message};
use crate::utils::time::format_time_local;
use chrono::Utc;

#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum PunchChoice {
    #[name = "Clock in"]
    ClockIn,
    #[name = "Clock out"]
    ClockOut,
}

impl From<PunchChoice> for PunchKind {
    fn from(choice: PunchChoice) -> Self {
        match choice {
            PunchChoice::ClockIn => PunchKind::ClockIn,
            PunchChoice::ClockOut => PunchKind::ClockOut,
        }
    }
}

/// Records a punch for `user_id` now and renders the reply text.
pub async fn punch_reply(data: &Data, user_id: &str, requested: Option<PunchKind>) -> String {
    match data.recorder.record_punch(user_id, Utc::now(), requested).await {
        Ok(outcome) => format_success_message(&outcome.message),
        Err(e @ PunchError::AlreadyClockedIn { clock_in_time }) => format_error_message(&format!(
            "{} ({})",
            e,
            format_time_local(clock_in_time, data.recorder.settings().utc_offset)
        )),
        Err(e) if e.is_user_error() => format_error_message(&e.to_string()),
        Err(e) => {
            tracing::error!("Failed to record punch for {}: {:?}", user_id, e);
            format_error_message("Could not save your punch. Please try again later.")
        }
    }
}

/// Clock in or out; the time of day decides unless a kind is given
#[poise::command(slash_command)]
pub async fn punch(
    ctx: Context<'_>,
    #[description = "Force clock-in or clock-out instead of deciding by time of day"]
    kind: Option<PunchChoice>,
) -> Result<(), Error> {
    let user_id = ctx.author().id.to_string();
    let msg = punch_reply(ctx.data(), &user_id, kind.map(PunchKind::from)).await;
    ctx.say(msg).await?;
    Ok(())
}

/// Clock in for today
#[poise::command(slash_command)]
pub async fn clock_in(ctx: Context<'_>) -> Result<(), Error> {
    let user_id = ctx.author().id.to_string();
    let msg = punch_reply(ctx.data(), &user_id, Some(PunchKind::ClockIn)).await;
    ctx.say(msg).await?;
    Ok(())
}

/// Clock out and calculate today's overtime
#[poise::command(slash_command)]
pub async fn clock_out(ctx: Context<'_>) -> Result<(), Error> {
    let user_id = ctx.author().id.to_string();
    let msg = punch_reply(ctx.data(), &user_id, Some(PunchKind::ClockOut)).await;
    ctx.say(msg).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendance::Settings;
    use crate::config::Config;
    use crate::database::memory::MemoryRecordStore;
    use std::sync::Arc;

    fn test_data(store: Arc<MemoryRecordStore>) -> Data {
        let config = Config {
            discord_token: "token".to_string(),
            database_url: "sqlite::memory:".to_string(),
            settings: Settings::default(),
        };
        Data::new(store, config)
    }

    #[test]
    fn choices_map_to_kinds() {
        assert_eq!(PunchKind::from(PunchChoice::ClockIn), PunchKind::ClockIn);
        assert_eq!(PunchKind::from(PunchChoice::ClockOut), PunchKind::ClockOut);
    }

    #[tokio::test]
    async fn successful_punch_is_marked_success() {
        let store = Arc::new(MemoryRecordStore::new());
        let data = test_data(store.clone());

        let reply = punch_reply(&data, "U1", Some(PunchKind::ClockIn)).await;

        assert!(reply.starts_with("✅ Clocked in at "));
        assert_eq!(store.all().len(), 1);
    }

    #[tokio::test]
    async fn duplicate_clock_in_reply_names_first_time() {
        let store = Arc::new(MemoryRecordStore::new());
        let data = test_data(store);

        punch_reply(&data, "U1", Some(PunchKind::ClockIn)).await;
        let reply = punch_reply(&data, "U1", Some(PunchKind::ClockIn)).await;

        assert!(reply.starts_with("❌ **Error**: You have already clocked in today ("));
    }

    #[tokio::test]
    async fn missing_clock_in_is_reported_to_user() {
        let data = test_data(Arc::new(MemoryRecordStore::new()));

        let reply = punch_reply(&data, "U1", Some(PunchKind::ClockOut)).await;

        assert_eq!(reply, "❌ **Error**: Please clock in first");
    }

    #[tokio::test]
    async fn store_failure_gets_generic_reply() {
        let store = Arc::new(MemoryRecordStore::new());
        store.fail_writes();
        let data = test_data(store);

        let reply = punch_reply(&data, "U1", Some(PunchKind::ClockIn)).await;

        assert_eq!(
            reply,
            "❌ **Error**: Could not save your punch. Please try again later."
        );
    }
}
