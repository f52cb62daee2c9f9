pub mod commands;
pub mod handlers;
pub mod interactions;

use crate::attendance::{AttendanceRecorder, MonthlyAggregator};
use crate::config::Config;
use crate::database::{self, RecordStore, SqliteRecordStore};
use anyhow::Result;
use poise::serenity_prelude as serenity;
use std::sync::Arc;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

#[derive(Clone)]
pub struct Data {
    pub recorder: Arc<AttendanceRecorder>,
    pub aggregator: Arc<MonthlyAggregator>,
    pub config: Config,
}

impl Data {
    pub fn new(store: Arc<dyn RecordStore>, config: Config) -> Self {
        let recorder = AttendanceRecorder::new(store.clone(), config.settings.clone());
        let aggregator = MonthlyAggregator::new(store, config.settings.utc_offset);

        Self {
            recorder: Arc::new(recorder),
            aggregator: Arc::new(aggregator),
            config,
        }
    }
}

pub async fn create_bot(config: Config) -> Result<serenity::Client> {
    let pool = database::create_connection(&config.database_url).await?;
    let store: Arc<dyn RecordStore> = Arc::new(SqliteRecordStore::new(pool));

    let data = Data::new(store, config.clone());

    let intents = serenity::GatewayIntents::non_privileged();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                commands::punch::punch(),
                commands::punch::clock_in(),
                commands::punch::clock_out(),
                commands::overtime::overtime(),
                commands::panel::panel(),
            ],
            event_handler: |ctx, event, framework, data| {
                Box::pin(handlers::event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                Ok(data)
            })
        })
        .build();

    let client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await?;

    Ok(client)
}
