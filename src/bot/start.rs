use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents, GuildId};

use crate::bot::{commands, handler::Handler};
use crate::config::Config;
use crate::error::AppError;

/// Shared state available to every slash command through `ctx.data()`.
pub struct Data {
    pub db: DatabaseConnection,
}

/// Builds the Discord client with the command framework and event handler attached.
///
/// Commands are registered in `DEV_GUILD_ID` when configured, which makes changes show up
/// immediately, and globally otherwise.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `db` - Database connection shared by commands and event handlers
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started with `start_bot`
/// - `Err(AppError::DiscordErr)` - Failed to build the client
pub async fn init_bot(config: &Config, db: DatabaseConnection) -> Result<Client, AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let dev_guild_id = config.dev_guild_id;
    let framework_db = db.clone();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            on_error: |error| Box::pin(commands::error::on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                let commands = &framework.options().commands;

                match dev_guild_id {
                    Some(guild_id) => {
                        poise::builtins::register_in_guild(ctx, commands, GuildId::new(guild_id))
                            .await?;
                        tracing::info!(
                            "Registered {} commands in guild {}",
                            commands.len(),
                            guild_id
                        );
                    }
                    None => {
                        poise::builtins::register_globally(ctx, commands).await?;
                        tracing::info!("Registered {} commands globally", commands.len());
                    }
                }

                Ok(Data { db: framework_db })
            })
        })
        .build();

    let client = Client::builder(&config.discord_bot_token, intents)
        .framework(framework)
        .event_handler(Handler::new(db))
        .await?;

    Ok(client)
}

/// Connects the client to the gateway; blocks until shutdown.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
