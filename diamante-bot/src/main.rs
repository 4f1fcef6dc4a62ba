mod events;
mod web;

use std::env;
use std::sync::Arc;

use poise::serenity_prelude as serenity;
use tracing::{debug, error, info};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;
use sqlx::postgres::PgPoolOptions;

use diamante_core::{CooldownTracker, Data, Error, XP_COOLDOWN};
use diamante_database::{Database, MIGRATOR};
use diamante_llm::LlmService;
use diamante_utils::embed::DEFAULT_EMBED_COLOR;

const DEFAULT_HTTP_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer().with_filter(filter_fn(|metadata| {
        let target = metadata.target();

        let within_info_level = *metadata.level() <= tracing::Level::INFO;
        if !within_info_level {
            return false;
        }

        !(target.starts_with("serenity::gateway::bridge::shard_manager")
            || target.starts_with("serenity::gateway::bridge::shard_runner"))
    }));

    tracing_subscriber::registry().with(fmt_layer).init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();

    let token = env::var("DISCORD_TOKEN")?;
    let database_url = env::var("DATABASE_URL")?;
    let http_port = env_u16("PORT", DEFAULT_HTTP_PORT);

    // The pool connects lazily so an unreachable record store does not stop
    // startup; individual operations fail at call time instead.
    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(&database_url)?;

    match sqlx::query("SELECT 1").execute(&db_pool).await {
        Ok(_) => info!("PostgreSQL connection established."),
        Err(source) => error!(
            ?source,
            "PostgreSQL is unreachable; continuing, record operations will fail until it recovers."
        ),
    }

    match MIGRATOR.run(&db_pool).await {
        Ok(()) => info!("Database migrations applied."),
        Err(source) => error!(?source, "failed to apply database migrations; continuing."),
    }

    let db = Database::new(db_pool);

    let llm = LlmService::from_env_optional();
    if llm.is_some() {
        info!("AI integration enabled.");
    } else {
        info!("AI integration disabled (missing/empty OPENAI_API_KEY).");
    }

    tokio::spawn(async move {
        if let Err(source) = web::serve(http_port).await {
            error!(?source, "liveness HTTP listener failed");
        }
    });

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT
        | serenity::GatewayIntents::GUILD_MEMBERS;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: diamante_commands::commands(),
            event_handler: |ctx, event, framework, data| {
                Box::pin(handle_event(ctx, event, framework, data))
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            let db = db.clone();
            let llm = llm.clone();
            Box::pin(async move {
                info!("Diamante has awoken!");

                match poise::builtins::register_globally(ctx, &framework.options().commands).await
                {
                    Ok(()) => info!("Application commands registered."),
                    Err(source) => error!(
                        ?source,
                        "failed to register application commands; they stay unavailable until a successful registration."
                    ),
                }

                Ok(Data {
                    db,
                    llm,
                    cooldowns: Arc::new(CooldownTracker::new(XP_COOLDOWN)),
                })
            })
        })
        .build();

    info!("Diamante is connecting...");

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await?;

    client.start().await?;
    Ok(())
}

fn env_u16(key: &str, default: u16) -> u16 {
    match env::var(key) {
        Ok(value) => value.trim().parse::<u16>().unwrap_or(default),
        Err(_) => default,
    }
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(?error, "command error");

            let embed = serenity::CreateEmbed::new()
                .title("Erro")
                .description("Algo deu errado ao executar este comando.")
                .color(DEFAULT_EMBED_COLOR);

            let _ = ctx
                .send(poise::CreateReply::default().ephemeral(true).embed(embed))
                .await;
        }
        poise::FrameworkError::UnknownCommand { .. } => {
            debug!("unknown command invocation");
        }
        other => {
            error!(?other, "framework error");
        }
    }
}

async fn handle_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Message { new_message } => {
            events::leveling::handle_message_xp(ctx, data, new_message).await;
        }
        serenity::FullEvent::InteractionCreate {
            interaction: serenity::Interaction::Component(component),
        } => {
            events::ticket::handle_ticket_button(ctx, component).await?;
        }
        _ => {}
    }

    Ok(())
}
