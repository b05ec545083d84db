use std::sync::Arc;

use teloxide::prelude::*;

use tunescout::telegram::handlers::HandlerDeps;
use tunescout::{config, create_bot, create_pool, schema, setup_bot_commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tunescout::core::init_logger(&config::LOG_FILE_PATH)?;
    log::info!("Starting music search bot...");

    let bot = create_bot()?;
    let me = bot.get_me().await?;
    log::info!("Bot started as @{}", me.username());

    setup_bot_commands(&bot).await?;

    let db_pool = Arc::new(create_pool(&config::DATABASE_PATH)?);
    let deps = HandlerDeps::new(db_pool, Some(me.username().to_string()));

    let handler = schema(deps);

    Dispatcher::builder(bot, handler)
        .dependencies(DependencyMap::new())
        .default_handler(|upd| async move {
            log::debug!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Bot stopped");
    Ok(())
}
