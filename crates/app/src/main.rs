use migration::{Migrator, MigratorTrait};

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "paisa={level},telegram_bot={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let db = connect_database(&settings.database).await?;

    let engine = engine::Engine::builder().database(db).build();

    let bot = telegram_bot::Bot::builder()
        .token(&settings.telegram.token)
        .timezone(settings.telegram.timezone.as_deref().unwrap_or(""))
        .engine(engine)
        .build()?;

    bot.run().await;

    Ok(())
}

async fn connect_database(
    config: &settings::Database,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let url = match &config.path {
        Some(path) => format!("sqlite:{path}?mode=rwc"),
        None => String::from("sqlite::memory:"),
    };

    let database = sea_orm::Database::connect(url).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}
