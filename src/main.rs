use bill_buddy::{
    config::{self, bills::seed_bills, database},
    core::store::BillStore,
    errors::Result,
    store::SqliteBillStore,
    ui::{
        modal::ModalSlot,
        navigator::{Navigator, Route},
        notify::LogNotifier,
        router::Router,
    },
};
use dotenvy::dotenv;
use std::{path::Path, sync::Arc};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // 2. Load .env file; variables may also come from the environment directly
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration(Path::new("config.toml"))
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Initialize database
    let db = database::create_connection(&app_config.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Seed bills from config.toml into an empty store
    let store: Arc<dyn BillStore> = Arc::new(SqliteBillStore::new(db));
    seed_bills(store.as_ref(), &app_config.session, &app_config.seeds)
        .await
        .inspect_err(|e| error!("Failed to seed bills: {}", e))?;

    // 6. Show the bills page
    let router = Router::new(
        Some(store),
        app_config.session,
        Arc::new(ModalSlot::new(app_config.modal_width)),
        Arc::new(LogNotifier),
    );
    router.navigate(Route::Bills);
    println!("{}", router.render().await);

    Ok(())
}
