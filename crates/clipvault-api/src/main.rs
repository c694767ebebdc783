use clipvault_api::{setup, telemetry};
use clipvault_core::Config;

// Use mimalloc as the global allocator for better performance and lower fragmentation,
// especially when running on musl-based systems inside containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    telemetry::init_telemetry();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (database, storage, mailer, routes)
    let (state, router) = setup::initialize_app(config).await?;

    // Start the server
    setup::server::start_server(&state.config, router).await?;

    Ok(())
}
