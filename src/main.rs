use clap::Parser;
use movie_store::utils::{logger, validation::Validate};
use movie_store::{seed_store, CliConfig, ConfigProvider, MovieStore, Shell};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(config.verbose());
    tracing::info!("Starting movie-store ({})", config.catalog_name());
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let mut store = MovieStore::new();
    match seed_store(&mut store, &config) {
        Ok(count) if !config.seed_files().is_empty() => {
            println!("{} movies loaded.", count);
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!("❌ Seed import failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    }

    println!("{} (type 'help' for commands)", config.catalog_name());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::with_config(&mut store, &config).run(stdin.lock(), stdout.lock())?;

    tracing::info!("Exiting with {} movies in memory", store.len());
    Ok(())
}
