mod cli;

use crate::cli::{IdGeneratorArg, StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use phonebook_core::{PersonId, PersonStore};
use phonebook_gateway::{telemetry, App, AppState};
use phonebook_generator::{Generator, RandomGenerator, SeqGenerator};
use phonebook_storage::memory::sample_persons;
use phonebook_storage::{InMemoryStore, MySqlStore};
use std::sync::Arc;
use tracing::info;

type BoxedGenerator = Box<dyn Generator<Output = PersonId>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = CLI::parse();

    telemetry::init(config.log_format.into()).context("installing tracing subscriber")?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        "starting phonebook server"
    );

    let store: Arc<dyn PersonStore> = match config.storage {
        StorageBackendArg::InMemory => Arc::new(in_memory_store(&config)),
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .as_deref()
                .context("mysql dsn is required when storage backend is mysql")?;
            let store = MySqlStore::connect(mysql_dsn)
                .await
                .context("connecting to mysql")?;
            store.migrate().await.context("creating persons table")?;
            Arc::new(store)
        }
    };

    let state = AppState::new(store);
    let router = match &config.static_dir {
        Some(dir) => {
            info!(static_dir = %dir.display(), "serving static files");
            App::router_with_static_dir(state, dir)
        }
        None => App::router(state),
    };

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "server running");

    axum::serve(listener, router).await?;

    Ok(())
}

fn in_memory_store(config: &CLI) -> InMemoryStore<BoxedGenerator> {
    let records = if config.seed_sample_data {
        sample_persons()
    } else {
        Vec::new()
    };

    let generator: BoxedGenerator = match config.id_generator {
        IdGeneratorArg::Random => Box::new(RandomGenerator::new()),
        IdGeneratorArg::Seq => {
            let first = records.iter().map(|p| p.id.get() + 1).max().unwrap_or(1);
            Box::new(SeqGenerator::starting_at(first))
        }
    };

    info!(
        id_generator = %config.id_generator,
        seeded = records.len(),
        "using in-memory store"
    );
    InMemoryStore::with_records(generator, records)
}
