mod cli;
mod server;

use crate::cli::{StorageBackendArg, CLI};
use crate::server::ShortsGrpcServer;
use anyhow::Context;
use clap::Parser;
use jiff::SignedDuration;
use shortwave_core::{ReadShortRepository, ShortRepository};
use shortwave_keygen::KeygenAllocator;
use shortwave_proto_schema::v1::shorts_service_server::ShortsServiceServer;
use shortwave_redirector::{CachedRepository, RedirectorService};
use shortwave_shortener::ShortLinkService;
use shortwave_storage::{InMemoryRepository, RedisRepository};
use tonic::transport::Server;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        keygen_endpoint = %config.keygen_endpoint,
        storage_backend = %config.storage,
        expiry_days = config.expiry_days,
        redirect_cache = config.cache,
        "starting shorts gRPC server"
    );

    let allocator = KeygenAllocator::connect(config.keygen_endpoint.clone())
        .await
        .context("failed to connect to the keygen service")?;
    let expiry_horizon = SignedDuration::from_hours(i64::from(config.expiry_days) * 24);

    match config.storage {
        StorageBackendArg::InMemory => {
            serve(&config, allocator, InMemoryRepository::new(), expiry_horizon).await?;
        }
        StorageBackendArg::Redis => {
            let redis_url = config
                .redis_url
                .clone()
                .context("redis url is required when storage backend is redis")?;
            let repository = RedisRepository::connect(&redis_url).await?;
            serve(&config, allocator, repository, expiry_horizon).await?;
        }
    }

    Ok(())
}

/// Picks the redirection read path: straight off the repository, or
/// through the in-memory record cache when `--cache` is set.
async fn serve<R>(
    config: &CLI,
    allocator: KeygenAllocator,
    repository: R,
    expiry_horizon: SignedDuration,
) -> anyhow::Result<()>
where
    R: ShortRepository + Clone,
{
    if config.cache {
        run_server(
            config.listen_addr,
            allocator,
            repository.clone(),
            CachedRepository::new(repository),
            expiry_horizon,
        )
        .await
    } else {
        run_server(
            config.listen_addr,
            allocator,
            repository.clone(),
            repository,
            expiry_horizon,
        )
        .await
    }
}

async fn run_server<R, D>(
    listen_addr: std::net::SocketAddr,
    allocator: KeygenAllocator,
    repository: R,
    redirect_repository: D,
    expiry_horizon: SignedDuration,
) -> anyhow::Result<()>
where
    R: ShortRepository,
    D: ReadShortRepository,
{
    let shortener = ShortLinkService::with_expiry_horizon(allocator, repository, expiry_horizon);
    let redirector = RedirectorService::new(redirect_repository);
    let service = ShortsGrpcServer::new(shortener, redirector);

    let (mut health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_service_status("", tonic_health::ServingStatus::Serving)
        .await;

    Server::builder()
        .add_service(health_service)
        .add_service(ShortsServiceServer::new(service))
        .serve(listen_addr)
        .await?;

    Ok(())
}
