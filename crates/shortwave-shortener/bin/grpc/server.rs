use shortwave_core::{
    AllocationError, KeyAllocator, ReadShortRepository, ShortRepository, StorageError,
};
use shortwave_proto_schema::v1 as proto;
use shortwave_proto_schema::v1::shorts_service_server::ShortsService;
use shortwave_redirector::{RedirectorService, ResolutionError};
use shortwave_shortener::{CreateParams, CreationError, ShortLinkService};
use tonic::{Request, Response, Status};

/// The write path and the read path can sit on different repository
/// types, e.g. a cached decorator on the redirection side only.
pub struct ShortsGrpcServer<A, R, D> {
    shortener: ShortLinkService<A, R>,
    redirector: RedirectorService<D>,
}

impl<A: KeyAllocator, R: ShortRepository, D: ReadShortRepository> ShortsGrpcServer<A, R, D> {
    pub fn new(shortener: ShortLinkService<A, R>, redirector: RedirectorService<D>) -> Self {
        Self {
            shortener,
            redirector,
        }
    }
}

#[tonic::async_trait]
impl<A: KeyAllocator, R: ShortRepository, D: ReadShortRepository> ShortsService
    for ShortsGrpcServer<A, R, D>
{
    async fn create(
        &self,
        request: Request<proto::CreateRequest>,
    ) -> Result<Response<proto::CreateResponse>, Status> {
        let request = request.into_inner();

        let link = self
            .shortener
            .create(CreateParams {
                original_url: request.original_url,
                owner_id: request.owner_id,
            })
            .await
            .map_err(creation_status)?;

        Ok(Response::new(proto::CreateResponse {
            short_link: Some(link.into()),
        }))
    }

    async fn list(
        &self,
        request: Request<proto::ListRequest>,
    ) -> Result<Response<proto::ListResponse>, Status> {
        let request = request.into_inner();

        let links = self
            .shortener
            .list(&request.owner_id)
            .await
            .map_err(storage_status)?;

        Ok(Response::new(proto::ListResponse {
            short_links: links.into_iter().map(Into::into).collect(),
        }))
    }

    async fn resolve(
        &self,
        request: Request<proto::ResolveRequest>,
    ) -> Result<Response<proto::ResolveResponse>, Status> {
        let request = request.into_inner();

        // An absent destination is a normal answer, not an error status.
        let original_url = self
            .redirector
            .resolve(&request.hash)
            .await
            .map_err(resolution_status)?;

        Ok(Response::new(proto::ResolveResponse { original_url }))
    }
}

fn creation_status(err: CreationError) -> Status {
    let message = err.to_string();
    match err {
        CreationError::Validation(_) => Status::invalid_argument(message),
        CreationError::KeyService(AllocationError::Unavailable(_)) => {
            Status::unavailable(message)
        }
        CreationError::KeyService(_) => Status::internal(message),
        CreationError::ShortService(cause) => storage_status_with(cause, message),
    }
}

fn storage_status(err: StorageError) -> Status {
    let message = err.to_string();
    storage_status_with(err, message)
}

fn storage_status_with(err: StorageError, message: String) -> Status {
    match err {
        StorageError::Unavailable(_) | StorageError::Timeout(_) => Status::unavailable(message),
        _ => Status::internal(message),
    }
}

fn resolution_status(err: ResolutionError) -> Status {
    let ResolutionError::Storage(cause) = err;
    storage_status(cause)
}
