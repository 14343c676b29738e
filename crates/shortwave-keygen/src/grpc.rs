use async_trait::async_trait;
use shortwave_core::{AllocationError, KeyAllocator};
use shortwave_proto_schema::v1 as proto;
use shortwave_proto_schema::v1::keys_client::KeysClient;
use tonic::transport::Channel;
use tracing::{debug, trace};

/// gRPC-backed [`KeyAllocator`] for the remote keygen service.
///
/// Keys arrive as raw bytes on the wire and are normalized to UTF-8
/// strings before they are handed out. An empty or undecodable key is
/// reported as malformed rather than passed through.
#[derive(Debug, Clone)]
pub struct KeygenAllocator {
    client: KeysClient<Channel>,
}

impl KeygenAllocator {
    /// Wraps an existing client.
    pub fn new(client: KeysClient<Channel>) -> Self {
        Self { client }
    }

    /// Connects to the keygen service at the given endpoint.
    pub async fn connect(endpoint: impl Into<String>) -> Result<Self, AllocationError> {
        let client = KeysClient::connect(endpoint.into())
            .await
            .map_err(|e| AllocationError::Unavailable(e.to_string()))?;
        Ok(Self::new(client))
    }
}

fn decode_key(raw: Vec<u8>) -> Result<String, AllocationError> {
    if raw.is_empty() {
        return Err(AllocationError::MalformedKey(
            "key is empty".to_string(),
        ));
    }

    String::from_utf8(raw)
        .map_err(|e| AllocationError::MalformedKey(format!("key is not valid utf-8: {e}")))
}

fn map_status(status: tonic::Status) -> AllocationError {
    match status.code() {
        tonic::Code::Unavailable | tonic::Code::DeadlineExceeded => {
            AllocationError::Unavailable(status.to_string())
        }
        _ => AllocationError::Remote(status.to_string()),
    }
}

#[async_trait]
impl KeyAllocator for KeygenAllocator {
    async fn allocate(&self) -> Result<String, AllocationError> {
        trace!("allocating key at the keygen service");

        // Tonic clients are cheap to clone; each call gets its own handle.
        let mut client = self.client.clone();
        let response = client
            .get_key(proto::Void {})
            .await
            .map_err(map_status)?;

        let key = decode_key(response.into_inner().key)?;
        debug!(key = %key, "allocated key");
        Ok(key)
    }

    async fn release(&self, key: &str) -> Result<(), AllocationError> {
        trace!(key = %key, "releasing key at the keygen service");

        let mut client = self.client.clone();
        client
            .release_key(proto::KeyRequest {
                key: key.as_bytes().to_vec(),
            })
            .await
            .map_err(map_status)?;

        debug!(key = %key, "released key");
        Ok(())
    }
}
