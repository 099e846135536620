use async_trait::async_trait;
use core_grpc::{ChannelConfig, MAX_MESSAGE_SIZE, TracingInterceptor, create_channel_lazy_with_config};
use rpc::meta::v1::meta_client::MetaClient;
use rpc::payload::v1::meta;
use tonic::codec::CompressionEncoding;
use tonic::codegen::InterceptedService;
use tonic::transport::Channel;
use tonic_health::pb::health_check_response::ServingStatus;
use tonic_health::pb::health_client::HealthClient;
use tonic_health::pb::HealthCheckRequest;
use tracing::instrument;

use crate::error::{MetaError, MetaResult};

/// Bidirectional id ↔ key store.
///
/// The forward direction maps an internal id to the caller's key
/// (`get_meta`), the inverse maps a key back to its id. Batched lookups are
/// positionally aligned with their input; a missing entry is an empty string.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetaStore: Send + Sync + 'static {
    /// id → key
    async fn get_meta(&self, id: String) -> MetaResult<String>;

    async fn get_metas(&self, ids: Vec<String>) -> MetaResult<Vec<String>>;

    /// key → id
    async fn get_meta_inverse(&self, key: String) -> MetaResult<String>;

    async fn get_metas_inverse(&self, keys: Vec<String>) -> MetaResult<Vec<String>>;

    async fn set_meta(&self, id: String, key: String) -> MetaResult<()>;

    /// Store `(id, key)` pairs.
    async fn set_metas(&self, pairs: Vec<(String, String)>) -> MetaResult<()>;

    /// Delete by id, returning the key it mapped to.
    async fn delete_meta(&self, id: String) -> MetaResult<String>;

    async fn delete_metas(&self, ids: Vec<String>) -> MetaResult<Vec<String>>;

    /// Delete by key, returning the id it mapped to.
    async fn delete_meta_inverse(&self, key: String) -> MetaResult<String>;

    async fn delete_metas_inverse(&self, keys: Vec<String>) -> MetaResult<Vec<String>>;

    /// Check the store's reachability.
    async fn health_check(&self) -> MetaResult<()>;
}

type MetaChannel = InterceptedService<Channel, TracingInterceptor>;

/// [`MetaStore`] over the `meta.v1.Meta` gRPC service.
#[derive(Clone, Debug)]
pub struct GrpcMetaStore {
    client: MetaClient<MetaChannel>,
    health: HealthClient<Channel>,
}

impl GrpcMetaStore {
    pub fn new(channel: Channel) -> Self {
        let client = MetaClient::with_interceptor(channel.clone(), TracingInterceptor::new())
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd)
            .max_decoding_message_size(MAX_MESSAGE_SIZE)
            .max_encoding_message_size(MAX_MESSAGE_SIZE);
        Self {
            client,
            health: HealthClient::new(channel),
        }
    }

    /// Build a store client on a lazy channel; nothing is dialed until the first call.
    pub fn connect_lazy(addr: impl Into<String>, config: ChannelConfig) -> MetaResult<Self> {
        let channel = create_channel_lazy_with_config(addr, config)?;
        Ok(Self::new(channel))
    }
}

/// A store `NotFound` becomes [`MetaError::NotFound`] naming `subject`.
fn store_error(subject: &str) -> impl FnOnce(tonic::Status) -> MetaError + '_ {
    move |status| {
        if status.code() == tonic::Code::NotFound {
            MetaError::NotFound(subject.to_string())
        } else {
            MetaError::Rpc(status)
        }
    }
}

#[async_trait]
impl MetaStore for GrpcMetaStore {
    #[instrument(skip(self), level = "trace")]
    async fn get_meta(&self, id: String) -> MetaResult<String> {
        let res = self
            .client
            .clone()
            .get_meta(meta::Key { key: id.clone() })
            .await
            .map_err(store_error(&id))?;
        Ok(res.into_inner().val)
    }

    #[instrument(skip_all, fields(count = ids.len()), level = "trace")]
    async fn get_metas(&self, ids: Vec<String>) -> MetaResult<Vec<String>> {
        let res = self
            .client
            .clone()
            .get_metas(meta::Keys { keys: ids })
            .await
            .map_err(store_error("ids"))?;
        Ok(res.into_inner().vals)
    }

    #[instrument(skip(self), level = "trace")]
    async fn get_meta_inverse(&self, key: String) -> MetaResult<String> {
        let res = self
            .client
            .clone()
            .get_meta_inverse(meta::Val { val: key.clone() })
            .await
            .map_err(store_error(&key))?;
        Ok(res.into_inner().key)
    }

    #[instrument(skip_all, fields(count = keys.len()), level = "trace")]
    async fn get_metas_inverse(&self, keys: Vec<String>) -> MetaResult<Vec<String>> {
        let res = self
            .client
            .clone()
            .get_metas_inverse(meta::Vals { vals: keys })
            .await
            .map_err(store_error("keys"))?;
        Ok(res.into_inner().keys)
    }

    #[instrument(skip(self), level = "trace")]
    async fn set_meta(&self, id: String, key: String) -> MetaResult<()> {
        self.client
            .clone()
            .set_meta(meta::KeyVal { key: id, val: key })
            .await?;
        Ok(())
    }

    #[instrument(skip_all, fields(count = pairs.len()), level = "trace")]
    async fn set_metas(&self, pairs: Vec<(String, String)>) -> MetaResult<()> {
        let kvs = pairs
            .into_iter()
            .map(|(id, key)| meta::KeyVal { key: id, val: key })
            .collect();
        self.client.clone().set_metas(meta::KeyVals { kvs }).await?;
        Ok(())
    }

    #[instrument(skip(self), level = "trace")]
    async fn delete_meta(&self, id: String) -> MetaResult<String> {
        let res = self
            .client
            .clone()
            .delete_meta(meta::Key { key: id.clone() })
            .await
            .map_err(store_error(&id))?;
        Ok(res.into_inner().val)
    }

    #[instrument(skip_all, fields(count = ids.len()), level = "trace")]
    async fn delete_metas(&self, ids: Vec<String>) -> MetaResult<Vec<String>> {
        let res = self
            .client
            .clone()
            .delete_metas(meta::Keys { keys: ids })
            .await
            .map_err(store_error("ids"))?;
        Ok(res.into_inner().vals)
    }

    #[instrument(skip(self), level = "trace")]
    async fn delete_meta_inverse(&self, key: String) -> MetaResult<String> {
        let res = self
            .client
            .clone()
            .delete_meta_inverse(meta::Val { val: key.clone() })
            .await
            .map_err(store_error(&key))?;
        Ok(res.into_inner().key)
    }

    #[instrument(skip_all, fields(count = keys.len()), level = "trace")]
    async fn delete_metas_inverse(&self, keys: Vec<String>) -> MetaResult<Vec<String>> {
        let res = self
            .client
            .clone()
            .delete_metas_inverse(meta::Vals { vals: keys })
            .await
            .map_err(store_error("keys"))?;
        Ok(res.into_inner().keys)
    }

    async fn health_check(&self) -> MetaResult<()> {
        let res = self
            .health
            .clone()
            .check(HealthCheckRequest {
                service: String::new(),
            })
            .await?;
        match res.into_inner().status() {
            ServingStatus::Serving => Ok(()),
            status => Err(MetaError::Rpc(tonic::Status::unavailable(format!(
                "metadata store reports {}",
                status.as_str_name()
            )))),
        }
    }
}
