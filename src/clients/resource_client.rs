use crate::clients::DataProvider;
use crate::error::Result;
use crate::model::{ActionRequest, ActionResult, GetListParams, GetManyReferenceParams};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

/// Trait for resource-bound clients to inherit every data-provider action.
///
/// Implementors only say which provider and which resource they talk to; the
/// nine actions come for free.
///
/// ```rust
/// use crud_provider::clients::{DataProvider, ResourceClient};
///
/// struct Posts {
///     provider: DataProvider,
/// }
///
/// impl ResourceClient for Posts {
///     fn provider(&self) -> &DataProvider {
///         &self.provider
///     }
///
///     fn resource(&self) -> &str {
///         "posts"
///     }
/// }
/// ```
#[async_trait]
pub trait ResourceClient: Send + Sync {
    fn provider(&self) -> &DataProvider;

    fn resource(&self) -> &str;

    #[instrument(skip_all)]
    async fn get_list(&self, params: GetListParams) -> Result<ActionResult> {
        debug!(resource = self.resource(), ?params, "get_list called");
        self.provider()
            .execute(ActionRequest::get_list(self.resource(), params))
            .await
    }

    async fn get_one(&self, id: Value) -> Result<ActionResult> {
        self.provider()
            .execute(ActionRequest::get_one(self.resource(), id))
            .await
    }

    async fn get_many(&self, ids: Vec<Value>) -> Result<ActionResult> {
        self.provider()
            .execute(ActionRequest::get_many(self.resource(), ids))
            .await
    }

    #[instrument(skip_all)]
    async fn get_many_reference(&self, params: GetManyReferenceParams) -> Result<ActionResult> {
        debug!(resource = self.resource(), ?params, "get_many_reference called");
        self.provider()
            .execute(ActionRequest::get_many_reference(self.resource(), params))
            .await
    }

    async fn create(&self, data: Value) -> Result<ActionResult> {
        self.provider()
            .execute(ActionRequest::create(self.resource(), data))
            .await
    }

    async fn update(&self, id: Value, data: Value) -> Result<ActionResult> {
        self.provider()
            .execute(ActionRequest::update(self.resource(), id, data))
            .await
    }

    async fn update_many(&self, ids: Vec<Value>, data: Value) -> Result<ActionResult> {
        self.provider()
            .execute(ActionRequest::update_many(self.resource(), ids, data))
            .await
    }

    async fn delete(&self, id: Value) -> Result<ActionResult> {
        self.provider()
            .execute(ActionRequest::delete(self.resource(), id))
            .await
    }

    async fn delete_many(&self, ids: Vec<Value>) -> Result<ActionResult> {
        self.provider()
            .execute(ActionRequest::delete_many(self.resource(), ids))
            .await
    }
}

/// The stock [`ResourceClient`]: a provider plus a resource name.
#[derive(Clone, Debug)]
pub struct Resource {
    provider: DataProvider,
    name: String,
}

impl Resource {
    pub fn new(provider: DataProvider, name: impl Into<String>) -> Self {
        Self {
            provider,
            name: name.into(),
        }
    }

    /// Fetches one record and decodes it into `T`.
    pub async fn get_one_as<T: DeserializeOwned>(&self, id: impl Into<Value>) -> Result<T> {
        let result = self.get_one(id.into()).await?;
        Ok(serde_json::from_value(result.into_data())?)
    }
}

impl ResourceClient for Resource {
    fn provider(&self) -> &DataProvider {
        &self.provider
    }

    fn resource(&self) -> &str {
        &self.name
    }
}
