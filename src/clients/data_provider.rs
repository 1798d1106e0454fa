use crate::clients::{convert_fan_out_response, convert_request, convert_response, RequestPlan, Resource};
use crate::error::Result;
use crate::framework::Transport;
use crate::model::{ActionRequest, ActionResult};
use crate::runtime::ProviderConfig;
use futures::future::try_join_all;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Translates data-provider actions into REST calls and back.
///
/// Holds nothing but the immutable configuration and the injected transport,
/// so it is cheap to clone and every call is independent.
///
/// ```rust
/// use crud_provider::framework::{FnTransport, HttpRequest, HttpResponse, TransportError};
/// use crud_provider::DataProvider;
/// use serde_json::json;
///
/// # #[tokio::main]
/// # async fn main() {
/// let transport = FnTransport::new(|_request: HttpRequest| async {
///     Ok::<_, TransportError>(HttpResponse::ok(json!({ "id": 42 })))
/// });
/// let provider = DataProvider::new("http://api", transport);
///
/// let result = provider
///     .call("CREATE", "posts", json!({ "data": { "name": "x" } }))
///     .await
///     .unwrap();
/// assert_eq!(result.to_json(), json!({ "data": { "name": "x", "id": 42 } }));
/// # }
/// ```
#[derive(Clone)]
pub struct DataProvider {
    config: Arc<ProviderConfig>,
    transport: Arc<dyn Transport>,
}

impl DataProvider {
    /// A provider for `api_url` with the default query grammar.
    pub fn new(api_url: impl Into<String>, transport: impl Transport + 'static) -> Self {
        Self {
            config: Arc::new(ProviderConfig::new(api_url)),
            transport: Arc::new(transport),
        }
    }

    /// A provider with a full configuration. The configuration is validated.
    pub fn with_config(config: ProviderConfig, transport: impl Transport + 'static) -> Result<Self> {
        Self::with_shared_transport(config, Arc::new(transport))
    }

    /// Like [`DataProvider::with_config`], for a transport shared with other code.
    pub fn with_shared_transport(config: ProviderConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            transport,
        })
    }

    /// A provider backed by the default `reqwest` JSON transport.
    #[cfg(feature = "http-client")]
    pub fn with_default_transport(api_url: impl Into<String>) -> Result<Self> {
        Self::with_config(
            ProviderConfig::new(api_url),
            crate::runtime::HttpTransport::new(),
        )
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// A client bound to one resource.
    pub fn resource(&self, name: impl Into<String>) -> Resource {
        Resource::new(self.clone(), name)
    }

    /// The HTTP request(s) `request` would issue, without sending anything.
    pub fn convert_request(&self, request: &ActionRequest) -> Result<RequestPlan> {
        convert_request(&self.config, request)
    }

    /// Runs one action through the transport.
    ///
    /// Bulk actions send every per-id request concurrently and fail as soon
    /// as any of them fails; requests already sent are not undone.
    #[instrument(
        name = "data_provider",
        skip_all,
        fields(kind = %request.kind(), resource = %request.resource)
    )]
    pub async fn execute(&self, request: ActionRequest) -> Result<ActionResult> {
        match self.convert_request(&request)? {
            RequestPlan::Single(http) => {
                debug!(method = %http.method, url = %http.url, "Sending request");
                let response = self.transport.send(http).await?;
                Ok(convert_response(response, &request))
            }
            RequestPlan::FanOut(requests) => {
                info!(requests = requests.len(), "Fanning out");
                let responses = try_join_all(requests.into_iter().map(|http| {
                    debug!(method = %http.method, url = %http.url, "Sending request");
                    self.transport.send(http)
                }))
                .await?;
                Ok(convert_fan_out_response(responses))
            }
        }
    }

    /// Runs an action named by its data-provider constant (`"GET_LIST"`, ...)
    /// with untyped parameters.
    ///
    /// Unknown kinds fail with
    /// [`ProviderError::UnsupportedAction`](crate::ProviderError::UnsupportedAction)
    /// before the transport is called.
    pub async fn call(&self, kind: &str, resource: &str, params: Value) -> Result<ActionResult> {
        let request = ActionRequest::from_parts(kind, resource, params)?;
        self.execute(request).await
    }
}

impl std::fmt::Debug for DataProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataProvider")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
