//! Action → HTTP request translation.

use crate::error::Result;
use crate::framework::{HttpRequest, Method};
use crate::model::{ActionParams, ActionRequest};
use crate::query::{compose_filter, scalar_to_string, CondOperator, QueryFilter, RequestQueryBuilder};
use crate::runtime::ProviderConfig;
use serde_json::Value;

/// The HTTP work an action turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestPlan {
    Single(HttpRequest),
    /// Independent per-id requests, in id order.
    FanOut(Vec<HttpRequest>),
}

/// Builds the request plan for `request`. Never touches the network.
pub fn convert_request(config: &ProviderConfig, request: &ActionRequest) -> Result<RequestPlan> {
    let resource = request.resource.as_str();
    let builder = || RequestQueryBuilder::with_options(config.query.clone());
    let with_query = |query: String| {
        if query.is_empty() {
            config.resource_url(resource)
        } else {
            format!("{}?{}", config.resource_url(resource), query)
        }
    };
    let record_url = |id: &Value| config.record_url(resource, &scalar_to_string(id));

    let http = match &request.params {
        ActionParams::GetList(params) => {
            let pagination = params.pagination;
            let query = builder()
                .set_filter(compose_filter(&params.filter)?)?
                .set_limit(pagination.per_page)
                .set_page(pagination.page)
                .sort_by(params.sort.clone())
                .set_offset(pagination.offset())
                .query();
            HttpRequest::get(with_query(query))
        }
        ActionParams::GetOne(params) => HttpRequest::get(record_url(&params.id)),
        ActionParams::GetMany(params) => {
            let ids = params
                .ids
                .iter()
                .map(scalar_to_string)
                .collect::<Vec<_>>()
                .join(",");
            let query = builder()
                .set_filter([QueryFilter::new("id", CondOperator::In, ids)])?
                .query();
            HttpRequest::get(with_query(query))
        }
        ActionParams::GetManyReference(params) => {
            let pagination = params.pagination;
            let mut filters = compose_filter(&params.filter)?;
            filters.push(QueryFilter::new(
                params.target.clone(),
                CondOperator::Equals,
                params.id.clone(),
            ));
            let query = builder()
                .set_filter(filters)?
                .sort_by(params.sort.clone())
                .set_limit(pagination.per_page)
                .set_offset(pagination.offset())
                .query();
            HttpRequest::get(with_query(query))
        }
        ActionParams::Create(params) => HttpRequest::new(Method::Post, config.resource_url(resource))
            .with_body(serde_json::to_string(&params.data)?),
        ActionParams::Update(params) => HttpRequest::new(Method::Patch, record_url(&params.id))
            .with_body(serde_json::to_string(&params.data)?),
        ActionParams::Delete(params) => HttpRequest::new(Method::Delete, record_url(&params.id)),
        ActionParams::UpdateMany(params) => {
            let body = serde_json::to_string(&params.data)?;
            let requests = params
                .ids
                .iter()
                .map(|id| HttpRequest::new(Method::Put, record_url(id)).with_body(body.clone()))
                .collect();
            return Ok(RequestPlan::FanOut(requests));
        }
        ActionParams::DeleteMany(params) => {
            let requests = params
                .ids
                .iter()
                .map(|id| HttpRequest::new(Method::Delete, record_url(id)))
                .collect();
            return Ok(RequestPlan::FanOut(requests));
        }
    };

    Ok(RequestPlan::Single(http))
}
