use crate::error::{ProviderError, Result};
use crate::query::QuerySort;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The data-provider actions a caller can request.
///
/// Parses from and displays as the data-provider constants (`GET_LIST`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    GetList,
    GetOne,
    GetMany,
    GetManyReference,
    Create,
    Update,
    UpdateMany,
    Delete,
    DeleteMany,
}

impl ActionKind {
    pub const ALL: [ActionKind; 9] = [
        ActionKind::GetList,
        ActionKind::GetOne,
        ActionKind::GetMany,
        ActionKind::GetManyReference,
        ActionKind::Create,
        ActionKind::Update,
        ActionKind::UpdateMany,
        ActionKind::Delete,
        ActionKind::DeleteMany,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::GetList => "GET_LIST",
            ActionKind::GetOne => "GET_ONE",
            ActionKind::GetMany => "GET_MANY",
            ActionKind::GetManyReference => "GET_MANY_REFERENCE",
            ActionKind::Create => "CREATE",
            ActionKind::Update => "UPDATE",
            ActionKind::UpdateMany => "UPDATE_MANY",
            ActionKind::Delete => "DELETE",
            ActionKind::DeleteMany => "DELETE_MANY",
        }
    }

    /// Bulk actions fan out into one request per id.
    pub fn is_fan_out(&self) -> bool {
        matches!(self, ActionKind::UpdateMany | ActionKind::DeleteMany)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self> {
        ActionKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ProviderError::UnsupportedAction(s.to_string()))
    }
}

// =============================================================================
// PARAMETERS
// =============================================================================

/// 1-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub per_page: u64,
}

impl Pagination {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self { page, per_page }
    }

    /// `(page - 1) * per_page`; page 0 is treated like page 1. Saturates at
    /// `u64::MAX` instead of overflowing.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetListParams {
    pub pagination: Pagination,
    #[serde(default)]
    pub sort: Option<QuerySort>,
    #[serde(default)]
    pub filter: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetOneParams {
    pub id: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetManyParams {
    pub ids: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetManyReferenceParams {
    /// Field on `resource` that points at the referenced record.
    pub target: String,
    pub id: Value,
    pub pagination: Pagination,
    #[serde(default)]
    pub sort: Option<QuerySort>,
    #[serde(default)]
    pub filter: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateParams {
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParams {
    pub id: Value,
    pub data: Value,
    #[serde(default)]
    pub previous_data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateManyParams {
    pub ids: Vec<Value>,
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteParams {
    pub id: Value,
    #[serde(default)]
    pub previous_data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteManyParams {
    pub ids: Vec<Value>,
}

/// Kind-specific parameters; the variant is the action kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionParams {
    GetList(GetListParams),
    GetOne(GetOneParams),
    GetMany(GetManyParams),
    GetManyReference(GetManyReferenceParams),
    Create(CreateParams),
    Update(UpdateParams),
    UpdateMany(UpdateManyParams),
    Delete(DeleteParams),
    DeleteMany(DeleteManyParams),
}

impl ActionParams {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionParams::GetList(_) => ActionKind::GetList,
            ActionParams::GetOne(_) => ActionKind::GetOne,
            ActionParams::GetMany(_) => ActionKind::GetMany,
            ActionParams::GetManyReference(_) => ActionKind::GetManyReference,
            ActionParams::Create(_) => ActionKind::Create,
            ActionParams::Update(_) => ActionKind::Update,
            ActionParams::UpdateMany(_) => ActionKind::UpdateMany,
            ActionParams::Delete(_) => ActionKind::Delete,
            ActionParams::DeleteMany(_) => ActionKind::DeleteMany,
        }
    }

    /// Decodes untyped parameters for `kind`.
    pub fn from_json(kind: ActionKind, params: Value) -> Result<Self> {
        fn decode<T: serde::de::DeserializeOwned>(kind: ActionKind, params: Value) -> Result<T> {
            serde_json::from_value(params).map_err(|source| ProviderError::InvalidParams {
                kind: kind.to_string(),
                source,
            })
        }

        Ok(match kind {
            ActionKind::GetList => ActionParams::GetList(decode(kind, params)?),
            ActionKind::GetOne => ActionParams::GetOne(decode(kind, params)?),
            ActionKind::GetMany => ActionParams::GetMany(decode(kind, params)?),
            ActionKind::GetManyReference => ActionParams::GetManyReference(decode(kind, params)?),
            ActionKind::Create => ActionParams::Create(decode(kind, params)?),
            ActionKind::Update => ActionParams::Update(decode(kind, params)?),
            ActionKind::UpdateMany => ActionParams::UpdateMany(decode(kind, params)?),
            ActionKind::Delete => ActionParams::Delete(decode(kind, params)?),
            ActionKind::DeleteMany => ActionParams::DeleteMany(decode(kind, params)?),
        })
    }
}

// =============================================================================
// THE REQUEST
// =============================================================================

/// One action against one named resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionRequest {
    pub resource: String,
    pub params: ActionParams,
}

impl ActionRequest {
    pub fn new(resource: impl Into<String>, params: ActionParams) -> Self {
        Self {
            resource: resource.into(),
            params,
        }
    }

    /// Builds a request from a kind name and untyped parameters.
    ///
    /// Unknown kinds fail with [`ProviderError::UnsupportedAction`].
    pub fn from_parts(kind: &str, resource: impl Into<String>, params: Value) -> Result<Self> {
        let kind: ActionKind = kind.parse()?;
        Ok(Self::new(resource, ActionParams::from_json(kind, params)?))
    }

    pub fn kind(&self) -> ActionKind {
        self.params.kind()
    }

    pub fn get_list(resource: impl Into<String>, params: GetListParams) -> Self {
        Self::new(resource, ActionParams::GetList(params))
    }

    pub fn get_one(resource: impl Into<String>, id: impl Into<Value>) -> Self {
        Self::new(resource, ActionParams::GetOne(GetOneParams { id: id.into() }))
    }

    pub fn get_many<I, V>(resource: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let ids = ids.into_iter().map(Into::into).collect();
        Self::new(resource, ActionParams::GetMany(GetManyParams { ids }))
    }

    pub fn get_many_reference(resource: impl Into<String>, params: GetManyReferenceParams) -> Self {
        Self::new(resource, ActionParams::GetManyReference(params))
    }

    pub fn create(resource: impl Into<String>, data: Value) -> Self {
        Self::new(resource, ActionParams::Create(CreateParams { data }))
    }

    pub fn update(resource: impl Into<String>, id: impl Into<Value>, data: Value) -> Self {
        Self::new(
            resource,
            ActionParams::Update(UpdateParams {
                id: id.into(),
                data,
                previous_data: None,
            }),
        )
    }

    pub fn update_many<I, V>(resource: impl Into<String>, ids: I, data: Value) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let ids = ids.into_iter().map(Into::into).collect();
        Self::new(resource, ActionParams::UpdateMany(UpdateManyParams { ids, data }))
    }

    pub fn delete(resource: impl Into<String>, id: impl Into<Value>) -> Self {
        Self::new(
            resource,
            ActionParams::Delete(DeleteParams {
                id: id.into(),
                previous_data: None,
            }),
        )
    }

    pub fn delete_many<I, V>(resource: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let ids = ids.into_iter().map(Into::into).collect();
        Self::new(resource, ActionParams::DeleteMany(DeleteManyParams { ids }))
    }
}
