//! # Request Query Builder
//!
//! Serializes filters, sorting and pagination into the query string grammar of
//! the CRUD REST convention:
//!
//! ```text
//! filter[0]=title||$contL||hello&limit=10&page=1&sort[0]=id,DESC&offset=0
//! ```
//!
//! (shown unencoded). Parameters appear in the order they were first set, and
//! list parameters (`filter`, `sort`) follow the configured [`ArrayFormat`].

use crate::error::{ProviderError, Result};
use crate::query::QueryFilter;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// =============================================================================
// OPTIONS
// =============================================================================

/// How list parameters are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayFormat {
    /// `filter[0]=a&filter[1]=b`
    #[default]
    Indices,
    /// `filter[]=a&filter[]=b`
    Brackets,
    /// `filter=a&filter=b`
    Repeat,
}

/// Query parameter names used on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamNames {
    pub filter: String,
    pub limit: String,
    pub offset: String,
    pub page: String,
    pub sort: String,
}

impl Default for ParamNames {
    fn default() -> Self {
        Self {
            filter: "filter".into(),
            limit: "limit".into(),
            offset: "offset".into(),
            page: "page".into(),
            sort: "sort".into(),
        }
    }
}

/// Grammar settings for [`RequestQueryBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryBuilderOptions {
    /// Separates field, operator and value inside a condition.
    pub delim: String,
    /// Joins list values and the field/order pair of a sort.
    pub delim_str: String,
    pub param_names: ParamNames,
    pub array_format: ArrayFormat,
    /// Percent-encode keys and values.
    pub encode: bool,
}

impl Default for QueryBuilderOptions {
    fn default() -> Self {
        Self {
            delim: "||".into(),
            delim_str: ",".into(),
            param_names: ParamNames::default(),
            array_format: ArrayFormat::default(),
            encode: true,
        }
    }
}

// =============================================================================
// SORTING
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("ASC"),
            SortOrder::Desc => f.write_str("DESC"),
        }
    }
}

/// A sort clause, serialized as `field,ORDER`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySort {
    pub field: String,
    pub order: SortOrder,
}

impl QuerySort {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }
}

// =============================================================================
// THE BUILDER
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Param {
    Filter,
    Limit,
    Offset,
    Page,
    Sort,
}

/// Fluent builder for CRUD-convention query strings.
///
/// ```rust
/// use crud_provider::query::{CondOperator, QueryFilter, RequestQueryBuilder};
///
/// let query = RequestQueryBuilder::create()
///     .set_filter([QueryFilter::new("id", CondOperator::In, "1,2")])
///     .unwrap()
///     .set_limit(10)
///     .query();
///
/// assert_eq!(query, "filter%5B0%5D=id%7C%7C%24in%7C%7C1%2C2&limit=10");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestQueryBuilder {
    options: QueryBuilderOptions,
    order: Vec<Param>,
    filters: Vec<String>,
    sorts: Vec<String>,
    limit: Option<u64>,
    offset: Option<u64>,
    page: Option<u64>,
}

impl RequestQueryBuilder {
    /// An empty builder with the default grammar.
    pub fn create() -> Self {
        Self::default()
    }

    /// An empty builder with a custom grammar.
    pub fn with_options(options: QueryBuilderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Appends filter conditions. The `filter` parameter is registered even
    /// when `filters` is empty.
    pub fn set_filter(mut self, filters: impl IntoIterator<Item = QueryFilter>) -> Result<Self> {
        let mut conditions = Vec::new();
        for filter in filters {
            conditions.push(self.condition(&filter)?);
        }
        self.touch(Param::Filter);
        self.filters.extend(conditions);
        Ok(self)
    }

    pub fn set_limit(mut self, limit: u64) -> Self {
        self.touch(Param::Limit);
        self.limit = Some(limit);
        self
    }

    pub fn set_page(mut self, page: u64) -> Self {
        self.touch(Param::Page);
        self.page = Some(page);
        self
    }

    pub fn set_offset(mut self, offset: u64) -> Self {
        self.touch(Param::Offset);
        self.offset = Some(offset);
        self
    }

    /// Appends a sort clause. `None` leaves the builder untouched.
    pub fn sort_by(mut self, sort: impl Into<Option<QuerySort>>) -> Self {
        if let Some(sort) = sort.into() {
            let clause = format!("{}{}{}", sort.field, self.options.delim_str, sort.order);
            self.touch(Param::Sort);
            self.sorts.push(clause);
        }
        self
    }

    /// Renders the query string, without the leading `?`.
    pub fn query(&self) -> String {
        let mut pairs = Vec::new();
        for param in &self.order {
            let name = self.name(*param);
            match param {
                Param::Filter => self.push_list(&mut pairs, name, &self.filters),
                Param::Sort => self.push_list(&mut pairs, name, &self.sorts),
                Param::Limit => self.push_number(&mut pairs, name, self.limit),
                Param::Offset => self.push_number(&mut pairs, name, self.offset),
                Param::Page => self.push_number(&mut pairs, name, self.page),
            }
        }
        pairs.join("&")
    }

    fn push_list(&self, pairs: &mut Vec<String>, name: &str, items: &[String]) {
        for (index, item) in items.iter().enumerate() {
            let key = match self.options.array_format {
                ArrayFormat::Indices => format!("{name}[{index}]"),
                ArrayFormat::Brackets => format!("{name}[]"),
                ArrayFormat::Repeat => name.to_string(),
            };
            pairs.push(self.pair(&key, item));
        }
    }

    fn push_number(&self, pairs: &mut Vec<String>, name: &str, value: Option<u64>) {
        if let Some(n) = value {
            pairs.push(self.pair(name, &n.to_string()));
        }
    }

    fn condition(&self, filter: &QueryFilter) -> Result<String> {
        if filter.field.is_empty() {
            return Err(ProviderError::InvalidQuery(
                "Invalid field type in filter condition. String expected".into(),
            ));
        }
        let delim = &self.options.delim;
        let mut condition = format!("{}{delim}{}", filter.field, filter.operator);
        if let Some(value) = self.render_value(&filter.value) {
            condition.push_str(delim);
            condition.push_str(&value);
        }
        Ok(condition)
    }

    fn render_value(&self, value: &Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::Array(items) => Some(
                items
                    .iter()
                    .map(scalar_to_string)
                    .collect::<Vec<_>>()
                    .join(&self.options.delim_str),
            ),
            other => Some(scalar_to_string(other)),
        }
    }

    fn touch(&mut self, param: Param) {
        if !self.order.contains(&param) {
            self.order.push(param);
        }
    }

    fn name(&self, param: Param) -> &str {
        let names = &self.options.param_names;
        match param {
            Param::Filter => &names.filter,
            Param::Limit => &names.limit,
            Param::Offset => &names.offset,
            Param::Page => &names.page,
            Param::Sort => &names.sort,
        }
    }

    fn pair(&self, key: &str, value: &str) -> String {
        if self.options.encode {
            format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
        } else {
            format!("{key}={value}")
        }
    }
}

/// Text form of a JSON value inside a condition: strings are written raw,
/// everything else as its JSON text (`1.0` stays `1.0`, objects stay objects).
pub(crate) fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
