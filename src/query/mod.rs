//! Filter composition and query-string building for the CRUD REST convention.
//!
//! - [`compose_filter`] turns a nested UI filter into ordered [`QueryFilter`]s.
//! - [`RequestQueryBuilder`] serializes filters, sorts and pagination.
//! - [`CondOperator`] is the operator vocabulary.

pub mod builder;
pub mod filter;
pub mod operator;

pub use builder::*;
pub use filter::*;
pub use operator::*;
