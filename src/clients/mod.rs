//! The translator ([`DataProvider`]) and typed wrappers bound to one resource.

pub mod data_provider;
pub mod request;
pub mod resource_client;
pub mod response;

pub use data_provider::*;
pub use request::*;
pub use resource_client::*;
pub use response::*;
