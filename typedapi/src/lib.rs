//! Typed request builders for an Elasticsearch-compatible REST API.
//!
//! Each endpoint is a thin wrapper over the generic [`RequestBuilder`]
//! engine: typed setters record path parameters, query parameters, headers
//! and a JSON body, and the builder renders them into a
//! [`TransportRequest`]. Any [`Transport`] can send it; [`ReqwestTransport`]
//! is provided.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use typedapi::types::Property;
//! use typedapi::types::enums::DynamicMapping;
//! use typedapi::{ApiError, Client};
//!
//! let client = Client::connect("http://localhost:9200")?;
//!
//! let response = client
//!     .indices()
//!     .put_mapping("logs")
//!     .dynamic(DynamicMapping::Strict)
//!     .property("message", Property::text())
//!     .timeout(Duration::from_secs(30))
//!     .execute()
//!     .await;
//!
//! match response {
//!     Ok(ack) => assert!(ack.acknowledged),
//!     Err(ApiError::Server(err)) => eprintln!("{err}"),
//!     Err(other) => return Err(other.into()),
//! }
//! ```

mod builder;
mod client;
pub mod endpoint;
pub mod error;
pub mod indices;
mod method;
pub mod params;
mod response;
pub mod transport;
pub mod types;

pub use builder::{DeferredStep, RequestBuilder};
pub use client::Client;
pub use endpoint::{Endpoint, ParamSet, PathShape};
pub use error::{ApiError, BoxError, BuildError, ConfigError, TransportError};
pub use method::RestMethod;
pub use response::decode;
pub use transport::{
    COMPATIBLE_MEDIA_TYPE, Credentials, ReqwestTransport, ReqwestTransportBuilder, Transport,
    TransportRequest, TransportResponse,
};
