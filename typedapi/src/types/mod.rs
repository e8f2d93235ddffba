//! Data types shared across endpoints.

mod aliases;
pub mod enums;
mod error;
mod mapping;
mod shards;

pub use aliases::{Fields, FieldsBuilder, Metadata, MetadataBuilder, SortResults, SortResultsBuilder};
pub use error::{ElasticsearchError, ErrorCause};
pub use mapping::{
    DynamicTemplate, FieldNamesField, Property, RoutingField, RuntimeField, RuntimeFields, Script,
    SourceField, TypeMapping,
};
pub use shards::{ShardFailure, ShardStatistics};
