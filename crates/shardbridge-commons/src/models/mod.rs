//! Type-safe identifier wrappers and text spans.

mod column_name;
mod data_source_name;
mod index_name;
mod instance_id;
mod span;
mod table_name;

pub use column_name::ColumnName;
pub use data_source_name::DataSourceName;
pub use index_name::IndexName;
pub use instance_id::InstanceId;
pub use span::Span;
pub use table_name::TableName;
