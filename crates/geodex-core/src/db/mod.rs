//! Query pipeline over an immutable building snapshot:
//! validate -> filter -> aggregate -> order -> paginate.

pub mod aggregate;
pub mod cursor;
pub mod executor;
pub mod order;
pub mod predicate;
pub mod query;
pub mod response;
pub mod session;
pub mod source;

// re-exports
pub use query::{QueryError, QueryParams, ValidatedQuery, ValidationError};
pub use response::{Pagination, QueryResponse};
pub use session::{QueryEngine, run_query};
pub use source::StaticDataset;
