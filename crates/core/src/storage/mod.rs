mod error;
mod http_mapping;
mod init;
mod query;
mod timestamp;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use init::InitGate;
pub use query::{build_by_id_query, build_list_query, ListQuery};
pub use timestamp::to_protocol_timestamp;
pub use traits::{EventRepository, RaceRepository};
pub use types::{ListFilter, VisibleStatus};
