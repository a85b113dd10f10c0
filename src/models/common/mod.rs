pub mod pagination;
pub mod response;
pub mod serde_helpers;

pub use pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use response::ApiResponse;
