pub mod assessments;
pub mod common;
pub mod memberships;
pub mod reviews;
pub mod submissions;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
