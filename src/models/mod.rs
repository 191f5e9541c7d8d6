pub mod assignments;
pub mod classes;
pub mod common;
pub mod grades;
pub mod oss;

pub use common::response::ApiResponse;
