// src/common.rs

pub mod error;
pub mod extract;
pub mod response;
pub mod validate;

pub use error::AppError;
pub use extract::AppJson;
pub use response::ApiResponse;
