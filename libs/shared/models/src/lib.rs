pub mod error;
pub mod money;
pub mod registration;
pub mod schedule;
pub mod user;

pub use error::AppError;
pub use registration::*;
pub use schedule::*;
pub use user::*;
