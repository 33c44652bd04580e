pub mod form;
pub mod registration;
pub mod validator;

pub use registration::{register, register_doctor, submit};
pub use validator::validate;
