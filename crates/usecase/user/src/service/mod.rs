//! Service layer - business rules and use cases.

mod user_usecase;
pub mod validator;

pub use user_usecase::{UserManager, UserUseCase};
pub use validator::UserValidator;
