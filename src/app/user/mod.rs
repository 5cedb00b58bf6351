//! 用户管理

pub mod handler;
pub mod model;
pub mod store;

pub use handler::AppState;
pub use model::{User, UserPayload};
pub use store::{Addressing, UserId, UserStore};
