pub mod catalog;
pub mod contact;

pub use crate::domain::model::{Category, Project};
pub use crate::domain::ports::ContentProvider;
pub use crate::utils::error::Result;
