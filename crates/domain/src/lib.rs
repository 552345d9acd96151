mod models;
pub mod time;

pub use models::{Comment, InsertReceipt, NewComment, ValidationError};
