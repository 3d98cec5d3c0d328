pub mod error;
pub mod routes;
pub mod store;

pub use error::TaskError;
pub use routes::app;
pub use store::{Documents, TaskStore};
