pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod navigation;
pub mod requests;

pub use config::*;
pub use error::*;
pub use forms::*;
pub use models::*;
pub use navigation::*;
pub use requests::*;
