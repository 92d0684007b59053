pub mod config;
pub mod error;
pub mod report;
pub mod session;

pub use config::*;
pub use error::*;
pub use report::*;
pub use session::*;
