pub mod config;
pub mod error;
pub mod manuscript;
pub mod models;
pub mod navigation;
pub mod routing;
pub mod session;

pub use config::*;
pub use error::*;
pub use models::*;
pub use navigation::*;
pub use routing::*;
pub use session::*;
// Fixture accessors keep their module path: `shared_types::manuscript::*`.
