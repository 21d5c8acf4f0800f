pub mod actor;
pub mod error_logger;
pub mod request_id;

pub use actor::Actor;
pub use error_logger::ErrorLogger;
pub use request_id::RequestId;
