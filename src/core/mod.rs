pub mod currency;
pub mod dates;
pub mod error;
pub mod listing;
pub mod notify;
pub mod session;
pub mod traits;

pub use error::{AppError, Result};
pub use notify::Notifier;
pub use session::ActiveClientSession;
pub use traits::Repository;
