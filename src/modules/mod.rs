pub mod audit;
pub mod clients;
pub mod correction;
pub mod credits;
pub mod health;
pub mod recovery;
pub mod reports;
