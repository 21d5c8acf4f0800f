// Clients module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Client, ClientStatus, ClientType};
pub use repositories::client_repository::{ClientFilter, InMemoryClientRepository};
pub use services::client_service::ClientService;
