pub mod client_service;
