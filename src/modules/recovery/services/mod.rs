pub mod recovery_service;
