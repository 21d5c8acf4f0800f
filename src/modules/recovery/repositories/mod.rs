pub mod recovery_repository;
