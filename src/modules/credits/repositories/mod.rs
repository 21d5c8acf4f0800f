pub mod credit_repository;
