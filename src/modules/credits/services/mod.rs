pub mod credit_service;
