pub mod correction_calculator;
pub mod correction_service;
