pub mod audit_controller;
