pub mod recovery_controller;
