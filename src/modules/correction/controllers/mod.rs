pub mod correction_controller;
