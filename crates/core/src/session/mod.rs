pub mod cadence_controller;
pub mod capture_session;
pub mod frame_source;
pub mod session_config;
pub mod session_logger;
