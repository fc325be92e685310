pub mod detection;
pub mod detection_source;
