pub mod replay_detection_source;
