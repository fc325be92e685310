pub mod capture_trace;
pub mod trace_frame_source;
