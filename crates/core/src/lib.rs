pub mod detection;
pub mod quality;
pub mod session;
pub mod shared;
pub mod trace;
