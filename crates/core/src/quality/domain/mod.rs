pub mod brightness;
pub mod frontality;
pub mod geometry;
pub mod quality_gate;
pub mod thresholds;
pub mod verdict;
