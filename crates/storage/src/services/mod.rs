pub mod form;
pub mod match_flow;
pub mod prize;
pub mod reliability;
pub mod stats;
