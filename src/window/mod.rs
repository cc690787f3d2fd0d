pub mod input;
pub mod throttle;
pub mod tracker;
