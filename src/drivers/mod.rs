pub mod button;
pub mod indicator;
pub mod timer;
