pub mod reminder;

#[cfg(target_os = "espidf")]
pub mod button;

#[cfg(not(target_os = "espidf"))]
pub mod console;
