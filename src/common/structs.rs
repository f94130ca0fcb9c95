/// Generic error carrying a human readable message.
pub mod custom_error;
