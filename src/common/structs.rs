/// Boot-time error carrying a plain message.
pub mod custom_error;
