/// Failure to build an identity from user input.
pub mod identity_error;
