pub mod diagnosis;
pub mod environment;
pub mod error;
pub mod introduction;
pub mod logger;
