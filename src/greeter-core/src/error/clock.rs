use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("Failed to format the current time")]
    FormatTimeFailed(#[source] time::error::Format),
}
