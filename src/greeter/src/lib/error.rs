/// The type to represent greeter results.
pub type GreeterResult<T = ()> = anyhow::Result<T>;
