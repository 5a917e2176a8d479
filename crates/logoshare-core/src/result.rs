use crate::error::LogoshareError;

pub type LogoshareResult<T> = Result<T, LogoshareError>;
