//! Error macros for graphlab

/// Macro for returning an invalid graph error
#[macro_export]
macro_rules! bail_invalid_graph {
    ($($arg:tt)*) => {
        return Err($crate::error::GraphLabError::invalid_graph(format!($($arg)*)))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphLabError::UsageError($msg.to_string()))
    };
}
