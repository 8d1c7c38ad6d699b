//! Error macros for waypath

/// Macro for creating invalid edge errors
#[macro_export]
macro_rules! bail_edge {
    ($spec:expr, $reason:expr) => {
        return Err($crate::error::WaypathError::invalid_edge($spec, $reason))
    };
}
