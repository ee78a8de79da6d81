//! Error macros for stepgraph

/// Macro for creating invalid request errors
#[macro_export]
macro_rules! bail_request {
    ($field:expr, $reason:expr) => {
        return Err($crate::error::StepgraphError::invalid_request(
            $field, $reason,
        ))
    };
}

/// Macro for creating malformed graph errors
#[macro_export]
macro_rules! bail_malformed {
    ($field:expr, $reason:expr) => {
        return Err($crate::error::StepgraphError::malformed_graph(
            $field, $reason,
        ))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::StepgraphError::UsageError($msg.to_string()))
    };
}
