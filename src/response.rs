use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use crate::run;

/// Message reported when evaluation panics instead of returning an error.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal error while running the program.";

/// The payload returned for one submitted program.
///
/// Serializes as `{"ok":true,"output":"..."}` on success and
/// `{"ok":false,"error":"..."}` on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResponse {
    /// Whether the program ran to completion.
    pub ok:     bool,
    /// Printed output, present on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Error message, present on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error:  Option<String>,
}

impl RunResponse {
    /// A successful run with its output.
    #[must_use]
    pub const fn success(output: String) -> Self {
        Self { ok:     true,
               output: Some(output),
               error:  None, }
    }

    /// A failed run with its message.
    #[must_use]
    pub const fn failure(error: String) -> Self {
        Self { ok:     false,
               output: None,
               error:  Some(error), }
    }
}

/// Runs a program and packages the result for a transport layer.
///
/// Output printed before a failure is not included in the payload. A panic
/// inside the interpreter becomes a failure carrying
/// [`INTERNAL_ERROR_MESSAGE`], never a stack trace.
///
/// # Example
/// ```
/// use nexlang::response::respond;
///
/// let json = serde_json::to_string(&respond("lang(1 + 1)")).unwrap();
/// assert_eq!(json, r#"{"ok":true,"output":"2"}"#);
///
/// let json = serde_json::to_string(&respond("lang(x)")).unwrap();
/// assert_eq!(json, r#"{"ok":false,"error":"Error on line 1: Variable not defined: 'x'."}"#);
/// ```
#[must_use]
pub fn respond(source: &str) -> RunResponse {
    match panic::catch_unwind(AssertUnwindSafe(|| run(source))) {
        Ok(Ok(output)) => RunResponse::success(output),
        Ok(Err(failure)) => RunResponse::failure(failure.to_string()),
        Err(_) => {
            tracing::error!("interpreter panicked");
            RunResponse::failure(INTERNAL_ERROR_MESSAGE.to_string())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_output_is_still_serialized() {
        let json = serde_json::to_string(&respond("nex x = 1")).unwrap();
        assert_eq!(json, r#"{"ok":true,"output":""}"#);
    }

    #[test]
    fn parse_failures_use_failure_shape() {
        let response = respond("nex = 1");
        assert!(!response.ok);
        assert_eq!(response.output, None);
        assert_eq!(response.error.as_deref(),
                   Some("Error on line 1: Expected identifier, found '='."));
    }

    #[test]
    fn payload_round_trips_through_json() {
        let response = RunResponse::failure("boom".into());
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(serde_json::from_str::<RunResponse>(&json).unwrap(), response);
    }
}
