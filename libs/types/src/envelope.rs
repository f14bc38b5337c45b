//! Response envelope
//!
//! Every response body is one of
//!
//! ```json
//! { "success": true,  "data": <T> }
//! { "success": false, "message": "<fixed string>" }
//! ```
//!
//! with `success` always serialized first.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::errors::ErrorKind;

#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Success { data: T },
    Failure { message: &'static str },
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Envelope::Success { data }
    }

    pub fn fail(kind: ErrorKind) -> Self {
        Envelope::Failure {
            message: kind.message(),
        }
    }

    /// Status that accompanies this envelope on the wire
    pub fn from_result(result: Result<T, ErrorKind>) -> (u16, Self) {
        match result {
            Ok(data) => (200, Envelope::ok(data)),
            Err(kind) => (kind.status_code(), Envelope::fail(kind)),
        }
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Envelope", 2)?;
        match self {
            Envelope::Success { data } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            Envelope::Failure { message } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("message", message)?;
            }
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_shape() {
        let json = serde_json::to_string(&Envelope::ok(999_000i64)).unwrap();
        assert_eq!(json, r#"{"success":true,"data":999000}"#);
    }

    #[test]
    fn test_failure_shape() {
        let failure = Envelope::<()>::fail(ErrorKind::UnsupportedOperation);
        let json = serde_json::to_string(&failure).unwrap();
        assert_eq!(json, r#"{"success":false,"message":"Invalid request type"}"#);
    }

    #[test]
    fn test_from_result_derives_status_from_kind() {
        let (status, env) = Envelope::<i64>::from_result(Err(ErrorKind::InvalidAmount));
        assert_eq!(status, 400);
        assert_eq!(env, Envelope::fail(ErrorKind::InvalidAmount));

        let (status, env) = Envelope::from_result(Ok(1i64));
        assert_eq!(status, 200);
        assert_eq!(env, Envelope::Success { data: 1 });

        let (status, _) = Envelope::<i64>::from_result(Err(ErrorKind::InternalError));
        assert_eq!(status, 500);
    }
}
