//! Serde helpers for query encoding and response decoding.
//!
//! When the `tracing` feature is enabled, decoding also logs any fields the response types do
//! not capture, which is usually the first sign that the API has changed shape.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;
use serde::de::DeserializeOwned;

/// Serializes an instant as RFC 3339 with whole seconds and a `Z` suffix,
/// e.g. `2024-01-02T03:04:05Z`.
#[expect(clippy::ref_option, reason = "Need an explicit reference for serde")]
pub(crate) fn rfc3339_seconds<S: Serializer>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(instant) => {
            serializer.serialize_str(&instant.to_rfc3339_opts(SecondsFormat::Secs, true))
        }
        None => serializer.serialize_none(),
    }
}

#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "skip_serializing_if passes a reference"
)]
pub(crate) fn is_zero(value: &i32) -> bool {
    *value == 0
}

/// Deserialize a JSON body, logging unknown fields.
///
/// Unknown fields never fail decoding. A body that does not fit `T` is logged together with
/// the path that failed before the error is returned.
#[cfg(feature = "tracing")]
pub(crate) fn deserialize_with_warnings<T: DeserializeOwned>(body: &str) -> crate::Result<T> {
    use std::any::type_name;

    tracing::trace!(type_name = %type_name::<T>(), body = %body, "deserializing JSON");

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = &mut serde_json::Deserializer::from_str(body);

    let result: T = serde_ignored::deserialize(&mut *deserializer, |path| {
        unknown_paths.push(path.to_string());
    })
    .and_then(|value| deserializer.end().map(|()| value))
    .inspect_err(|_| {
        let deserializer = &mut serde_json::Deserializer::from_str(body);
        let path_result: Result<T, _> = serde_path_to_error::deserialize(deserializer);
        if let Err(path_err) = path_result {
            tracing::error!(
                type_name = %type_name::<T>(),
                path = %path_err.path(),
                error = %path_err.inner(),
                "deserialization failed"
            );
        }
    })?;

    for path in unknown_paths {
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            "unknown field in API response"
        );
    }

    Ok(result)
}

/// Pass-through deserialization when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub(crate) fn deserialize_with_warnings<T: DeserializeOwned>(body: &str) -> crate::Result<T> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::error::Kind;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Envelope {
        status: String,
        #[serde(default)]
        count: Option<i32>,
    }

    #[derive(Serialize)]
    struct Dated {
        #[serde(serialize_with = "rfc3339_seconds")]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn rfc3339_seconds_uses_z_suffix() {
        let dated = Dated {
            at: Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
        };

        assert_eq!(
            serde_json::to_string(&dated).unwrap(),
            r#"{"at":"2024-01-02T03:04:05Z"}"#
        );
    }

    #[test]
    fn rfc3339_seconds_none_is_null() {
        let dated = Dated { at: None };

        assert_eq!(serde_json::to_string(&dated).unwrap(), r#"{"at":null}"#);
    }

    #[test]
    fn is_zero_only_for_zero() {
        assert!(is_zero(&0), "0 is zero");
        assert!(!is_zero(&-1), "-1 is not zero");
        assert!(!is_zero(&20), "20 is not zero");
    }

    #[test]
    fn deserialize_known_fields_only() {
        let result: Envelope =
            deserialize_with_warnings(r#"{"status":"ok","count":3}"#).expect("should decode");

        assert_eq!(
            result,
            Envelope {
                status: "ok".to_owned(),
                count: Some(3),
            }
        );
    }

    #[test]
    fn deserialize_with_unknown_fields() {
        let result: Envelope = deserialize_with_warnings(r#"{"status":"ok","extra":[1,2]}"#)
            .expect("unknown fields should not fail");

        assert_eq!(result.status, "ok");
        assert_eq!(result.count, None);
    }

    #[test]
    fn deserialize_missing_required_field_fails() {
        let error = deserialize_with_warnings::<Envelope>(r#"{"count":3}"#).unwrap_err();

        assert_eq!(error.kind(), Kind::Decode);
    }

    #[test]
    fn deserialize_invalid_json_fails() {
        let error = deserialize_with_warnings::<Envelope>("<html>oops</html>").unwrap_err();

        assert_eq!(error.kind(), Kind::Decode);
    }

    /// Captures tracing output to check that unknown fields are reported.
    #[cfg(feature = "tracing")]
    #[test]
    fn warning_is_emitted_for_unknown_fields() {
        use std::io;
        use std::sync::{Arc, Mutex};

        use tracing_subscriber::fmt::MakeWriter;

        #[derive(Clone, Default)]
        struct Buffer(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Buffer {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        impl<'writer> MakeWriter<'writer> for Buffer {
            type Writer = Buffer;

            fn make_writer(&'writer self) -> Self::Writer {
                self.clone()
            }
        }

        let buffer = Buffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let _: Envelope =
                deserialize_with_warnings(r#"{"status":"ok","surprise":true}"#).unwrap();
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(
            output.contains("unknown field in API response"),
            "missing warning in {output}"
        );
        assert!(output.contains("surprise"), "missing field name in {output}");
    }
}
