//! The `fee` RPC method: request, permissive response decoding, and the
//! domain view of the four reported fee levels.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::rpc::XrplRpc;

pub const FEE_METHOD: &str = "fee";

// ==============================================================================
// Domain Types
// ==============================================================================

/// Current fee levels as reported by the node, in drops.
///
/// Values are kept exactly as the node sent them. A field the node omitted
/// is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeeDetails {
    pub base_fee: String,
    pub minimum_fee: String,
    pub median_fee: String,
    pub open_ledger_fee: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeKind {
    Base,
    Minimum,
    Median,
    OpenLedger,
}

impl FeeKind {
    /// All fee kinds in report order.
    pub const ALL: [FeeKind; 4] = [
        FeeKind::Base,
        FeeKind::Minimum,
        FeeKind::Median,
        FeeKind::OpenLedger,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FeeKind::Base => "Base Fee",
            FeeKind::Minimum => "Minimum Fee",
            FeeKind::Median => "Median Fee",
            FeeKind::OpenLedger => "Open Ledger Fee",
        }
    }
}

impl FeeDetails {
    pub fn drops(&self, kind: FeeKind) -> &str {
        match kind {
            FeeKind::Base => &self.base_fee,
            FeeKind::Minimum => &self.minimum_fee,
            FeeKind::Median => &self.median_fee,
            FeeKind::OpenLedger => &self.open_ledger_fee,
        }
    }
}

// ==============================================================================
// Wire Types
// ==============================================================================

// Every level is optional so that missing or null members decode to empty
// values instead of failing. Type mismatches still fail.
#[derive(Deserialize)]
struct FeeEnvelope {
    #[serde(default, deserialize_with = "object_or_null")]
    result: Option<FeeResult>,
}

#[derive(Deserialize)]
struct FeeResult {
    #[serde(default, deserialize_with = "object_or_null")]
    drops: Option<FeeDrops>,
}

#[derive(Deserialize)]
struct FeeDrops {
    base_fee: Option<String>,
    minimum_fee: Option<String>,
    median_fee: Option<String>,
    open_ledger_fee: Option<String>,
}

// Derived struct impls also accept a JSON array in field order; nested
// levels must be objects.
fn object_or_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        value @ serde_json::Value::Object(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(de::Error::custom),
        other => Err(de::Error::custom(format!(
            "expected a JSON object or null, found {other}"
        ))),
    }
}

// ==============================================================================
// Query
// ==============================================================================

/// Ask the node for its current fee levels.
pub async fn get_fee(rpc: &dyn XrplRpc) -> Result<FeeDetails, CoreError> {
    let body = rpc.call(FEE_METHOD, Vec::new()).await?;
    decode_fee_response(&body)
}

/// Decode a raw `fee` response body.
///
/// Anything absent under `result.drops` becomes an empty string. The body
/// must still be a JSON object, and fee values that are present must be
/// strings.
pub fn decode_fee_response(body: &[u8]) -> Result<FeeDetails, CoreError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| decoding_error(e, body))?;
    if !value.is_object() {
        return Err(decoding_error("top-level value is not a JSON object", body));
    }
    let envelope = FeeEnvelope::deserialize(value).map_err(|e| decoding_error(e, body))?;

    let Some(drops) = envelope.result.and_then(|r| r.drops) else {
        warn!("fee response has no result.drops object; all fee levels will read as zero");
        return Ok(FeeDetails::default());
    };

    let details = FeeDetails {
        base_fee: drops.base_fee.unwrap_or_default(),
        minimum_fee: drops.minimum_fee.unwrap_or_default(),
        median_fee: drops.median_fee.unwrap_or_default(),
        open_ledger_fee: drops.open_ledger_fee.unwrap_or_default(),
    };
    debug!(
        base_fee = %details.base_fee,
        minimum_fee = %details.minimum_fee,
        median_fee = %details.median_fee,
        open_ledger_fee = %details.open_ledger_fee,
        "decoded fee response"
    );
    Ok(details)
}

fn decoding_error(reason: impl std::fmt::Display, body: &[u8]) -> CoreError {
    CoreError::Decoding(format!("{reason}; body={}", String::from_utf8_lossy(body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::mock::MockRpc;

    const FEE_BODY: &str = r#"{
        "result": {
            "current_ledger_size": "14",
            "current_queue_size": "0",
            "drops": {
                "base_fee": "10",
                "median_fee": "5000",
                "minimum_fee": "10",
                "open_ledger_fee": "5000"
            },
            "expected_ledger_size": "24",
            "ledger_current_index": 26575101,
            "status": "success"
        }
    }"#;

    #[test]
    fn decodes_well_formed_response() {
        let details = decode_fee_response(FEE_BODY.as_bytes()).expect("should decode");
        assert_eq!(
            details,
            FeeDetails {
                base_fee: "10".into(),
                minimum_fee: "10".into(),
                median_fee: "5000".into(),
                open_ledger_fee: "5000".into(),
            }
        );
    }

    #[test]
    fn missing_drops_decodes_to_empty_fields() {
        let details =
            decode_fee_response(br#"{"result":{"status":"success"}}"#).expect("should decode");
        assert_eq!(details, FeeDetails::default());
    }

    #[test]
    fn missing_and_null_members_are_empty() {
        for body in [
            r#"{}"#,
            r#"{"result":null}"#,
            r#"{"result":{"drops":null}}"#,
        ] {
            let details = decode_fee_response(body.as_bytes()).expect("should decode");
            assert_eq!(details, FeeDetails::default(), "body {body}");
        }

        let details = decode_fee_response(br#"{"result":{"drops":{"median_fee":"7"}}}"#)
            .expect("should decode");
        assert_eq!(details.median_fee, "7");
        assert_eq!(details.base_fee, "");
    }

    #[test]
    fn non_json_body_is_decoding_error() {
        let err = decode_fee_response(b"<html>Bad Gateway</html>").expect_err("must fail");
        assert!(matches!(err, CoreError::Decoding(_)));
        assert!(err.to_string().contains("Bad Gateway"));
    }

    #[test]
    fn numeric_fee_field_is_decoding_error() {
        let err = decode_fee_response(br#"{"result":{"drops":{"base_fee":10}}}"#)
            .expect_err("must reject non-string fee");
        assert!(matches!(err, CoreError::Decoding(_)));
    }

    #[test]
    fn array_levels_are_decoding_errors() {
        for body in [
            r#"[{"drops":{"base_fee":"10"}}]"#,
            r#"{"result":[{"base_fee":"9"}]}"#,
            r#"{"result":{"drops":["10","10","5000","5000"]}}"#,
            r#"{"result":"success"}"#,
            "null",
        ] {
            let err = decode_fee_response(body.as_bytes()).expect_err("must reject non-object");
            assert!(matches!(err, CoreError::Decoding(_)), "body {body}: {err}");
        }
    }

    #[test]
    fn drops_lookup_follows_kind() {
        let details = decode_fee_response(FEE_BODY.as_bytes()).expect("should decode");
        let values: Vec<&str> = FeeKind::ALL.iter().map(|k| details.drops(*k)).collect();
        assert_eq!(values, ["10", "10", "5000", "5000"]);
        assert_eq!(FeeKind::OpenLedger.label(), "Open Ledger Fee");
    }

    #[tokio::test]
    async fn get_fee_calls_fee_method_without_params() {
        let rpc = MockRpc::with_body(FEE_BODY);
        let details = get_fee(&rpc).await.expect("fee query should succeed");
        assert_eq!(details.open_ledger_fee, "5000");
        assert_eq!(rpc.calls(), vec![("fee".to_owned(), Vec::new())]);
    }

    #[tokio::test]
    async fn get_fee_propagates_remote_error() {
        let rpc = MockRpc::with_status(500);
        let err = get_fee(&rpc).await.expect_err("must fail");
        assert!(matches!(err, CoreError::Remote { status: 500 }));
    }
}
