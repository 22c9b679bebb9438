use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize)]
pub struct IpScanRequest<'a> {
    pub ip_address: &'a str,
}

#[derive(Clone, Debug, Serialize)]
pub struct HashScanRequest<'a> {
    pub file_hash: &'a str,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
/// Scan record as returned by the API. `result` is the raw engine verdict and
/// is kept as-is.
pub struct ScanResponse {
    pub scan_id: i64,
    pub scan_type: String,
    pub target: String,
    pub status: String,
    pub created_at: String,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}
