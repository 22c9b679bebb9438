use serde::{Deserialize, Serialize};

/// Query parameters for `GET /history`; unset fields are not sent.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// `ip` or `hash`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_type: Option<String>,
    /// `pending`, `processing`, `completed` or `failed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanHistoryItem {
    pub id: i64,
    pub scan_type: String,
    pub target: String,
    pub status: String,
    #[serde(default)]
    pub is_malicious: Option<bool>,
    #[serde(default)]
    pub detection_count: Option<i64>,
    pub created_at: String,
    #[serde(default)]
    pub completed_at: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryResponse {
    pub total: i64,
    pub scans: Vec<ScanHistoryItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanStats {
    pub total_scans: i64,
    pub ip_scans: i64,
    pub hash_scans: i64,
    pub malicious_found: i64,
    pub pending_scans: i64,
    pub completed_scans: i64,
    pub failed_scans: i64,
    pub scans_today: i64,
    pub quota_remaining: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyScanCount {
    pub date: String,
    pub count: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_scans: i64,
    pub malicious_count: i64,
    pub clean_count: i64,
    pub suspicious_count: i64,
    pub daily_scans: Vec<DailyScanCount>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteScanResponse {
    pub message: String,
    pub scan_id: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClearHistoryResponse {
    pub message: String,
    pub deleted_count: i64,
}
