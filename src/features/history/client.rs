//! Client helpers for scan history endpoints.

use crate::{
    client::{ApiClient, AppError},
    features::history::types::{
        ClearHistoryResponse, DashboardStats, DeleteScanResponse, HistoryQuery, HistoryResponse,
        ScanStats,
    },
};

/// Lists past scans, newest first, filtered by `query`.
///
/// # Errors
/// Propagates transport and HTTP errors unchanged.
pub async fn get_history(
    api: &ApiClient,
    query: &HistoryQuery,
) -> Result<HistoryResponse, AppError> {
    api.get_json_with_query("/history", query).await
}

/// Per-type and per-status counters plus today's remaining quota.
///
/// # Errors
/// Propagates transport and HTTP errors unchanged.
pub async fn get_scan_stats(api: &ApiClient) -> Result<ScanStats, AppError> {
    api.get_json("/history/stats").await
}

/// Verdict breakdown and daily counts for the dashboard charts.
///
/// # Errors
/// Propagates transport and HTTP errors unchanged.
pub async fn get_stats(api: &ApiClient) -> Result<DashboardStats, AppError> {
    api.get_json("/history/dashboard-stats").await
}

/// # Errors
/// Propagates transport and HTTP errors unchanged.
pub async fn delete_scan(api: &ApiClient, scan_id: i64) -> Result<DeleteScanResponse, AppError> {
    api.delete_json(&format!("/history/{scan_id}")).await
}

/// Deletes every scan of the current user.
///
/// # Errors
/// Propagates transport and HTTP errors unchanged.
pub async fn clear_all(api: &ApiClient) -> Result<ClearHistoryResponse, AppError> {
    api.delete_json("/history/clear/all").await
}
