//! Client helpers for the scanner endpoints.

use crate::{
    client::{ApiClient, AppError},
    features::scan::types::{HashScanRequest, IpScanRequest, ScanResponse},
};

/// Submits an IP address for reputation scanning.
///
/// # Errors
/// Propagates transport and HTTP errors unchanged.
pub async fn scan_ip(api: &ApiClient, ip_address: &str) -> Result<ScanResponse, AppError> {
    api.post_json("/scan/ip", &IpScanRequest { ip_address }).await
}

/// Submits an MD5, SHA-1 or SHA-256 file hash.
///
/// # Errors
/// Propagates transport and HTTP errors unchanged.
pub async fn scan_hash(api: &ApiClient, file_hash: &str) -> Result<ScanResponse, AppError> {
    api.post_json("/scan/hash", &HashScanRequest { file_hash }).await
}

/// # Errors
/// Propagates transport and HTTP errors unchanged.
pub async fn get_scan(api: &ApiClient, scan_id: i64) -> Result<ScanResponse, AppError> {
    api.get_json(&format!("/scan/{scan_id}")).await
}

#[cfg(test)]
mod tests {
    use super::{get_scan, scan_hash, scan_ip};
    use crate::client::{ApiClient, ClientConfig};
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&ClientConfig::new(&server.uri()).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn scan_ip_posts_address_and_returns_response_unmodified() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        let verdict = json!({
            "is_malicious": false,
            "detection_count": 0,
            "total_engines": 94,
            "threat_names": [],
            "whois": {"asn": 15169, "owner": "GOOGLE"}
        });
        Mock::given(method("POST"))
            .and(path("/api/v1/scan/ip"))
            .and(body_json(json!({"ip_address": "8.8.8.8"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "scan_id": 12,
                "scan_type": "ip",
                "target": "8.8.8.8",
                "status": "completed",
                "created_at": "2024-05-01T10:00:00+00:00",
                "result": verdict.clone(),
                "error": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = scan_ip(&client_for(&server), "8.8.8.8").await.unwrap();
        assert_eq!(response.scan_id, 12);
        assert_eq!(response.target, "8.8.8.8");
        assert_eq!(response.created_at, "2024-05-01T10:00:00+00:00");
        assert_eq!(response.result, Some(verdict));
        assert_eq!(response.error, None);
    }

    #[tokio::test]
    async fn scan_hash_posts_hash_verbatim() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        let hash = "44D88612FEA8A8F36DE82E1278ABB02F";
        Mock::given(method("POST"))
            .and(path("/api/v1/scan/hash"))
            .and(body_json(json!({"file_hash": hash})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "scan_id": 13,
                "scan_type": "hash",
                "target": hash.to_lowercase(),
                "status": "failed",
                "created_at": "2024-05-01T10:05:00+00:00",
                "error": "VirusTotal API error"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = scan_hash(&client_for(&server), hash).await.unwrap();
        assert_eq!(response.status, "failed");
        assert_eq!(response.result, None);
        assert_eq!(response.error.as_deref(), Some("VirusTotal API error"));
    }

    #[tokio::test]
    async fn get_scan_uses_id_in_path() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/scan/77"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Scan not found"})))
            .mount(&server)
            .await;

        let err = get_scan(&client_for(&server), 77).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
