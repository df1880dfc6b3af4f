//! Service wrappers against a mocked backend

#![cfg(not(target_arch = "wasm32"))]

use alshifa_api::AuthenticatedClient;
use alshifa_api::types::{KycStatus, OrganizationProfileUpdate, ScheduleConfig};
use alshifa_frontend_common::services::{
    DoctorService, KycService, KycSubject, OrganizationService,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UNREACHABLE: &str = "Unable to reach the server. Please try again later.";

fn client(server: &MockServer, token: &str) -> AuthenticatedClient {
    AuthenticatedClient::new(server.uri(), token).unwrap()
}

#[tokio::test]
async fn test_doctor_queue_follows_status_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/kyc/doctors"))
        .and(query_param("status", "approved"))
        .and(header("authorization", "Bearer jwt-admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "d-7",
            "user_id": "u-7",
            "name": "Dr. Sana Mirza",
            "email": "sana@alshifa.in",
            "specialization": "Periodontist",
            "license_number": "DCI-2207",
            "hospital": "Al-Shifa Gachibowli",
            "is_verified": true
        }])))
        .mount(&mock_server)
        .await;

    let service = KycService::with_client(client(&mock_server, "jwt-admin"));
    let rows = service.doctor_queue(KycStatus::Approved).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "d-7");
    assert!(rows[0].is_verified);
}

#[tokio::test]
async fn test_organization_queue_forbidden_for_non_admins() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/kyc/organizations"))
        .and(query_param("status", "pending"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"detail": "Admin only"})))
        .mount(&mock_server)
        .await;

    let service = KycService::with_client(client(&mock_server, "jwt-doctor"));
    let err = service
        .organization_queue(KycStatus::Pending)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        "Your session does not allow this action. Please sign in as an administrator."
    );
}

#[tokio::test]
async fn test_approve_reports_backend_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/admin/kyc/doctors/d-1/approve"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"detail": "Doctor is already verified"})),
        )
        .mount(&mock_server)
        .await;

    let service = KycService::with_client(client(&mock_server, "jwt-admin"));
    let err = service.approve(KycSubject::Doctor, "d-1").await.unwrap_err();
    assert_eq!(err, "Action failed: Doctor is already verified");
}

#[tokio::test]
async fn test_html_reply_is_not_reported_as_unreachable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/admin/kyc/organizations/h-2/reject"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string("<!doctype html><title>Gateway</title>"),
        )
        .mount(&mock_server)
        .await;

    let service = KycService::with_client(client(&mock_server, "jwt-admin"));
    let err = service
        .reject(KycSubject::Organization, "h-2", "Expired license")
        .await
        .unwrap_err();
    assert_ne!(err, UNREACHABLE);
    assert!(err.starts_with("Action failed"), "{err}");
}

#[tokio::test]
async fn test_closed_port_is_unreachable() {
    let service =
        KycService::with_client(AuthenticatedClient::new("http://127.0.0.1:9", "jwt").unwrap());
    let err = service.doctor_queue(KycStatus::Pending).await.unwrap_err();
    assert_eq!(err, UNREACHABLE);
}

#[tokio::test]
async fn test_schedule_save_returns_confirmation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/doctor/schedule-config"))
        .and(body_partial_json(json!({"slot_duration": 40, "work_end": "15:00"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": "Schedule configuration updated successfully"
        })))
        .mount(&mock_server)
        .await;

    let service = DoctorService::with_client(client(&mock_server, "jwt-doctor"));
    let config = ScheduleConfig {
        slot_duration: 40,
        work_end: "15:00".to_string(),
        ..ScheduleConfig::default()
    };
    let message = service.save_schedule(&config).await.unwrap();
    assert_eq!(message, "Schedule configuration updated successfully");
}

#[tokio::test]
async fn test_profile_update_surfaces_backend_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/organization/profile"))
        .and(body_partial_json(json!({"address": "12 Charminar Road"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Profile updated successfully",
            "hospital_id": "h-1"
        })))
        .mount(&mock_server)
        .await;

    let service = OrganizationService::with_client(client(&mock_server, "jwt-org"));
    let update = OrganizationProfileUpdate {
        address: Some("12 Charminar Road".to_string()),
        ..Default::default()
    };
    let message = service.update_profile(&update).await.unwrap();
    assert_eq!(message, "Profile updated successfully");
}

#[tokio::test]
async fn test_profile_update_without_hospital() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/organization/profile"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Hospital not found"})),
        )
        .mount(&mock_server)
        .await;

    let service = OrganizationService::with_client(client(&mock_server, "jwt-org"));
    let err = service
        .update_profile(&OrganizationProfileUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err, "This record no longer exists.");
}
