//! HTTP behaviour that is decided before any query runs: routing,
//! authentication, admin checks, and request validation.

mod helpers;

use http::StatusCode;
use serde_json::json;

use devwant_core::messages;
use devwant_entity::user::UserRole;
use helpers::TestApp;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::without_database();
    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.data()["status"], "ok");
}

#[tokio::test]
async fn test_detailed_health_reports_database_outage() {
    let app = TestApp::without_database();
    let response = app.request("GET", "/api/health/detailed", None, None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.data()["status"], "degraded");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = TestApp::without_database();
    let response = app.request("GET", "/api/nonexistent", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_providers_lists_registered_clients() {
    let app = TestApp::without_database();
    let response = app.request("GET", "/api/auth/providers", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["providers"], json!(["kakao"]));
}

#[tokio::test]
async fn test_authorize_issues_state() {
    let app = TestApp::without_database();
    let response = app
        .request("GET", "/api/auth/kakao/authorize", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let state = response.data()["state"].as_str().unwrap();
    assert!(!state.is_empty());
    assert!(
        response.data()["url"]
            .as_str()
            .unwrap()
            .ends_with(&format!("state={state}"))
    );
}

#[tokio::test]
async fn test_disabled_and_unknown_providers_are_rejected() {
    let app = TestApp::without_database();

    let disabled = app
        .request("GET", "/api/auth/google/authorize", None, None)
        .await;
    assert_eq!(disabled.status, StatusCode::BAD_REQUEST);
    assert_eq!(disabled.message(), messages::PROVIDER_DISABLED);

    let unknown = app
        .request("GET", "/api/auth/myspace/authorize", None, None)
        .await;
    assert_eq!(unknown.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown.body["error"], "VALIDATION_ERROR");
    assert_eq!(unknown.message(), messages::UNSUPPORTED_PROVIDER);
}

#[tokio::test]
async fn test_callback_with_unknown_state_is_401() {
    let app = TestApp::without_database();
    let response = app
        .request(
            "POST",
            "/api/auth/kakao/callback",
            Some(json!({ "code": "someone@devwant.test|누군가", "state": "forged" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.message(), messages::OAUTH_STATE_INVALID);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = TestApp::without_database();
    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "로그인이 필요합니다.");
}

#[tokio::test]
async fn test_garbage_token_is_rejected_on_optional_auth_route() {
    let app = TestApp::without_database();
    let response = app
        .request("GET", "/api/boards/free/posts/1", None, Some("not-a-jwt"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), messages::INVALID_TOKEN);
}

#[tokio::test]
async fn test_me_reflects_token_claims() {
    let app = TestApp::without_database();
    let token = app.token_for(7, "dev@devwant.test", UserRole::Member);

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["id"], 7);
    assert_eq!(response.data()["email"], "dev@devwant.test");
    assert_eq!(response.data()["role"], "member");
}

#[tokio::test]
async fn test_member_cannot_reach_admin_routes() {
    let app = TestApp::without_database();
    let token = app.token_for(7, "dev@devwant.test", UserRole::Member);

    let response = app
        .request("GET", "/api/admin/boards", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.message(), "관리자 권한이 필요합니다.");

    let response = app
        .request(
            "POST",
            "/api/admin/boards",
            Some(json!({ "code": "free", "title": "자유", "category": "community" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_logout_revokes_access_token() {
    let app = TestApp::without_database();
    let token = app.token_for(9, "bye@devwant.test", UserRole::Member);

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["message"], "로그아웃되었습니다.");

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), messages::TOKEN_REVOKED);
}

#[tokio::test]
async fn test_non_numeric_post_id_is_400() {
    let app = TestApp::without_database();
    let response = app
        .request("GET", "/api/boards/free/posts/abc", None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_post_without_title_is_400() {
    let app = TestApp::without_database();
    let token = app.token_for(7, "dev@devwant.test", UserRole::Member);

    let response = app
        .request(
            "POST",
            "/api/boards/free/posts",
            Some(json!({ "title": "", "content": "<p>본문</p>" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "제목과 내용은 필수 입력사항입니다.");
    assert!(response.body["details"].is_object());
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let app = TestApp::without_database();
    let token = app.token_for(7, "dev@devwant.test", UserRole::Member);

    let response = app
        .request(
            "POST",
            "/api/boards/free/posts/1/vote",
            Some(json!({ "vote_type": "meh" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_database_outage_is_masked() {
    let app = TestApp::without_database();
    let response = app.request("GET", "/api/boards", None, None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.message(), "서버 오류가 발생했습니다.");
}
