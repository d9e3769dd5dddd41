//! Board and category administration against a real database.
//!
//! Skipped unless `DEVWANT_TEST_DATABASE_URL` is set.

mod helpers;

use http::StatusCode;
use serde_json::json;

use devwant_core::messages;
use helpers::TestApp;

#[tokio::test]
async fn test_board_lifecycle() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.admin().await;
    let code = app.create_board(&admin.access_token).await;

    let page = app
        .request("GET", &format!("/api/boards/{code}"), None, None)
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.data()["board"]["code"], code.as_str());
    assert_eq!(page.data()["board"]["posts_count"], 0);
    assert_eq!(page.data()["posts"]["total_items"], 0);
    let id = page.data()["board"]["id"].as_i64().unwrap();

    let listed = app
        .request("GET", "/api/boards?category=community", None, None)
        .await;
    assert!(
        listed.data().as_array().unwrap().iter().any(|b| b["code"] == code.as_str()),
        "new board missing from the directory"
    );

    let updated = app
        .request(
            "PUT",
            &format!("/api/admin/boards/{id}"),
            Some(json!({ "title": "질문게시판" })),
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.data()["title"], "질문게시판");
    assert_eq!(updated.data()["category"], "community");

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/admin/boards/{id}"),
            None,
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.data()["message"], "게시판이 삭제되었습니다.");

    let hidden = app
        .request("GET", &format!("/api/boards/{code}"), None, None)
        .await;
    assert_eq!(hidden.status, StatusCode::NOT_FOUND);
    assert_eq!(hidden.message(), "존재하지 않는 게시판입니다.");

    let directory = app.request("GET", "/api/boards", None, None).await;
    assert_eq!(directory.status, StatusCode::OK);
    assert!(
        !directory.data().as_array().unwrap().iter().any(|b| b["code"] == code.as_str()),
        "deleted board still listed"
    );

    let still_there = app
        .request(
            "GET",
            &format!("/api/admin/boards/{id}"),
            None,
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(still_there.status, StatusCode::OK);
    assert!(still_there.data()["deleted_at"].is_string());

    let restored = app
        .request(
            "POST",
            &format!("/api/admin/boards/{id}/restore"),
            None,
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(restored.status, StatusCode::OK);

    let again = app
        .request(
            "POST",
            &format!("/api/admin/boards/{id}/restore"),
            None,
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.message(), messages::DELETED_BOARD_NOT_FOUND);

    let visible = app
        .request("GET", &format!("/api/boards/{code}"), None, None)
        .await;
    assert_eq!(visible.status, StatusCode::OK);
}

#[tokio::test]
async fn test_permanent_delete_removes_board_and_posts() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.admin().await;
    let code = app.create_board(&admin.access_token).await;
    let post = app
        .create_post(&admin.access_token, &code, "공지", None)
        .await;
    let board_id = post["board_id"].as_i64().unwrap();

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/admin/boards/{board_id}?permanent=true"),
            None,
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.data()["message"], "게시판이 영구 삭제되었습니다.");

    let gone = app
        .request(
            "GET",
            &format!("/api/admin/boards/{board_id}"),
            None,
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.message(), "게시판을 찾을 수 없습니다.");
}

#[tokio::test]
async fn test_board_code_rules() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.admin().await;
    let code = app.create_board(&admin.access_token).await;

    let duplicate = app
        .request(
            "POST",
            "/api/admin/boards",
            Some(json!({ "code": code, "title": "중복", "category": "community" })),
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(duplicate.message(), messages::BOARD_CODE_TAKEN);

    let bad = app
        .request(
            "POST",
            "/api/admin/boards",
            Some(json!({ "code": "No Spaces!", "title": "잘못", "category": "community" })),
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);

    let page = app
        .request("GET", &format!("/api/boards/{code}"), None, None)
        .await;
    let id = page.data()["board"]["id"].as_i64().unwrap();
    let renamed = app
        .request(
            "PUT",
            &format!("/api/admin/boards/{id}"),
            Some(json!({ "code": "renamed" })),
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::BAD_REQUEST);
    assert_eq!(renamed.message(), "게시판 코드는 변경할 수 없습니다.");
}

#[tokio::test]
async fn test_categories_reorder() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.admin().await;
    let code = app.create_board(&admin.access_token).await;
    let page = app
        .request("GET", &format!("/api/boards/{code}"), None, None)
        .await;
    let board_id = page.data()["board"]["id"].as_i64().unwrap();

    let mut ids = Vec::new();
    for name in ["공지", "질문", "잡담"] {
        let created = app
            .request(
                "POST",
                &format!("/api/admin/boards/{board_id}/categories"),
                Some(json!({ "name": name })),
                Some(&admin.access_token),
            )
            .await;
        assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
        ids.push(created.data()["id"].as_i64().unwrap());
    }

    let reordered = app
        .request(
            "PUT",
            &format!("/api/admin/boards/{board_id}/categories/reorder"),
            Some(json!({ "categories": [
                { "id": ids[2], "order_num": 0 },
                { "id": ids[0], "order_num": 1 },
                { "id": ids[1], "order_num": 2 },
            ]})),
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(reordered.status, StatusCode::OK, "{:?}", reordered.body);

    let public = app
        .request("GET", &format!("/api/boards/{code}/categories"), None, None)
        .await;
    let names: Vec<&str> = public
        .data()
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["잡담", "공지", "질문"]);

    let renamed = app
        .request(
            "PUT",
            &format!("/api/admin/boards/{board_id}/categories/{}", ids[1]),
            Some(json!({ "name": "Q&A" })),
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(renamed.status, StatusCode::OK);
    assert_eq!(renamed.data()["name"], "Q&A");

    let removed = app
        .request(
            "DELETE",
            &format!("/api/admin/boards/{board_id}/categories/{}", ids[0]),
            None,
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(removed.status, StatusCode::OK);

    let listed = app
        .request(
            "GET",
            &format!("/api/admin/boards/{board_id}/categories"),
            None,
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(listed.data().as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_reorder_rejects_duplicates() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.admin().await;
    let code = app.create_board(&admin.access_token).await;
    let page = app
        .request("GET", &format!("/api/boards/{code}"), None, None)
        .await;
    let board_id = page.data()["board"]["id"].as_i64().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/boards/{board_id}/categories/reorder"),
            Some(json!({ "categories": [
                { "id": 1, "order_num": 0 },
                { "id": 1, "order_num": 1 },
            ]})),
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_lists_users() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.admin().await;
    app.member("회원").await;

    let response = app
        .request(
            "GET",
            "/api/admin/users?page=1&limit=5",
            None,
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["page_size"], 5);
    assert!(response.data()["total_items"].as_u64().unwrap() >= 2);
}

#[tokio::test]
async fn test_sign_in_ignores_email_case() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let mailbox = format!("case-{}", &helpers::unique_code()[1..]);

    let first = app
        .sign_in(&format!("{mailbox}@DevWant.Test"), "대문자")
        .await;
    let second = app
        .sign_in(&format!("{}@devwant.test", mailbox.to_uppercase()), "소문자")
        .await;
    assert_eq!(first.user_id, second.user_id);

    let me = app
        .request("GET", "/api/profile", None, Some(&second.access_token))
        .await;
    assert_eq!(me.data()["email"], format!("{mailbox}@devwant.test"));
    assert_eq!(me.data()["name"], "대문자");
}
