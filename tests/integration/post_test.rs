//! Posts and reply threads against a real database.
//!
//! Skipped unless `DEVWANT_TEST_DATABASE_URL` is set.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};

use devwant_core::messages;
use helpers::TestApp;

/// 1x1 PNG.
const PIXEL_PNG: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

fn titles(items: &Value) -> Vec<&str> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_replies_are_listed_in_thread_order() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.admin().await;
    let member = app.member("김개발").await;
    let code = app.create_board(&admin.access_token).await;

    let older = app
        .create_post(&member.access_token, &code, "먼저 쓴 글", None)
        .await;
    let root = app
        .create_post(&member.access_token, &code, "A", None)
        .await;
    let root_id = root["id"].as_i64().unwrap();
    assert_eq!(root["group_id"], root_id);
    assert_eq!(root["depth"], 0);
    assert_eq!(root["sequence"], 0);
    assert_eq!(root["author"], "김개발");

    let b = app
        .create_post(&member.access_token, &code, "B", Some(root_id))
        .await;
    let c = app
        .create_post(&member.access_token, &code, "C", Some(root_id))
        .await;
    let d = app
        .create_post(&admin.access_token, &code, "D", Some(b["id"].as_i64().unwrap()))
        .await;
    assert_eq!(b["depth"], 1);
    assert_eq!(b["reply_order"], 1);
    assert_eq!(c["reply_order"], 2);
    assert_eq!(d["depth"], 2);
    assert_eq!(d["group_id"], root_id);
    assert!(d.get("thread_path").is_none());

    let page = app
        .request("GET", &format!("/api/boards/{code}"), None, None)
        .await;
    assert_eq!(page.status, StatusCode::OK);
    assert_eq!(page.data()["board"]["posts_count"], 5);
    assert_eq!(
        titles(&page.data()["posts"]["items"]),
        ["A", "B", "D", "C", "먼저 쓴 글"]
    );
    let sequences: Vec<i64> = page.data()["posts"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["sequence"].as_i64().unwrap())
        .collect();
    assert_eq!(sequences, [0, 1, 2, 3, 0]);
    assert!(page.data()["posts"]["items"][0].get("content").is_none());

    let thread = app
        .request(
            "GET",
            &format!("/api/boards/{code}/posts/{}/thread", d["id"]),
            None,
            None,
        )
        .await;
    assert_eq!(thread.status, StatusCode::OK);
    let roots = thread.data().as_array().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["title"], "A");
    assert_eq!(titles(&roots[0]["replies"]), ["B", "C"]);
    assert_eq!(titles(&roots[0]["replies"][0]["replies"]), ["D"]);

    assert_ne!(older["group_id"], root["group_id"]);
}

#[tokio::test]
async fn test_pagination_and_search() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.admin().await;
    let code = app.create_board(&admin.access_token).await;

    for title in ["러스트 질문", "자바 질문", "러스트 후기"] {
        app.create_post(&admin.access_token, &code, title, None).await;
    }

    let first = app
        .request("GET", &format!("/api/boards/{code}?page=1&limit=2"), None, None)
        .await;
    assert_eq!(first.data()["posts"]["total_items"], 3);
    assert_eq!(first.data()["posts"]["total_pages"], 2);
    assert_eq!(first.data()["posts"]["has_next"], true);
    assert_eq!(titles(&first.data()["posts"]["items"]), ["러스트 후기", "자바 질문"]);

    let second = app
        .request("GET", &format!("/api/boards/{code}?page=2&limit=2"), None, None)
        .await;
    assert_eq!(titles(&second.data()["posts"]["items"]), ["러스트 질문"]);

    let found = app
        .request(
            "GET",
            &format!("/api/boards/{code}?search=%EB%9F%AC%EC%8A%A4%ED%8A%B8"),
            None,
            None,
        )
        .await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.data()["posts"]["total_items"], 2);
}

#[tokio::test]
async fn test_reading_counts_views_and_reports_own_vote() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.admin().await;
    let member = app.member("독자").await;
    let code = app.create_board(&admin.access_token).await;
    let post = app
        .create_post(&admin.access_token, &code, "조회수", None)
        .await;
    let path = format!("/api/boards/{code}/posts/{}", post["id"]);

    let first = app.request("GET", &path, None, None).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.data()["view_count"], 1);
    assert_eq!(first.data()["content"], "<p>조회수</p>");
    assert!(first.data()["user_vote"].is_null());

    app.request(
        "POST",
        &format!("{path}/vote"),
        Some(json!({ "vote_type": "like" })),
        Some(&member.access_token),
    )
    .await;

    let second = app
        .request("GET", &path, None, Some(&member.access_token))
        .await;
    assert_eq!(second.data()["view_count"], 2);
    assert_eq!(second.data()["user_vote"], "like");
    assert_eq!(second.data()["like_count"], 1);
}

#[tokio::test]
async fn test_only_author_edits_and_admin_may_delete() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.admin().await;
    let author = app.member("작성자").await;
    let other = app.member("다른사람").await;
    let code = app.create_board(&admin.access_token).await;
    let post = app
        .create_post(&author.access_token, &code, "원래 제목", None)
        .await;
    let path = format!("/api/boards/{code}/posts/{}", post["id"]);
    let edit = json!({ "title": "고친 제목", "content": "<p>고침</p>" });

    let denied = app
        .request("PUT", &path, Some(edit.clone()), Some(&other.access_token))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
    assert_eq!(denied.message(), "게시글을 수정할 권한이 없습니다.");

    let admin_edit = app
        .request("PUT", &path, Some(edit.clone()), Some(&admin.access_token))
        .await;
    assert_eq!(admin_edit.status, StatusCode::FORBIDDEN);

    let edited = app
        .request("PUT", &path, Some(edit), Some(&author.access_token))
        .await;
    assert_eq!(edited.status, StatusCode::OK);
    assert_eq!(edited.data()["title"], "고친 제목");

    let denied = app
        .request("DELETE", &path, None, Some(&other.access_token))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
    assert_eq!(denied.message(), "게시글을 삭제할 권한이 없습니다.");

    let deleted = app
        .request("DELETE", &path, None, Some(&admin.access_token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.data()["message"], "게시글이 삭제되었습니다.");

    let gone = app.request("GET", &path, None, None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.message(), "게시글을 찾을 수 없습니다.");

    let page = app
        .request("GET", &format!("/api/boards/{code}"), None, None)
        .await;
    assert_eq!(page.data()["board"]["posts_count"], 0);
}

#[tokio::test]
async fn test_post_in_other_board_is_not_found() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.admin().await;
    let first = app.create_board(&admin.access_token).await;
    let second = app.create_board(&admin.access_token).await;
    let post = app
        .create_post(&admin.access_token, &first, "여기", None)
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/boards/{second}/posts/{}", post["id"]),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let reply = app
        .request(
            "POST",
            &format!("/api/boards/{second}/posts"),
            Some(json!({ "title": "답글", "content": "<p>답</p>", "parent_id": post["id"] })),
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.message(), messages::PARENT_POST_NOT_FOUND);
}

#[tokio::test]
async fn test_reply_to_deleted_post_is_rejected() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.admin().await;
    let code = app.create_board(&admin.access_token).await;
    let root = app
        .create_post(&admin.access_token, &code, "지워질 원글", None)
        .await;

    app.request(
        "DELETE",
        &format!("/api/boards/{code}/posts/{}", root["id"]),
        None,
        Some(&admin.access_token),
    )
    .await;

    let reply = app
        .request(
            "POST",
            &format!("/api/boards/{code}/posts"),
            Some(json!({ "title": "늦은 답글", "content": "<p>답</p>", "parent_id": root["id"] })),
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.message(), messages::PARENT_POST_NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent_replies_take_distinct_positions() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.admin().await;
    let member = app.member("동시작성").await;
    let code = app.create_board(&admin.access_token).await;
    let root = app
        .create_post(&admin.access_token, &code, "원글", None)
        .await;
    let root_id = root["id"].as_i64().unwrap();

    let replies = tokio::join!(
        app.create_post(&member.access_token, &code, "r1", Some(root_id)),
        app.create_post(&admin.access_token, &code, "r2", Some(root_id)),
        app.create_post(&member.access_token, &code, "r3", Some(root_id)),
        app.create_post(&admin.access_token, &code, "r4", Some(root_id)),
        app.create_post(&member.access_token, &code, "r5", Some(root_id)),
    );
    let mut orders: Vec<i64> = [replies.0, replies.1, replies.2, replies.3, replies.4]
        .iter()
        .map(|r| r["reply_order"].as_i64().unwrap())
        .collect();
    orders.sort_unstable();
    assert_eq!(orders, [1, 2, 3, 4, 5]);

    let page = app
        .request("GET", &format!("/api/boards/{code}"), None, None)
        .await;
    let items = page.data()["posts"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 6);
    let sequences: Vec<i64> = items
        .iter()
        .map(|p| p["sequence"].as_i64().unwrap())
        .collect();
    assert_eq!(sequences, [0, 1, 2, 3, 4, 5]);
    assert_eq!(page.data()["board"]["posts_count"], 6);
}

#[tokio::test]
async fn test_inline_image_becomes_served_thumbnail() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.admin().await;
    let code = app.create_board(&admin.access_token).await;

    let created = app
        .request(
            "POST",
            &format!("/api/boards/{code}/posts"),
            Some(json!({
                "title": "사진",
                "content": format!(r#"<p>보세요</p><img src="data:image/png;base64,{PIXEL_PNG}">"#),
            })),
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);

    let url = created.data()["thumbnail"].as_str().unwrap().to_string();
    assert!(url.starts_with("/thumbs/"));
    assert!(url.ends_with(".jpg"));

    let served = app.request("GET", &url, None, None).await;
    assert_eq!(served.status, StatusCode::OK);
    assert_eq!(served.content_type.as_deref(), Some("image/jpeg"));
}

#[tokio::test]
async fn test_writing_to_missing_board_is_404() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let member = app.member("길잃은").await;

    let response = app
        .request(
            "POST",
            &format!("/api/boards/{}/posts", helpers::unique_code()),
            Some(json!({ "title": "제목", "content": "<p>본문</p>" })),
            Some(&member.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "존재하지 않는 게시판입니다.");
}
