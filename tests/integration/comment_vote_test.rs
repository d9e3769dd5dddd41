//! Comments and votes against a real database.
//!
//! Skipped unless `DEVWANT_TEST_DATABASE_URL` is set.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_comment_tree_with_mentions() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.admin().await;
    let alice = app.member("앨리스").await;
    let bob = app.member("밥").await;
    let code = app.create_board(&admin.access_token).await;
    let post = app
        .create_post(&alice.access_token, &code, "토론", None)
        .await;
    let comments = format!("/api/boards/{code}/posts/{}/comments", post["id"]);

    let top = app
        .request(
            "POST",
            &comments,
            Some(json!({ "content": "  첫 댓글  " })),
            Some(&alice.access_token),
        )
        .await;
    assert_eq!(top.status, StatusCode::CREATED, "{:?}", top.body);
    assert_eq!(top.data()["content"], "첫 댓글");
    assert_eq!(top.data()["author"], "앨리스");
    let top_id = top.data()["id"].as_i64().unwrap();

    let reply = app
        .request(
            "POST",
            &comments,
            Some(json!({
                "content": "동의합니다",
                "parent_id": top_id,
                "mentioned_user_id": alice.user_id,
            })),
            Some(&bob.access_token),
        )
        .await;
    assert_eq!(reply.status, StatusCode::CREATED, "{:?}", reply.body);
    assert_eq!(reply.data()["mentioned_user_name"], "앨리스");

    let listed = app.request("GET", &comments, None, None).await;
    assert_eq!(listed.status, StatusCode::OK);
    let roots = listed.data().as_array().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["id"], top_id);
    assert_eq!(roots[0]["replies"][0]["content"], "동의합니다");
    assert_eq!(roots[0]["replies"][0]["mentioned_user_id"], alice.user_id);

    let detail = app
        .request("GET", &format!("/api/boards/{code}/posts/{}", post["id"]), None, None)
        .await;
    assert_eq!(detail.data()["comments_count"], 2);
}

#[tokio::test]
async fn test_comment_validation_and_references() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.admin().await;
    let code = app.create_board(&admin.access_token).await;
    let post = app
        .create_post(&admin.access_token, &code, "검증", None)
        .await;
    let comments = format!("/api/boards/{code}/posts/{}/comments", post["id"]);

    let blank = app
        .request(
            "POST",
            &comments,
            Some(json!({ "content": "   " })),
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
    assert_eq!(blank.message(), "댓글 내용을 입력해주세요.");

    let orphan = app
        .request(
            "POST",
            &comments,
            Some(json!({ "content": "답글", "parent_id": i64::MAX })),
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(orphan.status, StatusCode::NOT_FOUND);
    assert_eq!(orphan.message(), "댓글을 찾을 수 없습니다.");

    let nobody = app
        .request(
            "POST",
            &comments,
            Some(json!({ "content": "@누구", "mentioned_user_id": i64::MAX })),
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(nobody.status, StatusCode::NOT_FOUND);
    assert_eq!(nobody.message(), "사용자를 찾을 수 없습니다.");
}

#[tokio::test]
async fn test_deleting_comment_removes_replies() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.admin().await;
    let author = app.member("댓글러").await;
    let other = app.member("구경꾼").await;
    let code = app.create_board(&admin.access_token).await;
    let post = app
        .create_post(&admin.access_token, &code, "정리", None)
        .await;
    let comments = format!("/api/boards/{code}/posts/{}/comments", post["id"]);

    let top = app
        .request(
            "POST",
            &comments,
            Some(json!({ "content": "지울 댓글" })),
            Some(&author.access_token),
        )
        .await;
    let top_id = top.data()["id"].as_i64().unwrap();
    app.request(
        "POST",
        &comments,
        Some(json!({ "content": "딸린 답글", "parent_id": top_id })),
        Some(&other.access_token),
    )
    .await;

    let denied = app
        .request(
            "DELETE",
            &format!("{comments}/{top_id}"),
            None,
            Some(&other.access_token),
        )
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
    assert_eq!(denied.message(), "댓글을 삭제할 권한이 없습니다.");

    let deleted = app
        .request(
            "DELETE",
            &format!("{comments}/{top_id}"),
            None,
            Some(&author.access_token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.data()["message"], "댓글이 삭제되었습니다.");

    let listed = app.request("GET", &comments, None, None).await;
    assert!(listed.data().as_array().unwrap().is_empty());

    let detail = app
        .request("GET", &format!("/api/boards/{code}/posts/{}", post["id"]), None, None)
        .await;
    assert_eq!(detail.data()["comments_count"], 0);
}

#[tokio::test]
async fn test_comments_on_deleted_post_are_gone() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.admin().await;
    let code = app.create_board(&admin.access_token).await;
    let post = app
        .create_post(&admin.access_token, &code, "사라질 글", None)
        .await;
    let path = format!("/api/boards/{code}/posts/{}", post["id"]);

    app.request("DELETE", &path, None, Some(&admin.access_token))
        .await;

    let response = app
        .request("GET", &format!("{path}/comments"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "존재하지 않는 게시글입니다.");
}

#[tokio::test]
async fn test_vote_toggles() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.admin().await;
    let voter = app.member("투표자").await;
    let code = app.create_board(&admin.access_token).await;
    let post = app
        .create_post(&admin.access_token, &code, "투표", None)
        .await;
    let vote = format!("/api/boards/{code}/posts/{}/vote", post["id"]);

    let cast = |vote_type: &'static str| {
        let app = &app;
        let vote = vote.clone();
        let token = voter.access_token.clone();
        async move {
            app.request(
                "POST",
                &vote,
                Some(json!({ "vote_type": vote_type })),
                Some(&token),
            )
            .await
        }
    };

    let first = cast("like").await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.data()["action"], "new");
    assert_eq!(first.data()["like_count"], 1);
    assert_eq!(first.data()["user_vote"], "like");

    let flipped = cast("dislike").await;
    assert_eq!(flipped.data()["action"], "changed");
    assert_eq!(flipped.data()["like_count"], 0);
    assert_eq!(flipped.data()["dislike_count"], 1);
    assert_eq!(flipped.data()["user_vote"], "dislike");

    let withdrawn = cast("dislike").await;
    assert_eq!(withdrawn.data()["action"], "cancelled");
    assert_eq!(withdrawn.data()["dislike_count"], 0);
    assert!(withdrawn.data()["user_vote"].is_null());

    let other = app
        .request(
            "POST",
            &vote,
            Some(json!({ "vote_type": "like" })),
            Some(&admin.access_token),
        )
        .await;
    assert_eq!(other.data()["like_count"], 1);
}

#[tokio::test]
async fn test_vote_requires_login() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let response = app
        .request(
            "POST",
            "/api/boards/free/posts/1/vote",
            Some(json!({ "vote_type": "like" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
