//! Video upload and listing integration tests.
//!
//! Run with: `cargo test -p clipvault-api --test videos_test`

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::{setup_test_app, TestApp};
use serde_json::Value;

fn mp4_form(title: &str, description: &str, content: Vec<u8>) -> MultipartForm {
    MultipartForm::new()
        .add_text("title", title)
        .add_text("description", description)
        .add_part(
            "video",
            Part::bytes(content).file_name("clip.mp4").mime_type("video/mp4"),
        )
}

async fn upload_clip(app: &TestApp, token: &str, title: &str, content: Vec<u8>) -> Value {
    let response = app
        .client()
        .post("/upload-video")
        .add_header("Authorization", format!("Bearer {}", token))
        .multipart(mp4_form(title, "a short description", content))
        .await;
    assert_eq!(response.status_code(), 200, "upload failed: {}", response.text());
    response.json()
}

/// Resolve a returned video URL back to its path under the test storage root.
fn blob_path(app: &TestApp, video_url: &str) -> std::path::PathBuf {
    let key = video_url
        .strip_prefix("http://localhost:4000/files/")
        .expect("video url should sit under the test base url");
    app._temp_dir.path().join("storage").join(key)
}

#[tokio::test]
async fn test_upload_requires_a_video_file() {
    let app = setup_test_app().await;
    let token = app.register_and_login("asha@example.com").await;

    let form = MultipartForm::new()
        .add_text("title", "no file attached")
        .add_text("description", "just text fields");
    let response = app
        .client()
        .post("/upload-video")
        .add_header("Authorization", format!("Bearer {}", token))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], 0);
    assert_eq!(body["message"], "Video file is missing.");
    assert_eq!(app.videos.count().await, 0);
    assert!(app.spool_leftovers().is_empty());
}

#[tokio::test]
async fn test_upload_rejects_non_video_content() {
    let app = setup_test_app().await;
    let token = app.register_and_login("asha@example.com").await;

    let form = MultipartForm::new()
        .add_text("title", "a screenshot")
        .add_text("description", "wrong kind of file")
        .add_part(
            "video",
            Part::bytes(b"\x89PNG".to_vec())
                .file_name("shot.png")
                .mime_type("image/png"),
        );
    let response = app
        .client()
        .post("/upload-video")
        .add_header("Authorization", format!("Bearer {}", token))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid file type.");
    assert_eq!(app.videos.count().await, 0);
    assert!(app.spool_leftovers().is_empty());
}

#[tokio::test]
async fn test_upload_rejects_oversized_files() {
    let app = setup_test_app().await;
    let token = app.register_and_login("asha@example.com").await;

    // Test cap is 6 MiB; this is 7.
    let response = app
        .client()
        .post("/upload-video")
        .add_header("Authorization", format!("Bearer {}", token))
        .multipart(mp4_form("big one", "too large", vec![0u8; 7 * 1024 * 1024]))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], 0);
    assert_eq!(body["message"], "File size exceeded.");
    assert_eq!(app.videos.count().await, 0);
    assert!(app.spool_leftovers().is_empty());
}

#[tokio::test]
async fn test_upload_rejects_an_overlong_title() {
    let app = setup_test_app().await;
    let token = app.register_and_login("asha@example.com").await;

    let title = ["word"; 31].join(" ");
    let response = app
        .client()
        .post("/upload-video")
        .add_header("Authorization", format!("Bearer {}", token))
        .multipart(mp4_form(&title, "fine description", b"clip".to_vec()))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["errors"][0]["field"], "title");
    assert_eq!(body["errors"][0]["message"], "Invalid video title");
    assert_eq!(app.videos.count().await, 0);
    assert!(app.spool_leftovers().is_empty());
}

#[tokio::test]
async fn test_upload_stores_blob_and_metadata() {
    let app = setup_test_app().await;
    let token = app.register_and_login("asha@example.com").await;

    let body = upload_clip(&app, &token, "My first clip", b"binary video content".to_vec()).await;

    assert_eq!(body["code"], 1);
    assert_eq!(body["message"], "Video uploaded successfully. Closing popup ...");
    assert_eq!(body["data"]["title"], "My first clip");
    assert_eq!(body["data"]["description"], "a short description");

    let video_url = body["data"]["videoUrl"].as_str().unwrap();
    assert!(
        video_url.starts_with("http://localhost:4000/files/asha@example.com/video-"),
        "unexpected url: {video_url}"
    );
    assert!(video_url.ends_with(".mp4"));

    let stored = std::fs::read(blob_path(&app, video_url)).expect("blob should exist");
    assert_eq!(stored, b"binary video content");

    assert_eq!(app.videos.count().await, 1);
    assert!(app.spool_leftovers().is_empty());
}

#[tokio::test]
async fn test_first_video_part_wins() {
    let app = setup_test_app().await;
    let token = app.register_and_login("asha@example.com").await;

    let form = MultipartForm::new()
        .add_text("title", "double feature")
        .add_text("description", "two files, one field")
        .add_part(
            "video",
            Part::bytes(b"the first file".to_vec())
                .file_name("first.mp4")
                .mime_type("video/mp4"),
        )
        .add_part(
            "video",
            Part::bytes(b"the second file".to_vec())
                .file_name("second.mp4")
                .mime_type("video/mp4"),
        );
    let response = app
        .client()
        .post("/upload-video")
        .add_header("Authorization", format!("Bearer {}", token))
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    let video_url = body["data"]["videoUrl"].as_str().unwrap();

    let stored = std::fs::read(blob_path(&app, video_url)).expect("blob should exist");
    assert_eq!(stored, b"the first file");
    assert_eq!(app.videos.count().await, 1);
    assert!(app.spool_leftovers().is_empty());
}

#[tokio::test]
async fn test_user_videos_lists_own_uploads_in_order() {
    let app = setup_test_app().await;
    let asha = app.register_and_login("asha@example.com").await;
    let vikram = app.register_and_login("vikram@example.com").await;

    upload_clip(&app, &asha, "first", b"a".to_vec()).await;
    upload_clip(&app, &asha, "second", b"b".to_vec()).await;
    upload_clip(&app, &vikram, "not hers", b"c".to_vec()).await;

    let response = app
        .client()
        .get("/user-videos")
        .add_header("Authorization", format!("Bearer {}", asha))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["code"], 1);
    assert_eq!(body["message"], "Videos fetched successfully.");

    let videos = body["data"]["videos"].as_array().unwrap();
    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0]["title"], "first");
    assert_eq!(videos[1]["title"], "second");
    assert!(videos.iter().all(|v| v["videoUrl"]
        .as_str()
        .unwrap()
        .contains("asha@example.com")));
}

#[tokio::test]
async fn test_listing_requires_a_valid_user_id() {
    let app = setup_test_app().await;
    let token = app.register_and_login("asha@example.com").await;

    let response = app
        .client()
        .get("/listing-videos")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;
    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["errors"][0]["field"], "userId");
    assert_eq!(body["errors"][0]["message"], "User id is required");

    let response = app
        .client()
        .get("/listing-videos?userId=not-a-uuid")
        .add_header("Authorization", format!("Bearer {}", token))
        .await;
    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["errors"][0]["message"], "Invalid user id");
}

#[tokio::test]
async fn test_listing_filters_by_owner() {
    let app = setup_test_app().await;
    let asha = app.register_and_login("asha@example.com").await;
    let vikram = app.register_and_login("vikram@example.com").await;

    upload_clip(&app, &asha, "hers", b"a".to_vec()).await;
    upload_clip(&app, &vikram, "his", b"b".to_vec()).await;

    // Any authenticated caller can list any user's videos.
    let me: Value = app
        .client()
        .get("/user-metadata")
        .add_header("Authorization", format!("Bearer {}", asha))
        .await
        .json();
    let asha_id = me["data"]["user"]["id"].as_str().unwrap().to_string();

    let response = app
        .client()
        .get(&format!("/listing-videos?userId={}", asha_id))
        .add_header("Authorization", format!("Bearer {}", vikram))
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    let videos = body["data"]["videos"].as_array().unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0]["title"], "hers");
}

#[tokio::test]
async fn test_listing_limit_semantics() {
    let app = setup_test_app().await;
    let token = app.register_and_login("asha@example.com").await;

    upload_clip(&app, &token, "first", b"a".to_vec()).await;
    upload_clip(&app, &token, "second", b"b".to_vec()).await;

    let me: Value = app
        .client()
        .get("/user-metadata")
        .add_header("Authorization", format!("Bearer {}", token))
        .await
        .json();
    let user_id = me["data"]["user"]["id"].as_str().unwrap().to_string();

    // A positive limit caps the list.
    assert_eq!(
        listed_count(&app, &token, &format!("/listing-videos?userId={}&limit=1", user_id)).await,
        1
    );
    // Zero, junk, and absence all mean unbounded.
    assert_eq!(
        listed_count(&app, &token, &format!("/listing-videos?userId={}&limit=0", user_id)).await,
        2
    );
    assert_eq!(
        listed_count(&app, &token, &format!("/listing-videos?userId={}&limit=abc", user_id)).await,
        2
    );
    assert_eq!(
        listed_count(&app, &token, &format!("/listing-videos?userId={}", user_id)).await,
        2
    );
}

async fn listed_count(app: &TestApp, token: &str, query: &str) -> usize {
    let body: Value = app
        .client()
        .get(query)
        .add_header("Authorization", format!("Bearer {}", token))
        .await
        .json();
    body["data"]["videos"].as_array().unwrap().len()
}
