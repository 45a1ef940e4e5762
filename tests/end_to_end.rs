mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};
use serde_json::json;

// The whole journey: provision a user, log in for a token, use it on the
// books surface, and get turned away without it.
#[tokio::test]
async fn full_token_lifecycle() {
    println!("\n\n[+] Running test: full_token_lifecycle");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    println!("[+] Test client and context created.");

    println!("[>] Creating user tester/testpass.");
    let (user_id, _key) = client.create_test_user().await;
    println!("[<] User created: {user_id}");

    println!("[>] Logging in.");
    let req = test::TestRequest::post()
        .uri("/api/users/login/")
        .set_json(json!({"username": "tester", "password": "testpass"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap().to_string();
    println!("[<] Got token.");

    println!("[>] Creating a book with the token.");
    let req = test::TestRequest::post()
        .uri("/api/books/")
        .insert_header(("Authorization", format!("Token {token}")))
        .set_json(test_data::sample_book())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    println!("[>] Listing books with the token.");
    let req = test::TestRequest::get()
        .uri("/api/books/")
        .insert_header(("Authorization", format!("Token {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let listed: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    println!("[<] List returned {} book(s).", listed.as_array().unwrap().len());

    println!("[>] Listing books without the token.");
    let req = test::TestRequest::get().uri("/api/books/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: anonymous request rejected.");
}
