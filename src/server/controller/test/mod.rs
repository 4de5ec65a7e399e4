use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::{
    model::{board::BoardDto, user::UserDto},
    server::{error::AppError, router::router, state::AppState},
};


/// Builds a test server over the full router with sessions stored in the test
/// database. Cookies are kept between requests so a login carries over.
async fn test_server(test: &mut TestContext) -> TestServer {
    let session_layer = test.session_layer().await.unwrap();
    let db = test.db.clone().unwrap();

    let app = router()
        .with_state(AppState::new(db))
        .layer(session_layer);

    TestServer::builder().save_cookies().build(app).unwrap()
}

/// Logs in through the API and asserts success.
async fn login(server: &TestServer, user_id: &str, password: &str) {
    server
        .post("/users/login")
        .json(&json!({ "userId": user_id, "userPassword": password }))
        .await
        .assert_status_ok();
}
