use axum::{
    Router,
    body::Body,
    http::{
        Request, Response, StatusCode,
        header::{CONTENT_TYPE, LOCATION},
    },
};
use http_body_util::BodyExt;
use sea_orm::Database;
use tower::ServiceExt;

use engine::Engine;
use migration::MigratorTrait;

async fn test_app() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db).build().await.unwrap();
    server::app(engine)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.unwrap()
}

async fn body_text(res: Response<Body>) -> String {
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(res: &Response<Body>) -> &str {
    res.headers()[LOCATION].to_str().unwrap()
}

async fn register(app: &Router, username: &str, email: &str, password: &str) -> Response<Body> {
    let body = format!("username={username}&email={email}&password={password}&phone=&birthdate=");
    send(app, post_form("/register", &body)).await
}

#[tokio::test]
async fn home_and_forms_render() {
    let app = test_app().await;

    for uri in ["/", "/register", "/login"] {
        let res = send(&app, get(uri)).await;
        assert_eq!(res.status(), StatusCode::OK, "{uri}");
    }

    let page = body_text(send(&app, get("/register")).await).await;
    assert!(page.contains(r#"action="/register""#));
}

#[tokio::test]
async fn register_then_login_shows_welcome() {
    let app = test_app().await;

    let res = register(&app, "alice", "a%40x.com", "p1").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/login");

    let res = send(&app, post_form("/login", "email=a%40x.com&password=p1")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let page = body_text(res).await;
    assert!(page.contains("★alice★"));
    assert!(page.contains("/edit_profile/1"));
}

#[tokio::test]
async fn register_rejects_blank_fields() {
    let app = test_app().await;

    let res = register(&app, "alice", "a%40x.com", "+++").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&res),
        "/error?message=enter%20username%2C%20email%2C%20and%20password"
    );
}

#[tokio::test]
async fn register_reports_duplicates() {
    let app = test_app().await;
    register(&app, "bob", "b%40x.com", "p2").await;

    let res = register(&app, "bob", "other%40x.com", "p9").await;
    assert_eq!(
        location(&res),
        "/error?message=username%20already%20exists"
    );

    let res = register(&app, "carol", "b%40x.com", "p3").await;
    assert_eq!(location(&res), "/error?message=email%20already%20in%20use");
}

#[tokio::test]
async fn login_failures_redirect_to_error_page() {
    let app = test_app().await;
    register(&app, "alice", "a%40x.com", "p1").await;

    let wrong_password = send(&app, post_form("/login", "email=a%40x.com&password=nope")).await;
    let unknown_email = send(&app, post_form("/login", "email=z%40x.com&password=p1")).await;
    assert_eq!(
        location(&wrong_password),
        "/error?message=incorrect%20email%20or%20password"
    );
    assert_eq!(location(&wrong_password), location(&unknown_email));

    let blank = send(&app, post_form("/login", "email=&password=p1")).await;
    assert_eq!(
        location(&blank),
        "/error?message=enter%20email%20and%20password"
    );
}

#[tokio::test]
async fn error_page_shows_message_or_default() {
    let app = test_app().await;

    let page = body_text(send(&app, get("/error")).await).await;
    assert!(page.contains("unknown error occurred"));

    let page = body_text(send(&app, get("/error?message=email%20already%20in%20use")).await).await;
    assert!(page.contains("email already in use"));
}

#[tokio::test]
async fn error_page_tolerates_invalid_utf8() {
    let app = test_app().await;

    let res = send(&app, get("/error?message=%FFbad")).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("\u{FFFD}bad"));
}

#[tokio::test]
async fn welcome_shows_existing_member() {
    let app = test_app().await;
    register(&app, "alice", "a%40x.com", "p1").await;

    let res = send(&app, get("/welcome/1")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let page = body_text(res).await;
    assert!(page.contains("Welcome, ★alice★"));
    assert!(page.contains(r#"href="/edit_profile/1""#));
    assert!(page.contains(r#"href="/delete/1""#));
}

#[tokio::test]
async fn welcome_for_missing_member_renders_error() {
    let app = test_app().await;

    let res = send(&app, get("/welcome/42")).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("user does not exist"));

    let res = send(&app, get("/edit_profile/42")).await;
    assert!(body_text(res).await.contains("user does not exist"));
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let app = test_app().await;

    let res = send(&app, get("/welcome/abc")).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn edit_profile_updates_and_redirects() {
    let app = test_app().await;
    register(&app, "alice", "a%40x.com", "p1").await;

    let page = body_text(send(&app, get("/edit_profile/1")).await).await;
    assert!(page.contains(r#"value="a@x.com""#));

    let res = send(
        &app,
        post_form(
            "/edit_profile/1",
            "email=a%40x.com&password=p2&phone=555-0100&birthdate=1990-05-01",
        ),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/welcome/1");

    let page = body_text(send(&app, get("/edit_profile/1")).await).await;
    assert!(page.contains(r#"value="555-0100""#));

    let res = send(&app, post_form("/login", "email=a%40x.com&password=p2")).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn edit_profile_rejects_email_of_another_member() {
    let app = test_app().await;
    register(&app, "alice", "a%40x.com", "p1").await;
    register(&app, "bob", "b%40x.com", "p2").await;

    let res = send(
        &app,
        post_form("/edit_profile/2", "email=a%40x.com&password=p2"),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("email already in use"));

    let page = body_text(send(&app, get("/edit_profile/2")).await).await;
    assert!(page.contains(r#"value="b@x.com""#));

    let res = send(&app, post_form("/edit_profile/2", "email=&password=p2")).await;
    assert!(body_text(res).await.contains("enter email and password"));
}

#[tokio::test]
async fn delete_is_idempotent() {
    let app = test_app().await;
    register(&app, "alice", "a%40x.com", "p1").await;

    for _ in 0..2 {
        let res = send(&app, get("/delete/1")).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&res), "/");
    }

    let res = send(&app, get("/welcome/1")).await;
    assert!(body_text(res).await.contains("user does not exist"));
}
