use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;

use finbud_site::AppState;
use finbud_site::config::{AppConfig, ServerConfig};
use finbud_site::server::router;
use finbud_site::ui::landing::header::{MENU_ITEMS, menu_anchor};

// Helper to build a test server around the real router
fn test_server() -> TestServer {
    let config = AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            static_dir: "static".to_string(),
            request_timeout_secs: 30,
        },
    };
    let state = AppState {
        config: Arc::new(config),
    };

    TestServer::new(router(state)).unwrap()
}

#[tokio::test]
async fn test_landing_page_serves_html() {
    let server = test_server();

    let response = server.get("/").await;

    response.assert_status(StatusCode::OK);
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let body = response.text();
    assert!(body.to_lowercase().starts_with("<!doctype html>"));
    assert!(body.contains("FinBud"));
}

#[tokio::test]
async fn test_page_sections_render_in_order() {
    let server = test_server();
    let body = server.get("/").await.text();

    let header = body.find("<header").expect("header missing");
    let hero = body.find("id=\"overview\"").expect("hero missing");
    let panel = body.find("id=\"try-finbud\"").expect("chat panel missing");
    let footer = body.find("<footer").expect("footer missing");

    assert!(header < hero);
    assert!(hero < panel);
    assert!(panel < footer);
}

#[tokio::test]
async fn test_menu_links_target_section_anchors() {
    let server = test_server();
    let body = server.get("/").await.text();

    let mut last = 0;
    for item in MENU_ITEMS {
        let needle = format!("href=\"{}\"", menu_anchor(item));
        let at = body
            .find(&needle)
            .unwrap_or_else(|| panic!("missing menu link {needle}"));
        assert!(at > last, "menu link for {item} out of order");
        last = at;
    }
}

#[tokio::test]
async fn test_chat_panel_state_wiring() {
    // The draft message lives entirely in the page; nothing is transmitted.
    let server = test_server();
    let body = server.get("/").await.text();

    assert!(body.contains("x-data=\"{ message: '' }\""));
    assert!(body.contains("x-model=\"message\""));
    assert!(body.contains("x-on:keydown=\"if ($event.key === 'Enter') message = ''\""));
    assert!(body.contains("x-on:click=\"message = ''\""));

    assert!(!body.contains("<form"));
    assert!(!body.contains("hx-post"));
    assert!(!body.contains("fetch("));
}

#[tokio::test]
async fn test_rendering_is_deterministic() {
    let server = test_server();

    let first = server.get("/").await.text();
    let second = server.get("/").await.text();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_entrance_animation_classes_present() {
    let server = test_server();
    let body = server.get("/").await.text();

    assert!(body.contains("animate-slide-down"));
    assert!(body.contains("animate-rise"));
    assert!(body.contains("animate-fade"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = test_server();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_static_stylesheet_served() {
    let server = test_server();

    let response = server.get("/static/app.css").await;

    response.assert_status(StatusCode::OK);
    let css = response.text();
    for name in ["slide-down", "rise", "fade"] {
        assert!(
            css.contains(&format!("@keyframes {name}")),
            "stylesheet is missing the {name} keyframes"
        );
    }
}

#[tokio::test]
async fn test_unknown_path_returns_not_found_page() {
    let server = test_server();

    let response = server.get("/no-such-page").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Page not found"));
}
