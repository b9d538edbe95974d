use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::Duration;
use http_body_util::BodyExt;
use order_queue::api::{self, AppState};
use order_queue::clock::{ManualClock, SharedClock};
use order_queue::lifecycle::OrderSystem;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    clock: Arc<ManualClock>,
    _system: OrderSystem,
}

impl TestApp {
    fn new() -> Self {
        let clock = Arc::new(ManualClock::at_secs(1_722_373_200));
        let shared: SharedClock = clock.clone();
        let system = OrderSystem::with_clock(16, shared);
        let router = api::router(AppState::new(system.order_client.clone(), 5));
        Self {
            router,
            clock,
            _system: system,
        }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create(&self, name: &str) -> Value {
        let (status, order) = self
            .send(
                Method::POST,
                "/api/orders",
                Some(json!({
                    "studentName": name,
                    "orderType": "Lanche",
                    "details": "Cheese toast",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        self.clock.advance(Duration::seconds(1));
        order
    }

    async fn list_names(&self) -> Vec<String> {
        let (status, orders) = self.send(Method::GET, "/api/orders", None).await;
        assert_eq!(status, StatusCode::OK);
        orders
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["studentName"].as_str().unwrap().to_string())
            .collect()
    }
}

#[tokio::test]
async fn create_returns_order_with_server_fields() {
    let app = TestApp::new();
    let order = app.create("Larissa Silva").await;

    assert!(order["id"].as_str().unwrap().parse::<uuid::Uuid>().is_ok());
    assert_eq!(order["status"], "received");
    assert_eq!(order["createdAt"], "2024-07-30T21:00:00Z");
    assert_eq!(order["orderType"], "Lanche");
}

#[tokio::test]
async fn create_advance_list_end_to_end() {
    let app = TestApp::new();
    let a = app.create("A").await;
    app.create("B").await;
    assert_eq!(app.list_names().await, ["A", "B"]);

    let uri = format!("/api/orders/{}/next", a["id"].as_str().unwrap());
    let (status, moved) = app.send(Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(moved["id"], a["id"]);
    assert_eq!(moved["status"], a["status"]);
    assert_eq!(moved["createdAt"], "2024-07-30T21:00:02Z");

    assert_eq!(app.list_names().await, ["B", "A"]);
}

#[tokio::test]
async fn invalid_payloads_are_rejected_without_storing() {
    let app = TestApp::new();

    let (status, error) = app
        .send(
            Method::POST,
            "/api/orders",
            Some(json!({ "studentName": "A", "orderType": "Lanche" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error["code"], "validation_failed");

    let (status, _) = app
        .send(
            Method::POST,
            "/api/orders",
            Some(json!({
                "studentName": "A",
                "orderType": "Lanche",
                "details": "Toast",
                "status": "cancelled",
            })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = app
        .send(
            Method::POST,
            "/api/orders",
            Some(json!({ "studentName": 7, "orderType": "Lanche", "details": "Toast" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    assert!(app.list_names().await.is_empty());
}

#[tokio::test]
async fn status_patch_changes_only_status() {
    let app = TestApp::new();
    let a = app.create("A").await;
    app.create("B").await;

    let uri = format!("/api/orders/{}/status", a["id"].as_str().unwrap());
    let (status, updated) = app
        .send(Method::PATCH, &uri, Some(json!({ "status": "ready" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "ready");
    assert_eq!(updated["createdAt"], a["createdAt"]);
    assert_eq!(app.list_names().await, ["A", "B"]);

    let (status, _) = app
        .send(Method::PATCH, &uri, Some(json!({ "status": "eaten" })))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let app = TestApp::new();
    app.create("A").await;
    let ghost = uuid::Uuid::new_v4();

    let (status, error) = app
        .send(Method::POST, &format!("/api/orders/{ghost}/next"), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "not_found");

    let (status, _) = app
        .send(
            Method::PATCH,
            &format!("/api/orders/{ghost}/status"),
            Some(json!({ "status": "ready" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.send(Method::GET, "/api/orders/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(app.list_names().await, ["A"]);
}

#[tokio::test]
async fn get_single_order() {
    let app = TestApp::new();
    let a = app.create("A").await;

    let uri = format!("/api/orders/{}", a["id"].as_str().unwrap());
    let (status, order) = app.send(Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(order, a);
}

#[tokio::test]
async fn queue_view_caps_visible_cards() {
    let app = TestApp::new();
    for name in ["Ana Costa", "B", "C", "D", "E", "F", "G", "H"] {
        app.create(name).await;
    }

    let (status, view) = app.send(Method::GET, "/api/queue", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["totalOrders"], 8);
    assert_eq!(view["cards"].as_array().unwrap().len(), 5);
    assert_eq!(view["canAdvance"], true);

    let head = &view["cards"][0];
    assert_eq!(head["ticket"], "#001");
    assert_eq!(head["initials"], "AC");
    assert_eq!(head["avatarColor"], "blue");
    assert_eq!(head["statusBadge"]["text"], "Order received");
    assert_eq!(head["orderedAt"], "21:00:00");

    let (_, view) = app.send(Method::GET, "/api/queue?limit=3", None).await;
    assert_eq!(view["cards"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn empty_queue_view() {
    let app = TestApp::new();
    let (status, view) = app.send(Method::GET, "/api/queue", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["totalOrders"], 0);
    assert_eq!(view["head"], Value::Null);
    assert_eq!(view["canAdvance"], false);
}

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::new();
    let (status, body) = app.send(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "order-queue");
}
