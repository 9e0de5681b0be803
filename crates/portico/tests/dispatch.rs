//! End-to-end dispatch tests: registration through the route table,
//! matching through the built router, and the full pipeline per
//! request.

use http::{header, Method, StatusCode};
use portico::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
struct User {
    id: String,
    name: String,
}

#[derive(Debug, Clone)]
struct ReadUser {
    id: String,
}

fn build_read(raw: &RawRequest) -> ReadUser {
    ReadUser {
        id: raw.params().get("userId").unwrap_or_default().to_string(),
    }
}

fn read_spec() -> OperationSpec<
    impl Guard<ReadUser>,
    impl Callback<ReadUser, User>,
    ReadUser,
    User,
> {
    OperationSpec::new(
        |candidate: &ReadUser| !candidate.id.is_empty(),
        |candidate: ReadUser| async move {
            Ok(User {
                id: candidate.id,
                name: "x".to_string(),
            })
        },
    )
}

/// Matches a request against the built router and runs its handler.
async fn dispatch(
    router: &PathRouter<RouteHandler>,
    method: Method,
    path: &str,
) -> Option<Disposition> {
    let m = router.match_route(&method, path)?;
    let raw = RawRequest::builder()
        .method(method)
        .uri(path)
        .params(m.params().clone())
        .build();
    Some((m.value())(raw).await)
}

#[tokio::test]
async fn read_route_happy_path() {
    let mut table = RouteTable::new(SerializerRegistry::new());
    table
        .read("/users/{userId}", "getUser", build_read, read_spec())
        .unwrap();
    let router = table.build();

    let response = dispatch(&router, Method::GET, "/users/17")
        .await
        .unwrap()
        .into_response()
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json; charset=utf-8"
    );
    let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body, serde_json::json!({"id": "17", "name": "x"}));
}

#[tokio::test]
async fn read_route_guard_rejection() {
    let mut table = RouteTable::new(SerializerRegistry::new());
    // A literal route, so a request can reach the handler with no
    // userId parameter to extract.
    table
        .read("/users/current", "getCurrentUser", build_read, read_spec())
        .unwrap();
    let router = table.build();

    let response = dispatch(&router, Method::GET, "/users/current")
        .await
        .unwrap()
        .into_response()
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body, serde_json::json!({"code": 400, "status": "Format Error"}));
}

#[tokio::test]
async fn create_route_responds_201() {
    let mut table = RouteTable::new(SerializerRegistry::new());
    table
        .create(
            "/users",
            "createUser",
            |raw: &RawRequest| String::from_utf8_lossy(raw.body()).to_string(),
            OperationSpec::new(
                |name: &String| !name.is_empty(),
                |name: String| async move {
                    Ok(User {
                        id: "1".to_string(),
                        name,
                    })
                },
            ),
        )
        .unwrap();
    let router = table.build();

    let m = router.match_route(&Method::POST, "/users").unwrap();
    let raw = RawRequest::builder()
        .method(Method::POST)
        .uri("/users")
        .body("alice")
        .build();
    let response = (m.value())(raw).await.into_response().unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body["name"], "alice");
}

#[tokio::test]
async fn structured_error_reaches_client_with_own_code() {
    let mut table = RouteTable::new(SerializerRegistry::new());
    table
        .read(
            "/users/{userId}",
            "getUser",
            build_read,
            OperationSpec::new(
                |candidate: &ReadUser| !candidate.id.is_empty(),
                |_: ReadUser| async move { Err::<User, _>(HttpError::NotFound.into()) },
            ),
        )
        .unwrap();
    let router = table.build();

    let response = dispatch(&router, Method::GET, "/users/17")
        .await
        .unwrap()
        .into_response()
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
    assert_eq!(body, serde_json::json!({"code": 404, "status": "Not Found Error"}));
}

#[tokio::test]
async fn unexpected_error_degrades_to_server_error() {
    let mut table = RouteTable::new(SerializerRegistry::new());
    table
        .read(
            "/users/{userId}",
            "getUser",
            build_read,
            OperationSpec::new(
                |candidate: &ReadUser| !candidate.id.is_empty(),
                |_: ReadUser| async move {
                    Err::<User, _>(anyhow::anyhow!("replica lag exceeded").into())
                },
            ),
        )
        .unwrap();
    let router = table.build();

    let response = dispatch(&router, Method::GET, "/users/17")
        .await
        .unwrap()
        .into_response()
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = String::from_utf8_lossy(response.body()).to_string();
    assert!(body.contains("Server Error"));
    assert!(!body.contains("replica lag"));
}

#[tokio::test]
async fn forwarding_hands_error_to_continuation() {
    let mut table = RouteTable::with_config(
        SerializerRegistry::new(),
        TableConfig::new().with_forward_on_error(true),
    );
    table
        .read(
            "/users/{userId}",
            "getUser",
            build_read,
            OperationSpec::new(
                |candidate: &ReadUser| !candidate.id.is_empty(),
                |_: ReadUser| async move { Err::<User, _>(HttpError::Forbidden.into()) },
            ),
        )
        .unwrap();
    let router = table.build();

    let disposition = dispatch(&router, Method::GET, "/users/17").await.unwrap();
    let forwarded = disposition.into_forwarded().unwrap();
    assert_eq!(forwarded.as_http(), Some(HttpError::Forbidden));
}

#[tokio::test]
async fn non_json_mime_uses_registered_serializer() {
    let registry = SerializerRegistry::new()
        .with(MimeType::Json, |value| value.to_string())
        .with(MimeType::Text, |value| {
            format!(
                "{}:{}",
                value["id"].as_str().unwrap_or_default(),
                value["name"].as_str().unwrap_or_default()
            )
        });

    let mut table = RouteTable::new(registry);
    table
        .read(
            "/users/{userId}",
            "getUser",
            build_read,
            read_spec().with_mime(MimeType::Text),
        )
        .unwrap();
    let router = table.build();

    let response = dispatch(&router, Method::GET, "/users/17")
        .await
        .unwrap()
        .into_response()
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
    assert_eq!(response.body().as_ref(), b"17:x");
}

#[tokio::test]
async fn exist_route_dispatches_under_head() {
    let mut table = RouteTable::new(SerializerRegistry::new());
    table
        .exist("/users/{userId}", "userExists", build_read, read_spec())
        .unwrap();
    let router = table.build();

    assert!(router.match_route(&Method::GET, "/users/17").is_none());

    let response = dispatch(&router, Method::HEAD, "/users/17")
        .await
        .unwrap()
        .into_response()
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[test]
fn duplicate_registrations_fail_before_serving() {
    let mut table = RouteTable::new(SerializerRegistry::new());
    table
        .read("/users/{userId}", "getUser", build_read, read_spec())
        .unwrap();

    // same name, different url
    assert!(matches!(
        table.read("/members/{userId}", "getUser", build_read, read_spec()),
        Err(RegistrationError::DuplicateName(_))
    ));

    // same (url, kind) pair, different name
    assert!(matches!(
        table.read("/users/{userId}", "getUserAgain", build_read, read_spec()),
        Err(RegistrationError::DuplicateRoute { .. })
    ));

    // same url, different kind is fine
    table
        .delete("/users/{userId}", "deleteUser", build_read, read_spec())
        .unwrap();

    assert_eq!(table.route_count(), 2);
}
