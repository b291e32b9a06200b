use crate::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
use crate::shell::config::Settings;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::activities::chess_club_catalog;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn roster(app: &Router, activity: &str) -> Vec<String> {
    let (status, json) = send(app, Method::GET, "/activities").await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_value(json[activity]["participants"].clone()).unwrap()
}

#[tokio::test]
async fn signs_up_and_unregisters_a_chess_club_member() {
    let store = Arc::new(InMemoryActivityStore::new(chess_club_catalog(2, &[])));
    let app = router(AppState::in_memory(store, &Settings::default()));

    let (status, _) = send(&app, Method::POST, "/activities/Chess%20Club/signup?email=a@x.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(roster(&app, "Chess Club").await, vec!["a@x.com"]);

    let (status, json) =
        send(&app, Method::POST, "/activities/Chess%20Club/signup?email=a@x.com").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "Student is already signed up for this activity");

    let (status, json) =
        send(&app, Method::DELETE, "/activities/Chess%20Club/unregister?email=b@x.com").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "Student is not registered for this activity");
    assert_eq!(roster(&app, "Chess Club").await, vec!["a@x.com"]);
}

#[tokio::test]
async fn lists_the_net_roster_after_mixed_operations() {
    let store = Arc::new(InMemoryActivityStore::seeded());
    let app = router(AppState::in_memory(store, &Settings::default()));

    let operations = [
        (Method::POST, "/activities/Chess%20Club/signup?email=user1@mergington.edu"),
        (Method::POST, "/activities/Programming%20Class/signup?email=user1@mergington.edu"),
        (Method::DELETE, "/activities/Chess%20Club/unregister?email=michael@mergington.edu"),
        (Method::POST, "/activities/Gym%20Class/signup?email=user2@mergington.edu"),
        (Method::DELETE, "/activities/Programming%20Class/unregister?email=sophia@mergington.edu"),
    ];
    for (method, uri) in operations {
        let (status, _) = send(&app, method, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
    }

    assert_eq!(
        roster(&app, "Chess Club").await,
        vec!["daniel@mergington.edu", "user1@mergington.edu"]
    );
    assert_eq!(
        roster(&app, "Programming Class").await,
        vec!["emma@mergington.edu", "user1@mergington.edu"]
    );
    assert_eq!(
        roster(&app, "Gym Class").await,
        vec![
            "john@mergington.edu",
            "olivia@mergington.edu",
            "user2@mergington.edu"
        ]
    );
}

#[tokio::test]
async fn returns_to_the_initial_roster_after_signing_up_and_unregistering_the_same_students() {
    let store = Arc::new(InMemoryActivityStore::seeded());
    let app = router(AppState::in_memory(store, &Settings::default()));
    let initial = roster(&app, "Chess Club").await;

    for n in 1..=3 {
        let uri = format!("/activities/Chess%20Club/signup?email=test{n}@mergington.edu");
        assert_eq!(send(&app, Method::POST, &uri).await.0, StatusCode::OK);
    }
    assert_eq!(roster(&app, "Chess Club").await.len(), initial.len() + 3);
    for n in 1..=3 {
        let uri = format!("/activities/Chess%20Club/unregister?email=test{n}@mergington.edu");
        assert_eq!(send(&app, Method::DELETE, &uri).await.0, StatusCode::OK);
    }

    assert_eq!(roster(&app, "Chess Club").await, initial);
}

#[tokio::test]
async fn lets_a_student_rejoin_after_unregistering() {
    let store = Arc::new(InMemoryActivityStore::seeded());
    let app = router(AppState::in_memory(store, &Settings::default()));

    let (status, _) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/unregister?email=daniel@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(
        &app,
        Method::POST,
        "/activities/Chess%20Club/signup?email=daniel@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(
        roster(&app, "Chess Club").await,
        vec!["michael@mergington.edu", "daniel@mergington.edu"]
    );
}

#[tokio::test]
async fn fills_an_activity_to_capacity_only_when_enforced() {
    let settings = Settings {
        enforce_capacity: true,
        ..Settings::default()
    };
    let store = Arc::new(InMemoryActivityStore::seeded());
    let app = router(AppState::in_memory(store.clone(), &settings));

    for n in 0..10 {
        let uri = format!("/activities/Chess%20Club/signup?email=student{n}@mergington.edu");
        assert_eq!(send(&app, Method::POST, &uri).await.0, StatusCode::OK);
    }
    let (status, json) = send(
        &app,
        Method::POST,
        "/activities/Chess%20Club/signup?email=overflow@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "Activity is full");
    assert_eq!(roster(&app, "Chess Club").await.len(), 12);

    store.reset().await;
    let unenforced = router(AppState::in_memory(store, &Settings::default()));
    for n in 0..11 {
        let uri = format!("/activities/Chess%20Club/signup?email=student{n}@mergington.edu");
        assert_eq!(send(&unenforced, Method::POST, &uri).await.0, StatusCode::OK);
    }
    assert_eq!(roster(&unenforced, "Chess Club").await.len(), 13);
}

#[tokio::test]
async fn rejects_unknown_activities_regardless_of_email_or_case() {
    let app = router(AppState::in_memory(
        Arc::new(InMemoryActivityStore::seeded()),
        &Settings::default(),
    ));
    let long_name = "a".repeat(1000);
    let long_name_uri = format!("/activities/{long_name}/signup?email=test@mergington.edu");

    for uri in [
        "/activities/chess%20club/signup?email=test@mergington.edu",
        "/activities/CHESS%20CLUB/signup?email=test@mergington.edu",
        "/activities/Debate%20Team/signup?email=michael@mergington.edu",
        long_name_uri.as_str(),
    ] {
        let (status, json) = send(&app, Method::POST, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(json["detail"], "Activity not found");
    }
    let (status, _) = send(
        &app,
        Method::DELETE,
        "/activities/Debate%20Team/unregister?email=michael@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn preserves_the_catalog_shape_across_operations() {
    let app = router(AppState::in_memory(
        Arc::new(InMemoryActivityStore::seeded()),
        &Settings::default(),
    ));
    let (_, before) = send(&app, Method::GET, "/activities").await;

    send(&app, Method::POST, "/activities/Chess%20Club/signup?email=test1@mergington.edu").await;
    send(&app, Method::DELETE, "/activities/Chess%20Club/unregister?email=michael@mergington.edu").await;
    send(&app, Method::POST, "/activities/Programming%20Class/signup?email=test2@mergington.edu").await;

    let (_, after) = send(&app, Method::GET, "/activities").await;
    let keys = |json: &serde_json::Value| -> Vec<String> {
        json.as_object().unwrap().keys().cloned().collect()
    };
    assert_eq!(keys(&before), keys(&after));
    for (name, activity) in after.as_object().unwrap() {
        for field in ["description", "schedule", "max_participants", "participants"] {
            assert!(activity.get(field).is_some(), "{name} lost {field}");
        }
        assert_eq!(activity["description"], before[name]["description"]);
    }
}
