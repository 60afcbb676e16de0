use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Path, Query, State},
    response::Redirect,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::modules::events::adapters::inbound::error::HttpError;
use crate::modules::events::core::event::{Event, EventId};
use crate::shell::state::AppState;

pub const CREATED_MESSAGE: &str = "Evento criado com sucesso";
pub const COLLECTION_PATH: &str = "/eventos/";

#[derive(Debug, Serialize)]
pub struct CreateEventResponse {
    pub message: &'static str,
    pub event_id: EventId,
    pub event: Event,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Deserialize)]
pub struct FindByTitleParams {
    pub title: String,
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Event>, JsonRejection>,
) -> Result<Json<CreateEventResponse>, HttpError> {
    let Json(event) = body?;
    let (event_id, event) = state.events.create(event).await?;
    Ok(Json(CreateEventResponse {
        message: CREATED_MESSAGE,
        event_id,
        event,
    }))
}

/// `/eventos` without the trailing slash; 307 keeps the method and body.
pub async fn redirect_to_collection() -> Redirect {
    Redirect::temporary(COLLECTION_PATH)
}

pub async fn list(State(state): State<AppState>) -> Json<BTreeMap<EventId, Event>> {
    Json(state.events.list().await)
}

pub async fn find_by_title(
    State(state): State<AppState>,
    params: Result<Query<FindByTitleParams>, QueryRejection>,
) -> Result<Json<BTreeMap<EventId, Event>>, HttpError> {
    let Query(params) = params?;
    let (id, event) = state.events.find_by_title(&params.title).await?;
    Ok(Json(BTreeMap::from([(id, event)])))
}

pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<EventId>, PathRejection>,
    body: Result<Json<Event>, JsonRejection>,
) -> Result<Json<MessageResponse>, HttpError> {
    let Path(id) = id?;
    let Json(event) = body?;
    state.events.update(id, event).await?;
    Ok(Json(MessageResponse {
        message: format!("Evento com ID {id} atualizado com sucesso"),
    }))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<EventId>, PathRejection>,
) -> Result<Json<MessageResponse>, HttpError> {
    let Path(id) = id?;
    state.events.delete(id).await?;
    Ok(Json(MessageResponse {
        message: format!("Evento com ID {id} deletado com sucesso"),
    }))
}

#[cfg(test)]
mod events_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::shared::infrastructure::mirror::in_memory::InMemoryMirror;
    use crate::shell::http::router;
    use crate::shell::state::AppState;
    use crate::test_support::fixtures::event::EventBuilder;

    fn make_test_state() -> AppState {
        AppState::new(Arc::new(InMemoryMirror::new())).unwrap()
    }

    fn make_offline_mirror_state() -> AppState {
        let mut mirror = InMemoryMirror::new();
        mirror.toggle_offline();
        AppState::new(Arc::new(mirror)).unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn put_json(uri: &str, body: String) -> Request<Body> {
        Request::put(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn delete(uri: &str) -> Request<Body> {
        Request::delete(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn it_should_return_200_with_message_id_and_event_on_create() {
        let app = router(make_test_state());

        let (status, json) = send(&app, post_json("/eventos/", EventBuilder::new().to_json())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({
                "message": "Evento criado com sucesso",
                "event_id": 1,
                "event": {
                    "title": "Meetup",
                    "description": "d",
                    "date": "2024-01-01",
                    "time": "18:00",
                    "location": "Lab",
                    "cost": "0"
                }
            })
        );
    }

    #[tokio::test]
    async fn it_should_return_422_on_incomplete_payload() {
        let app = router(make_test_state());

        let (status, json) = send(&app, post_json("/eventos/", r#"{"title":"Meetup"}"#.into())).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json.get("detail").is_some());
    }

    #[tokio::test]
    async fn it_should_reject_invalid_json_without_touching_the_registry() {
        let app = router(make_test_state());

        let (status, _) = send(&app, post_json("/eventos/", "not-json".into())).await;
        let (_, listed) = send(&app, get("/eventos/")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(listed, json!({}));
    }

    #[tokio::test]
    async fn it_should_list_events_keyed_by_identifier() {
        let app = router(make_test_state());
        send(&app, post_json("/eventos/", EventBuilder::new().title("A").to_json())).await;
        send(&app, post_json("/eventos/", EventBuilder::new().title("B").to_json())).await;

        let (status, json) = send(&app, get("/eventos/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["1"]["title"], "A");
        assert_eq!(json["2"]["title"], "B");
    }

    #[tokio::test]
    async fn it_should_find_an_event_by_exact_title() {
        let app = router(make_test_state());
        send(&app, post_json("/eventos/", EventBuilder::new().title("Tech Talk").to_json())).await;

        let (status, json) = send(&app, get("/eventos/consulta?title=Tech%20Talk")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["1"]["title"], "Tech Talk");
    }

    #[tokio::test]
    async fn it_should_return_404_when_no_title_matches() {
        let app = router(make_test_state());
        send(&app, post_json("/eventos/", EventBuilder::new().title("Meetup").to_json())).await;

        let (status, json) = send(&app, get("/eventos/consulta?title=meetup")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, json!({ "detail": "Evento não encontrado" }));
    }

    #[tokio::test]
    async fn it_should_return_422_when_title_is_missing() {
        let app = router(make_test_state());

        let (status, _) = send(&app, get("/eventos/consulta")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_update_an_existing_event() {
        let app = router(make_test_state());
        send(&app, post_json("/eventos/", EventBuilder::new().to_json())).await;

        let (status, json) = send(&app, put_json("/eventos/1", EventBuilder::new().cost("10").to_json())).await;
        let (_, listed) = send(&app, get("/eventos/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "message": "Evento com ID 1 atualizado com sucesso" }));
        assert_eq!(listed["1"]["cost"], "10");
    }

    #[tokio::test]
    async fn it_should_return_404_when_updating_an_absent_event() {
        let app = router(make_test_state());

        let (status, json) = send(&app, put_json("/eventos/9", EventBuilder::new().to_json())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, json!({ "detail": "Evento não encontrado" }));
    }

    #[tokio::test]
    async fn it_should_return_422_when_the_identifier_is_not_a_number() {
        let app = router(make_test_state());

        let (status, _) = send(&app, delete("/eventos/abc")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[rstest]
    #[case::update_negative(Request::put("/eventos/-1"), true)]
    #[case::delete_negative(Request::delete("/eventos/-1"), false)]
    #[case::update_zero(Request::put("/eventos/0"), true)]
    #[tokio::test]
    async fn it_should_return_404_for_integer_identifiers_never_assigned(
        #[case] builder: axum::http::request::Builder,
        #[case] with_body: bool,
    ) {
        let app = router(make_test_state());
        send(&app, post_json("/eventos/", EventBuilder::new().to_json())).await;
        let request = if with_body {
            builder
                .header("content-type", "application/json")
                .body(Body::from(EventBuilder::new().to_json()))
                .unwrap()
        } else {
            builder.body(Body::empty()).unwrap()
        };

        let (status, json) = send(&app, request).await;
        let (_, listed) = send(&app, get("/eventos/")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, json!({ "detail": "Evento não encontrado" }));
        assert_eq!(listed["1"]["title"], "Meetup");
    }

    #[rstest]
    #[case::list(Request::get("/eventos"))]
    #[case::create(Request::post("/eventos"))]
    #[tokio::test]
    async fn it_should_redirect_the_collection_path_without_trailing_slash(
        #[case] builder: axum::http::request::Builder,
    ) {
        let response = router(make_test_state())
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/eventos/");
    }

    #[tokio::test]
    async fn it_should_delete_an_event_and_then_report_it_missing() {
        let app = router(make_test_state());
        send(&app, post_json("/eventos/", EventBuilder::new().to_json())).await;

        let (status, json) = send(&app, delete("/eventos/1")).await;
        let (second_status, _) = send(&app, delete("/eventos/1")).await;
        let (_, listed) = send(&app, get("/eventos/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "message": "Evento com ID 1 deletado com sucesso" }));
        assert_eq!(second_status, StatusCode::NOT_FOUND);
        assert_eq!(listed, json!({}));
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_mirror_is_offline() {
        let app = router(make_offline_mirror_state());

        let (status, json) = send(&app, post_json("/eventos/", EventBuilder::new().to_json())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({ "detail": "Falha ao gravar eventos" }));
    }
}
