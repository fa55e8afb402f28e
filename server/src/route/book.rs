use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};

use application::service::{
    CreateBookService, DeleteBookService, GetAllBookService, UpdateBookService,
};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{BookTransformer, CreateBookRequest, DeleteBookRequest, UpdateBookRequest};
use crate::response::{BookPresenter, CreatedBookPresenter};

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl BookRouter for Router<AppModule> {
    fn route_book(self) -> Self {
        self.route(
            "/books",
            get(|State(module): State<AppModule>| async move {
                Controller::new(BookTransformer, BookPresenter)
                    .bypass(|| async move { module.database().get_all_books().await })
                    .await
                    .map_err(ErrorStatus::fetching)
            })
            .post(
                |State(module): State<AppModule>, Json(req): Json<CreateBookRequest>| async move {
                    Controller::new(BookTransformer, CreatedBookPresenter)
                        .try_intake(req)
                        .map_err(ErrorStatus::adding)?
                        .handle(|dto| async move { module.database().create_book(dto).await })
                        .await
                        .map_err(ErrorStatus::adding)
                },
            ),
        )
        .route(
            "/books/:id",
            put(
                |State(module): State<AppModule>,
                 Path(id): Path<i64>,
                 Json(req): Json<UpdateBookRequest>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .try_intake((id, req))
                        .map_err(ErrorStatus::updating)?
                        .handle(|dto| async move { module.database().update_book(dto).await })
                        .await
                        .map_err(ErrorStatus::updating)
                },
            )
            .delete(
                |State(module): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(DeleteBookRequest::new(id))
                        .handle(|dto| async move { module.database().delete_book(dto).await })
                        .await
                        .map_err(ErrorStatus::deleting)
                },
            ),
        )
    }
}

#[cfg(test)]
mod test {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use axum::Router;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use driver::database::SqliteDatabase;

    use crate::handler::AppModule;
    use crate::route::{BookRouter, IndexRouter};

    async fn test_app() -> (tempfile::TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite:{}?mode=rwc", dir.path().join("books.db").display());
        let database = SqliteDatabase::connect(&url).await.unwrap();
        let router = Router::new()
            .route_book()
            .route_index(None)
            .with_state(AppModule::with_database(database));
        (dir, router)
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn delete_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn index_greets() {
        let (_dir, router) = test_app().await;

        let response = router.clone().oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"Hello from the backend!");

        let response = router.oneshot(get_request("/api")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"Hello from the backend!");
    }

    #[tokio::test]
    async fn create_then_list_round_trips() {
        let (_dir, router) = test_app().await;

        let response = router
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/books",
                json!({"title": "Dune", "author": "Herbert"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["title"], "Dune");
        assert_eq!(created["author"], "Herbert");
        let id = created["id"].as_i64().unwrap();

        let response = router.oneshot(get_request("/books")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listed = body_json(response).await;
        assert_eq!(
            listed,
            json!([{"id": id, "title": "Dune", "author": "Herbert"}])
        );
    }

    #[tokio::test]
    async fn list_is_idempotent() {
        let (_dir, router) = test_app().await;

        router
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/books",
                json!({"title": "Dune", "author": "Herbert"}),
            ))
            .await
            .unwrap();

        let first = body_json(router.clone().oneshot(get_request("/books")).await.unwrap()).await;
        let second = body_json(router.oneshot(get_request("/books")).await.unwrap()).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn mutating_a_missing_id_returns_not_found() {
        let (_dir, router) = test_app().await;

        let response = router
            .clone()
            .oneshot(json_request(
                Method::PUT,
                "/books/99999",
                json!({"title": "X", "author": "Y"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"message": "Book not found"}));

        let response = router.oneshot(delete_request("/books/99999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"message": "Book not found"}));
    }

    #[tokio::test]
    async fn update_overwrites_both_fields() {
        let (_dir, router) = test_app().await;

        let created = body_json(
            router
                .clone()
                .oneshot(json_request(
                    Method::POST,
                    "/books",
                    json!({"title": "Dune", "author": "Herbert"}),
                ))
                .await
                .unwrap(),
        )
        .await;
        let id = created["id"].as_i64().unwrap();

        let response = router
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/books/{id}"),
                json!({"title": "X", "author": "Y"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"id": id, "title": "X", "author": "Y"})
        );

        let listed = body_json(router.oneshot(get_request("/books")).await.unwrap()).await;
        assert_eq!(listed, json!([{"id": id, "title": "X", "author": "Y"}]));
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_row() {
        let (_dir, router) = test_app().await;

        for (title, author) in [("Dune", "Herbert"), ("Hyperion", "Simmons")] {
            router
                .clone()
                .oneshot(json_request(
                    Method::POST,
                    "/books",
                    json!({"title": title, "author": author}),
                ))
                .await
                .unwrap();
        }
        let listed = body_json(router.clone().oneshot(get_request("/books")).await.unwrap()).await;
        let id = listed[0]["id"].as_i64().unwrap();

        let response = router
            .clone()
            .oneshot(delete_request(&format!("/books/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(body_bytes(response).await.is_empty());

        let listed = body_json(router.clone().oneshot(get_request("/books")).await.unwrap()).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_ne!(listed[0]["id"].as_i64().unwrap(), id);

        let response = router
            .oneshot(delete_request(&format!("/books/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_rejects_missing_or_blank_fields() {
        let (_dir, router) = test_app().await;

        for body in [
            json!({}),
            json!({"title": "Dune"}),
            json!({"author": "Herbert"}),
            json!({"title": "  ", "author": "Herbert"}),
        ] {
            let response = router
                .clone()
                .oneshot(json_request(Method::POST, "/books", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                body_json(response).await,
                json!({"message": "Title and author are required"})
            );
        }

        let listed = body_json(router.oneshot(get_request("/books")).await.unwrap()).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let (_dir, router) = test_app().await;

        let (first, second) = tokio::join!(
            router.clone().oneshot(json_request(
                Method::POST,
                "/books",
                json!({"title": "Dune", "author": "Herbert"}),
            )),
            router.clone().oneshot(json_request(
                Method::POST,
                "/books",
                json!({"title": "Hyperion", "author": "Simmons"}),
            )),
        );
        let first = body_json(first.unwrap()).await;
        let second = body_json(second.unwrap()).await;

        assert_eq!(first["title"], "Dune");
        assert_eq!(first["author"], "Herbert");
        assert_eq!(second["title"], "Hyperion");
        assert_eq!(second["author"], "Simmons");
        assert_ne!(first["id"].as_i64().unwrap(), second["id"].as_i64().unwrap());
    }

    #[tokio::test]
    async fn full_lifecycle() {
        let (_dir, router) = test_app().await;

        let response = router
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/books",
                json!({"title": "Dune", "author": "Herbert"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let id = body_json(response).await["id"].as_i64().unwrap();

        let listed = body_json(router.clone().oneshot(get_request("/books")).await.unwrap()).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let response = router
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/books/{id}"),
                json!({"title": "Dune Messiah", "author": "Herbert"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"id": id, "title": "Dune Messiah", "author": "Herbert"})
        );

        let response = router
            .clone()
            .oneshot(delete_request(&format!("/books/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let listed = body_json(router.oneshot(get_request("/books")).await.unwrap()).await;
        assert_eq!(listed, json!([]));
    }
}
