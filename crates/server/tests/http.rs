//! HTTP integration tests.
//!
//! Starts the axum app on a random port and exercises it with reqwest.

use std::path::Path;

use catalog::{Movie, MovieCatalog};
use reqwest::{Client, Method, StatusCode};
use serde_json::{Value, json};
use server::{AppState, ServerConfig};

fn movie(id: u32, title: &str, genre: &[&str]) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        year: 1994,
        director: "Quentin Tarantino".to_string(),
        duration: 154,
        poster: format!("https://example.com/{id}.jpg"),
        genre: genre.iter().map(|g| g.to_string()).collect(),
        rate: 8.9,
    }
}

fn fixture_catalog() -> MovieCatalog {
    MovieCatalog::from_movies(vec![
        movie(1, "Pulp Fiction", &["Crime", "Drama"]),
        movie(2, "Speed", &["Action", "Thriller"]),
    ])
    .unwrap()
}

fn new_movie_body() -> Value {
    json!({
        "title": "Inception",
        "year": 2010,
        "director": "Christopher Nolan",
        "duration": 148,
        "poster": "https://m.media-amazon.com/images/I/91Rc8cAmnAL._AC_UF1000,1000_QL80_.jpg",
        "genre": ["Action", "Adventure", "Sci-Fi"],
        "rate": 8.8
    })
}

/// Bind to port 0 and return the base URL.
async fn start_server_with(catalog: MovieCatalog, static_dir: &Path) -> String {
    let config = ServerConfig {
        static_dir: static_dir.to_path_buf(),
        ..ServerConfig::default()
    };
    let app = server::router(AppState::new(catalog), &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn start_server() -> String {
    start_server_with(fixture_catalog(), Path::new("does-not-exist")).await
}

async fn ids(client: &Client, url: String) -> Vec<u64> {
    let body: Vec<Value> = client.get(url).send().await.unwrap().json().await.unwrap();
    body.iter().map(|m| m["id"].as_u64().unwrap()).collect()
}

#[tokio::test]
async fn welcome_text() {
    let base = start_server().await;

    let resp = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("/movies"));
}

#[tokio::test]
async fn list_all_movies_in_order() {
    let base = start_server().await;
    let client = Client::new();

    assert_eq!(ids(&client, format!("{base}/movies")).await, vec![1, 2]);
}

#[tokio::test]
async fn genre_filter_ignores_case() {
    let base = start_server().await;
    let client = Client::new();

    let lower: Value = client
        .get(format!("{base}/movies?genre=action"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let upper: Value = client
        .get(format!("{base}/movies?genre=ACTION"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(lower, upper);
    assert_eq!(lower.as_array().unwrap().len(), 1);
    assert_eq!(lower[0]["title"], "Speed");
}

#[tokio::test]
async fn unknown_genre_is_404_not_empty_list() {
    let base = start_server().await;

    let resp = reqwest::get(format!("{base}/movies?genre=western")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "No movies found for that genre" }));
}

#[tokio::test]
async fn empty_genre_lists_everything() {
    let base = start_server().await;
    let client = Client::new();

    assert_eq!(ids(&client, format!("{base}/movies?genre=")).await, vec![1, 2]);
}

#[tokio::test]
async fn get_movie_by_id() {
    let base = start_server().await;

    let resp = reqwest::get(format!("{base}/movies/2")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["title"], "Speed");
    assert_eq!(body["genre"], json!(["Action", "Thriller"]));
}

#[tokio::test]
async fn unknown_or_unparsable_id_is_404() {
    let base = start_server().await;
    let client = Client::new();

    for id in ["999", "abc"] {
        let resp = client.get(format!("{base}/movies/{id}")).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Movie not found" }));

        let resp = client.delete(format!("{base}/movies/{id}")).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

#[tokio::test]
async fn id_with_trailing_text_uses_leading_digits() {
    let base = start_server().await;
    let client = Client::new();

    let resp = client.get(format!("{base}/movies/2abc")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], 2);

    let resp = client
        .patch(format!("{base}/movies/2abc"))
        .json(&json!({ "rate": 7.5 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], 2);
    assert_eq!(body["rate"], 7.5);

    let resp = client.get(format!("{base}/movies/1.5")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], 1);

    let resp = client.delete(format!("{base}/movies/2abc")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(ids(&client, format!("{base}/movies")).await, vec![1]);

    let resp = client.get(format!("{base}/movies/abc")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn repeated_genre_param_is_json_400() {
    let base = start_server().await;

    let resp = reqwest::get(format!("{base}/movies?genre=drama&genre=crime"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn create_past_the_last_id_is_500() {
    let catalog = MovieCatalog::from_movies(vec![movie(u32::MAX, "Speed", &["Action"])]).unwrap();
    let base = start_server_with(catalog, Path::new("does-not-exist")).await;
    let client = Client::new();

    let resp = client
        .post(format!("{base}/movies"))
        .json(&new_movie_body())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    assert_eq!(ids(&client, format!("{base}/movies")).await, vec![u32::MAX as u64]);
}

#[tokio::test]
async fn create_assigns_last_id_plus_one() {
    let base = start_server().await;
    let client = Client::new();

    let resp = client
        .post(format!("{base}/movies"))
        .json(&new_movie_body())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["id"], 3);
    assert_eq!(created["title"], "Inception");

    assert_eq!(ids(&client, format!("{base}/movies")).await, vec![1, 2, 3]);
}

#[tokio::test]
async fn create_defaults_rate_to_zero() {
    let base = start_server().await;
    let client = Client::new();

    let mut body = new_movie_body();
    body.as_object_mut().unwrap().remove("rate");

    let created: Value = client
        .post(format!("{base}/movies"))
        .json(&body)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["rate"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn create_with_invalid_year_is_400() {
    let base = start_server().await;
    let client = Client::new();

    let mut body = new_movie_body();
    body["year"] = json!(1700);

    let resp = client
        .post(format!("{base}/movies"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.unwrap();
    let issues = body["error"].as_array().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["path"], json!(["year"]));
    assert_eq!(issues[0]["code"], "too_small");

    // nothing was stored
    assert_eq!(ids(&client, format!("{base}/movies")).await, vec![1, 2]);
}

#[tokio::test]
async fn malformed_json_is_400() {
    let base = start_server().await;
    let client = Client::new();

    let resp = client
        .post(format!("{base}/movies"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn patch_overwrites_only_supplied_fields() {
    let base = start_server().await;
    let client = Client::new();

    let resp = client
        .patch(format!("{base}/movies/1"))
        .json(&json!({ "year": 1995, "rate": 9.1, "id": 77 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["year"], 1995);
    assert_eq!(updated["rate"], 9.1);
    assert_eq!(updated["title"], "Pulp Fiction");
    assert_eq!(updated["director"], "Quentin Tarantino");
    assert_eq!(updated["genre"], json!(["Crime", "Drama"]));

    let fetched: Value = client
        .get(format!("{base}/movies/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn patch_validation_and_missing_ids() {
    let base = start_server().await;
    let client = Client::new();

    let resp = client
        .patch(format!("{base}/movies/1"))
        .json(&json!({ "poster": "not-a-url" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"][0]["path"], json!(["poster"]));

    let resp = client
        .patch(format!("{base}/movies/404"))
        .json(&json!({ "title": "Ghost" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_then_create_sequence() {
    let base = start_server().await;
    let client = Client::new();

    let created: Value = client
        .post(format!("{base}/movies"))
        .json(&new_movie_body())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(created["id"], 3);

    let resp = client.delete(format!("{base}/movies/1")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Movie deleted" }));

    assert_eq!(ids(&client, format!("{base}/movies")).await, vec![2, 3]);

    let resp = client.get(format!("{base}/movies/1")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn foreign_origin_is_rejected_before_the_handler() {
    let base = start_server().await;
    let client = Client::new();

    let resp = client
        .get(format!("{base}/movies"))
        .header("origin", "http://evil.com")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = client
        .delete(format!("{base}/movies/1"))
        .header("origin", "http://evil.com")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // the delete never ran
    let resp = client.get(format!("{base}/movies/1")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn allowed_origin_gets_cors_headers() {
    let base = start_server().await;
    let client = Client::new();

    let resp = client
        .get(format!("{base}/movies"))
        .header("origin", "http://localhost:8080")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()["access-control-allow-origin"],
        "http://localhost:8080"
    );
}

#[tokio::test]
async fn movies_preflight_skips_allow_list() {
    let base = start_server().await;
    let client = Client::new();

    let resp = client
        .request(Method::OPTIONS, format!("{base}/movies"))
        .header("origin", "http://evil.com")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["access-control-allow-origin"], "http://evil.com");
    assert_eq!(
        resp.headers()["access-control-allow-methods"],
        "GET, POST, PATCH, DELETE, OPTIONS"
    );
}

#[tokio::test]
async fn preflight_on_other_paths_uses_allow_list() {
    let base = start_server().await;
    let client = Client::new();

    let resp = client
        .request(Method::OPTIONS, format!("{base}/movies/1"))
        .header("origin", "http://movies.com")
        .header("access-control-request-method", "PATCH")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(resp.headers()["access-control-allow-origin"], "http://movies.com");
    assert_eq!(resp.headers()["access-control-allow-headers"], "content-type");

    let resp = client
        .request(Method::OPTIONS, format!("{base}/movies/1"))
        .header("origin", "http://evil.com")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn static_assets_are_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('movies')").unwrap();

    let base = start_server_with(fixture_catalog(), dir.path()).await;

    let resp = reqwest::get(format!("{base}/app.js")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "console.log('movies')");

    let resp = reqwest::get(format!("{base}/missing.css")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
