#![cfg(feature = "ssr")]

use actix_http::Request;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use brewstop::api;
use brewstop::auth::session_middleware;
use brewstop::db::Database;
use serde_json::{json, Value};

async fn seeded_app() -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    let db = Database::new(":memory:").unwrap();
    db.create_schema().await.unwrap();
    db.seed_if_empty().await.unwrap();

    test::init_service(
        App::new()
            .wrap(session_middleware(Key::generate()))
            .app_data(web::Data::new(db))
            .configure(api::configure),
    )
    .await
}

fn session_cookie(resp: &ServiceResponse) -> Cookie<'static> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "brewstop_session")
        .map(|c| c.into_owned())
        .expect("login sets the session cookie")
}

async fn get_json(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    uri: &str,
) -> (StatusCode, Value) {
    let resp = test::call_service(app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = resp.status();
    (status, test::read_body_json(resp).await)
}

fn names(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect()
}

#[actix_web::test]
async fn lists_searches_and_filters_cafes() {
    let app = seeded_app().await;

    let (status, all) = get_json(&app, "/api/cafes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 5);

    let (_, empty_search) = get_json(&app, "/api/cafes?search=").await;
    assert_eq!(empty_search.as_array().unwrap().len(), 5);

    let (_, blank_search) = get_json(&app, "/api/cafes?search=%20%20").await;
    assert_eq!(blank_search.as_array().unwrap().len(), 5);

    let (_, found) = get_json(&app, "/api/cafes?search=river%20rd").await;
    assert_eq!(names(&found), vec!["Riverbank Coffee"]);

    let (_, water) = get_json(&app, "/api/cafes?hasWaterRefill=true").await;
    assert_eq!(water.as_array().unwrap().len(), 3);

    let (_, water_indoors) =
        get_json(&app, "/api/cafes?hasWaterRefill=true&hasOutdoorSeating=false").await;
    assert_eq!(names(&water_indoors), vec!["Green Bean Café"]);
}

#[actix_web::test]
async fn single_cafe_and_its_reviews() {
    let app = seeded_app().await;
    let (_, all) = get_json(&app, "/api/cafes").await;
    let latte = &all[0];
    assert_eq!(latte["name"], "Café Latte");
    let id = latte["id"].as_str().unwrap();

    let (status, cafe) = get_json(&app, &format!("/api/cafes/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cafe["id"], id);
    assert_eq!(cafe["ratingCount"], 2);

    let (status, reviews) = get_json(&app, &format!("/api/cafes/{id}/reviews")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reviews.as_array().unwrap().len(), 2);
    assert!(reviews.as_array().unwrap().iter().all(|r| r["cafeId"] == id));

    let (status, missing) = get_json(&app, "/api/cafes/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["message"], "Café not found");
}

#[actix_web::test]
async fn creating_a_cafe_requires_login() {
    let app = seeded_app().await;
    let body = json!({
        "name": "Hill Top Café",
        "address": "1 Summit Rd",
        "latitude": 51.5,
        "longitude": -0.12,
        "hasBikeRacks": true
    });

    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/api/cafes").set_json(&body).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["message"], "Login required");

    let login = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "firstName": "Ada", "email": "ada@example.com" }))
            .to_request(),
    )
    .await;
    assert_eq!(login.status(), StatusCode::OK);
    let cookie = session_cookie(&login);
    let user: Value = test::read_body_json(login).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/cafes")
            .cookie(cookie.clone())
            .set_json(&body)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["name"], "Hill Top Café");
    assert_eq!(created["userId"], user["id"]);
    assert_eq!(created["ratingCount"], 0);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/auth/user")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let me: Value = test::read_body_json(resp).await;
    assert_eq!(me["firstName"], "Ada");

    let (_, all) = get_json(&app, "/api/cafes").await;
    assert_eq!(all.as_array().unwrap().len(), 6);
}

#[actix_web::test]
async fn invalid_cafe_reports_every_field() {
    let app = seeded_app().await;
    let login = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "firstName": "Ada" }))
            .to_request(),
    )
    .await;
    let cookie = session_cookie(&login);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/cafes")
            .cookie(cookie)
            .set_json(json!({ "name": " ", "address": "", "latitude": 95.0, "longitude": 0.0 }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(resp).await;
    let fields: Vec<&str> = error["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "address", "latitude"]);
}

#[actix_web::test]
async fn reviews_are_validated_and_update_ratings() {
    let app = seeded_app().await;
    let (_, all) = get_json(&app, "/api/cafes").await;
    let id = all[4]["id"].as_str().unwrap().to_string();
    let before = all[4]["ratingCount"].as_u64().unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/reviews")
            .set_json(json!({
                "cafeId": id,
                "userName": "Jo",
                "rating": 4,
                "ratingBikeFriendly": 5,
                "comment": "Racks right by the door."
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let review: Value = test::read_body_json(resp).await;
    assert_eq!(review["cafeId"], id.as_str());
    assert!(review["userId"].is_null());

    let (_, cafe) = get_json(&app, &format!("/api/cafes/{id}")).await;
    assert_eq!(cafe["ratingCount"].as_u64().unwrap(), before + 1);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/reviews")
            .set_json(json!({ "cafeId": id, "userName": "Jo", "rating": 0, "comment": "" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["message"], "Validation failed");
    assert_eq!(error["details"].as_array().unwrap().len(), 2);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/reviews")
            .set_json(json!({ "cafeId": "nope", "userName": "Jo", "rating": 3, "comment": "ok" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn review_author_comes_from_the_session() {
    let app = seeded_app().await;
    let (_, all) = get_json(&app, "/api/cafes").await;
    let id = all[0]["id"].as_str().unwrap().to_string();

    let review = json!({
        "cafeId": id,
        "userId": "someone-else",
        "userName": "Ada",
        "rating": 5,
        "comment": "Great espresso."
    });

    // anonymous callers cannot claim an author either
    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/api/reviews").set_json(&review).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let anonymous: Value = test::read_body_json(resp).await;
    assert!(anonymous["userId"].is_null());

    let login = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "firstName": "Ada" }))
            .to_request(),
    )
    .await;
    let cookie = session_cookie(&login);
    let user: Value = test::read_body_json(login).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/reviews")
            .cookie(cookie)
            .set_json(&review)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["userId"], user["id"]);

    let (_, reviews) = get_json(&app, &format!("/api/cafes/{id}/reviews")).await;
    let stored = reviews
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == created["id"])
        .expect("review is listed");
    assert_eq!(stored["userId"], user["id"]);
    assert!(reviews
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["userId"] != "someone-else"));
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let app = seeded_app().await;
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/reviews")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(resp).await;
    assert!(error["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[actix_web::test]
async fn logout_ends_the_session() {
    let app = seeded_app().await;

    let (status, _) = get_json(&app, "/api/auth/user").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let login = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "firstName": "Sam" }))
            .to_request(),
    )
    .await;
    let cookie = session_cookie(&login);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/logout")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let cleared = resp
        .response()
        .cookies()
        .find(|c| c.name() == "brewstop_session")
        .expect("logout clears the cookie");
    assert_eq!(cleared.value(), "");
}
