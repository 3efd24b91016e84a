//! End-to-end API tests against an in-memory database.

use actix_web::{App, test, web};
use serde_json::{Value, json};

use rust_coursesystem::routes;
use rust_coursesystem::storage::create_storage_with_url;

macro_rules! init_app {
    () => {{
        let storage = create_storage_with_url(":memory:")
            .await
            .expect("in-memory storage");
        test::init_service(
            App::new()
                .app_data(
                    web::JsonConfig::default()
                        .error_handler(rust_coursesystem::utils::json_error_handler),
                )
                .app_data(web::Data::new(storage))
                .configure(routes::configure_course_routes)
                .configure(routes::configure_user_routes),
        )
        .await
    }};
}

macro_rules! post_json {
    ($app:expr, $path:expr, $body:expr $(,)?) => {
        async {
            let req = test::TestRequest::post()
                .uri($path)
                .set_json($body)
                .to_request();
            let resp = test::call_service($app, req).await;
            let status = resp.status().as_u16();
            let body: Value = test::read_body_json(resp).await;
            (status, body)
        }
    };
}

macro_rules! get_json {
    ($app:expr, $path:expr $(,)?) => {
        async {
            let req = test::TestRequest::get().uri($path).to_request();
            let resp = test::call_service($app, req).await;
            let status = resp.status().as_u16();
            let body: Value = test::read_body_json(resp).await;
            (status, body)
        }
    };
}

#[actix_web::test]
async fn test_create_then_get_course_returns_identical_fields() {
    let app = init_app!();

    let (status, created) = post_json!(
        &app,
        "/api/courses/",
        json!({"code": "CS 1998", "name": "Intro to Backend Development"}),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(created["code"], "CS 1998");
    assert_eq!(created["name"], "Intro to Backend Development");
    assert_eq!(created["assignments"], json!([]));
    assert_eq!(created["students"], json!([]));
    assert_eq!(created["instructors"], json!([]));

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = get_json!(&app, &format!("/api/courses/{id}/")).await;
    assert_eq!(status, 200);
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn test_list_courses_on_api_path_and_root() {
    let app = init_app!();

    let (_, a) = post_json!(&app, "/api/courses/", json!({"code": "A", "name": "a"})).await;
    let (_, b) = post_json!(&app, "/api/courses/", json!({"code": "B", "name": "b"})).await;

    let (status, listed) = get_json!(&app, "/api/courses/").await;
    assert_eq!(status, 200);
    let courses = listed["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0], a);
    assert_eq!(courses[1], b);

    // the root path is an alias for the course list
    let (status, root) = get_json!(&app, "/").await;
    assert_eq!(status, 200);
    assert_eq!(root, listed);
}

#[actix_web::test]
async fn test_create_course_missing_fields() {
    let app = init_app!();

    let (status, body) = post_json!(&app, "/api/courses/", json!({"name": "no code"})).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Provide course code");

    let (status, body) = post_json!(&app, "/api/courses/", json!({"code": "CS 1998"})).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Provide course name");

    // blank after trim counts as missing
    let (status, body) = post_json!(
        &app,
        "/api/courses/",
        json!({"code": "   ", "name": "blank code"}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Provide course code");
}

#[actix_web::test]
async fn test_get_and_delete_missing_course() {
    let app = init_app!();

    let (status, body) = get_json!(&app, "/api/courses/999/").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Course not found");

    let req = test::TestRequest::delete()
        .uri("/api/courses/999/")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_non_numeric_course_id_is_rejected() {
    let app = init_app!();

    let (status, body) = get_json!(&app, "/api/courses/abc/").await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid course id");
}

#[actix_web::test]
async fn test_delete_course_returns_course_and_cascades() {
    let app = init_app!();

    let (_, course) = post_json!(
        &app,
        "/api/courses/",
        json!({"code": "CS 1998", "name": "Intro to Backend Development"}),
    )
    .await;
    let id = course["id"].as_i64().unwrap();

    let (_, assignment) = post_json!(
        &app,
        &format!("/api/courses/{id}/assignment/"),
        json!({"title": "PA1", "due_date": 1700000000}),
    )
    .await;
    let assignment_id = assignment["id"].clone();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/courses/{id}/"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let deleted: Value = test::read_body_json(resp).await;
    assert_eq!(deleted["id"].as_i64().unwrap(), id);
    assert_eq!(deleted["assignments"][0]["id"], assignment_id);

    let (status, _) = get_json!(&app, &format!("/api/courses/{id}/")).await;
    assert_eq!(status, 404);

    // the course is gone from the list as well
    let (_, listed) = get_json!(&app, "/api/courses/").await;
    assert_eq!(listed["courses"], json!([]));
}

#[actix_web::test]
async fn test_create_then_get_user() {
    let app = init_app!();

    let (status, created) = post_json!(
        &app,
        "/api/users/",
        json!({"name": "Alice", "netid": "ab123"}),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(created["name"], "Alice");
    assert_eq!(created["netid"], "ab123");
    assert_eq!(created["courses"], json!([]));

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = get_json!(&app, &format!("/api/users/{id}/")).await;
    assert_eq!(status, 200);
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn test_create_user_missing_fields() {
    let app = init_app!();

    let (status, body) = post_json!(&app, "/api/users/", json!({"name": "Alice"})).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Provide user netid");

    let (status, body) = post_json!(&app, "/api/users/", json!({"netid": "ab123"})).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Provide user name");
}

#[actix_web::test]
async fn test_get_missing_user() {
    let app = init_app!();

    let (status, body) = get_json!(&app, "/api/users/999/").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "User not found");
}

#[actix_web::test]
async fn test_add_student_populates_students() {
    let app = init_app!();

    let (_, course) = post_json!(&app, "/api/courses/", json!({"code": "C", "name": "c"})).await;
    let course_id = course["id"].as_i64().unwrap();
    let (_, user) = post_json!(
        &app,
        "/api/users/",
        json!({"name": "Alice", "netid": "ab123"}),
    )
    .await;
    let user_id = user["id"].as_i64().unwrap();

    let (status, updated) = post_json!(
        &app,
        &format!("/api/courses/{course_id}/add/"),
        json!({"user_id": user_id, "type": "student"}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(updated["students"][0]["netid"], "ab123");
    assert_eq!(updated["instructors"], json!([]));
}

#[actix_web::test]
async fn test_add_instructor_populates_instructors() {
    let app = init_app!();

    let (_, course) = post_json!(&app, "/api/courses/", json!({"code": "C", "name": "c"})).await;
    let course_id = course["id"].as_i64().unwrap();
    let (_, user) = post_json!(&app, "/api/users/", json!({"name": "Bob", "netid": "bc456"})).await;
    let user_id = user["id"].as_i64().unwrap();

    let (status, updated) = post_json!(
        &app,
        &format!("/api/courses/{course_id}/add/"),
        json!({"user_id": user_id, "type": "instructor"}),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(updated["instructors"][0]["netid"], "bc456");
    assert_eq!(updated["students"], json!([]));
}

#[actix_web::test]
async fn test_add_course_user_validation() {
    let app = init_app!();

    let (_, course) = post_json!(&app, "/api/courses/", json!({"code": "C", "name": "c"})).await;
    let course_id = course["id"].as_i64().unwrap();
    let (_, user) = post_json!(
        &app,
        "/api/users/",
        json!({"name": "Alice", "netid": "ab123"}),
    )
    .await;
    let user_id = user["id"].as_i64().unwrap();

    // unknown course
    let (status, body) = post_json!(
        &app,
        "/api/courses/999/add/",
        json!({"user_id": user_id, "type": "student"}),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Course not found");

    // missing user id
    let (status, body) = post_json!(
        &app,
        &format!("/api/courses/{course_id}/add/"),
        json!({"type": "student"}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Provide user id");

    // missing type
    let (status, body) = post_json!(
        &app,
        &format!("/api/courses/{course_id}/add/"),
        json!({"user_id": user_id}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Provide type of user");

    // unknown user
    let (status, body) = post_json!(
        &app,
        &format!("/api/courses/{course_id}/add/"),
        json!({"user_id": 999, "type": "student"}),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "User not found");

    // a type outside student/instructor is rejected at deserialization
    let (status, body) = post_json!(
        &app,
        &format!("/api/courses/{course_id}/add/"),
        json!({"user_id": user_id, "type": "grader"}),
    )
    .await;
    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("Invalid"));
}

#[actix_web::test]
async fn test_user_courses_include_enrolled_and_taught() {
    let app = init_app!();

    let (_, enrolled) = post_json!(
        &app,
        "/api/courses/",
        json!({"code": "CS 1998", "name": "Intro to Backend Development"}),
    )
    .await;
    let (_, taught) = post_json!(
        &app,
        "/api/courses/",
        json!({"code": "CS 3110", "name": "Functional Programming"}),
    )
    .await;
    let (_, user) = post_json!(
        &app,
        "/api/users/",
        json!({"name": "Alice", "netid": "ab123"}),
    )
    .await;
    let user_id = user["id"].as_i64().unwrap();

    post_json!(
        &app,
        &format!("/api/courses/{}/add/", enrolled["id"]),
        json!({"user_id": user_id, "type": "student"}),
    )
    .await;
    post_json!(
        &app,
        &format!("/api/courses/{}/add/", taught["id"]),
        json!({"user_id": user_id, "type": "instructor"}),
    )
    .await;

    let (status, fetched) = get_json!(&app, &format!("/api/users/{user_id}/")).await;
    assert_eq!(status, 200);
    let codes: Vec<&str> = fetched["courses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["CS 1998", "CS 3110"]);
}

#[actix_web::test]
async fn test_add_assignment() {
    let app = init_app!();

    let (_, course) = post_json!(
        &app,
        "/api/courses/",
        json!({"code": "CS 1998", "name": "Intro to Backend Development"}),
    )
    .await;
    let course_id = course["id"].as_i64().unwrap();

    let (status, assignment) = post_json!(
        &app,
        &format!("/api/courses/{course_id}/assignment/"),
        json!({"title": "PA4", "due_date": 1700000000}),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(assignment["title"], "PA4");
    assert_eq!(assignment["due_date"], 1700000000);
    assert_eq!(assignment["course"]["id"].as_i64().unwrap(), course_id);
    assert_eq!(assignment["course"]["code"], "CS 1998");

    // the assignment shows up on the course afterwards
    let (_, fetched) = get_json!(&app, &format!("/api/courses/{course_id}/")).await;
    assert_eq!(fetched["assignments"][0]["title"], "PA4");
}

#[actix_web::test]
async fn test_add_assignment_validation() {
    let app = init_app!();

    let (_, course) = post_json!(&app, "/api/courses/", json!({"code": "C", "name": "c"})).await;
    let course_id = course["id"].as_i64().unwrap();

    let (status, body) = post_json!(
        &app,
        "/api/courses/999/assignment/",
        json!({"title": "PA1", "due_date": 1700000000}),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Course not found");

    let (status, body) = post_json!(
        &app,
        &format!("/api/courses/{course_id}/assignment/"),
        json!({"due_date": 1700000000}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Provide title for assignment");

    let (status, body) = post_json!(
        &app,
        &format!("/api/courses/{course_id}/assignment/"),
        json!({"title": "PA1"}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Provide due date for assignment");
}

#[actix_web::test]
async fn test_malformed_json_body_is_a_400_with_json_error() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/courses/")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().is_some());
}
