use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::cache::object_cache::moka::MokaCacheWrapper;
use crate::models::ErrorCode;
use crate::models::admins::entities::Admin;
use crate::storage::Storage;
use crate::storage::sea_orm_storage::SeaOrmStorage;
use crate::utils::jwt::JwtUtils;
use crate::utils::password::hash_password;
use crate::utils::{json_error_handler, query_error_handler};

const PASSWORD: &str = "Results2024";

async fn test_storage() -> Arc<dyn Storage> {
    Arc::new(SeaOrmStorage::in_memory().await.unwrap())
}

fn test_cache() -> Arc<dyn ObjectCache> {
    Arc::new(MokaCacheWrapper::with_capacity(100, 60))
}

async fn seed_admin(storage: &Arc<dyn Storage>, email: &str, is_super: bool) -> Admin {
    let hash = hash_password(PASSWORD).unwrap();
    storage.create_admin(email, &hash, is_super).await.unwrap()
}

fn bearer(admin: &Admin) -> (&'static str, String) {
    let token = JwtUtils::generate_access_token(admin.id, &admin.role()).unwrap();
    ("Authorization", format!("Bearer {token}"))
}

macro_rules! init_app {
    ($storage:expr) => {
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new($storage.clone()))
                .app_data(web::Data::new(test_cache()))
                .configure(super::configure_api_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_wrong_password_is_rejected_without_identity() {
    let storage = test_storage().await;
    seed_admin(&storage, "owner@school.test", true).await;
    let app = init_app!(storage);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .insert_header(("X-Forwarded-For", "10.0.0.1"))
        .set_json(json!({"email": "owner@school.test", "password": "wrong-Password1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().get("set-cookie").is_none());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], ErrorCode::AuthFailed as i32);
    assert!(body.get("data").is_none());

    // 没有令牌的写操作被拒绝
    let req = test::TestRequest::post()
        .uri("/api/sessions")
        .set_json(json!({"name": "2024-25"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(storage.list_sessions().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_login_grants_mutations() {
    let storage = test_storage().await;
    seed_admin(&storage, "owner@school.test", true).await;
    let app = init_app!(storage);

    // 邮箱大小写与首尾空白不影响登录
    let req = test::TestRequest::post()
        .uri("/api/login")
        .insert_header(("X-Forwarded-For", "10.0.0.2"))
        .set_json(json!({"email": "  Owner@School.TEST ", "password": PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get("set-cookie").is_some());
    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["admin"].get("passwordHash").is_none());
    let token = body["data"]["accessToken"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/sessions")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({"name": "  2024-25 "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get().uri("/api/user").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/user")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["email"], "owner@school.test");

    // 读取公开
    let req = test::TestRequest::get().uri("/api/sessions").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"][0]["name"], "2024-25");
}

#[actix_web::test]
async fn test_settings_are_publicly_readable() {
    let storage = test_storage().await;
    let admin = seed_admin(&storage, "owner@school.test", true).await;
    let app = init_app!(storage);

    let req = test::TestRequest::get().uri("/api/settings/app_name").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["value"], Value::Null);

    let req = test::TestRequest::post()
        .uri("/api/settings")
        .set_json(json!({"key": "app_name", "value": "X"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/settings")
        .insert_header(bearer(&admin))
        .set_json(json!({"key": "app_name", "value": "X"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/settings/app_name").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["value"], "X");

    let req = test::TestRequest::get()
        .uri("/api/settings/bad%20key")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_admin_creation_requires_super_admin() {
    let storage = test_storage().await;
    let owner = seed_admin(&storage, "owner@school.test", true).await;
    let staff = seed_admin(&storage, "staff@school.test", false).await;
    let app = init_app!(storage);

    let payload = json!({"email": "New@School.test", "password": "Teacher2024"});

    let req = test::TestRequest::post()
        .uri("/api/admins")
        .insert_header(bearer(&staff))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri("/api/admins")
        .insert_header(bearer(&owner))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["email"], "new@school.test");
    assert_eq!(body["data"]["isSuperAdmin"], false);

    let req = test::TestRequest::post()
        .uri("/api/admins")
        .insert_header(bearer(&owner))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::post()
        .uri("/api/admins")
        .insert_header(bearer(&owner))
        .set_json(json!({"email": "weak@school.test", "password": "short"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_marksheet_flow() {
    let storage = test_storage().await;
    let admin = seed_admin(&storage, "owner@school.test", true).await;
    let app = init_app!(storage);

    let req = test::TestRequest::post()
        .uri("/api/sessions")
        .insert_header(bearer(&admin))
        .set_json(json!({"name": "2024-25"}))
        .to_request();
    let session: Value = test::call_and_read_body_json(&app, req).await;
    let session_id = session["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/classes")
        .insert_header(bearer(&admin))
        .set_json(json!({"name": "Class 10", "sessionId": session_id}))
        .to_request();
    let class: Value = test::call_and_read_body_json(&app, req).await;
    let class_id = class["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/subjects")
        .insert_header(bearer(&admin))
        .set_json(json!({"name": "Maths", "maxMarks": 80, "date": "2025-03-01", "classId": class_id}))
        .to_request();
    let maths: Value = test::call_and_read_body_json(&app, req).await;
    let maths_id = maths["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/students")
        .insert_header(bearer(&admin))
        .set_json(json!({"name": "Asha", "rollNo": "7", "classId": class_id}))
        .to_request();
    let student: Value = test::call_and_read_body_json(&app, req).await;
    let student_id = student["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri("/api/marks")
        .insert_header(bearer(&admin))
        .set_json(json!({"studentId": student_id, "subjectId": maths_id, "obtained": "40"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // 批量保存：新科目随成绩单一起创建
    let req = test::TestRequest::post()
        .uri(&format!("/api/students/{student_id}/marks"))
        .insert_header(bearer(&admin))
        .set_json(json!([{"subject": "Drawing", "obtained": "20", "max": 20}]))
        .to_request();
    let saved: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(saved["data"]["marks"].as_array().unwrap().len(), 2);

    // 批量保存的科目名与单独创建科目同样限长
    let req = test::TestRequest::post()
        .uri(&format!("/api/students/{student_id}/marks"))
        .insert_header(bearer(&admin))
        .set_json(json!([{"subject": "x".repeat(101), "obtained": "5", "max": 10}]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri(&format!("/api/subjects?classId={class_id}"))
        .to_request();
    let subjects: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(subjects["data"].as_array().unwrap().len(), 2);

    let req = test::TestRequest::get()
        .uri(&format!("/api/students/{student_id}/marksheet"))
        .to_request();
    let sheet: Value = test::call_and_read_body_json(&app, req).await;
    let data = &sheet["data"];
    assert_eq!(data["className"], "Class 10");
    assert_eq!(data["sessionName"], "2024-25");
    assert_eq!(data["institute"]["appName"], "IDEAL INSPIRATION CLASSES");
    assert_eq!(data["rows"].as_array().unwrap().len(), 2);
    assert_eq!(data["summary"]["totalObtained"], 60.0);
    assert_eq!(data["summary"]["totalMax"], 100.0);
    assert_eq!(data["summary"]["percentageDisplay"], "60.00");
    assert_eq!(data["summary"]["status"], "PASSED");

    // 删除班级后学生不可再访问
    let req = test::TestRequest::delete()
        .uri(&format!("/api/classes/{class_id}"))
        .insert_header(bearer(&admin))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/students/{student_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_invalid_requests() {
    let storage = test_storage().await;
    let admin = seed_admin(&storage, "owner@school.test", true).await;
    let app = init_app!(storage);

    let req = test::TestRequest::get().uri("/api/sessions/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // 学期不存在
    let req = test::TestRequest::post()
        .uri("/api/classes")
        .insert_header(bearer(&admin))
        .set_json(json!({"name": "Class 9", "sessionId": 404}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/sessions")
        .insert_header(bearer(&admin))
        .set_json(json!({"name": "   "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::patch()
        .uri("/api/subjects/99")
        .insert_header(bearer(&admin))
        .set_json(json!({"name": "Physics"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
