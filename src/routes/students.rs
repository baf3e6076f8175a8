use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::marks::requests::SaveMarkItem;
use crate::models::students::requests::{
    CreateStudentRequest, StudentQueryParams, UpdateStudentRequest,
};
use crate::services::StudentService;
use crate::utils::SafeStudentId;

static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentQueryParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req, query.into_inner()).await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(&req, student_data.into_inner())
        .await
}

pub async fn get_student(req: HttpRequest, student_id: SafeStudentId) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(&req, student_id.0).await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: SafeStudentId,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(&req, student_id.0, update_data.into_inner())
        .await
}

pub async fn delete_student(
    req: HttpRequest,
    student_id: SafeStudentId,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&req, student_id.0).await
}

pub async fn save_marks(
    req: HttpRequest,
    student_id: SafeStudentId,
    items: web::Json<Vec<SaveMarkItem>>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .save_marks(&req, student_id.0, items.into_inner())
        .await
}

pub async fn get_marksheet(
    req: HttpRequest,
    student_id: SafeStudentId,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_marksheet(&req, student_id.0).await
}

// 配置路由
pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/students")
            .service(
                // ?classId= 按班级过滤
                web::resource("")
                    .route(web::get().to(list_students))
                    .route(web::post().to(create_student).wrap(middlewares::RequireJWT)),
            )
            .service(
                web::resource("/{student_id}")
                    .route(web::get().to(get_student))
                    .route(web::patch().to(update_student).wrap(middlewares::RequireJWT))
                    .route(web::delete().to(delete_student).wrap(middlewares::RequireJWT)),
            )
            .service(
                // 成绩单编辑页整批保存
                web::resource("/{student_id}/marks")
                    .route(web::post().to(save_marks).wrap(middlewares::RequireJWT)),
            )
            .service(
                web::resource("/{student_id}/marksheet").route(web::get().to(get_marksheet)),
            ),
    );
}
