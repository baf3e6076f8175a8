use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::StudentService;
use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::marksheet::responses::{InstituteHeader, MarksheetResponse, MarksheetRow};
use crate::models::marksheet::{MarkLine, MarkSummary};
use crate::models::settings::entities::KnownSettingKey;
use crate::models::students::entities::StudentWithMarks;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_found};
use crate::storage::Storage;

pub async fn get_marksheet(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let result = match storage.get_student(student_id).await {
        Ok(Some(student)) => build_marksheet(&storage, student).await,
        Ok(None) => return Ok(not_found(ErrorCode::StudentNotFound, "Student not found")),
        Err(e) => Err(e),
    };

    match result {
        Ok(marksheet) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            marksheet,
            "Marksheet generated successfully",
        ))),
        Err(e) => Ok(error_response(
            &e,
            ErrorCode::StudentNotFound,
            ErrorCode::StudentInvalid,
        )),
    }
}

async fn build_marksheet(
    storage: &Arc<dyn Storage>,
    student: StudentWithMarks,
) -> Result<MarksheetResponse> {
    let institute = load_institute_header(storage).await?;

    let class = storage.get_class(student.student.class_id).await?;
    let session_name = match &class {
        Some(class) => storage
            .get_session(class.session_id)
            .await?
            .map(|session| session.name),
        None => None,
    };

    let rows: Vec<MarksheetRow> = student
        .marks
        .into_iter()
        .map(|entry| MarksheetRow {
            mark_id: entry.mark.id,
            subject_id: entry.subject.id,
            subject: entry.subject.name,
            date: entry.subject.date,
            obtained: entry.mark.obtained,
            max: entry.subject.max_marks,
        })
        .collect();

    let summary = MarkSummary::compute(
        rows.iter()
            .map(|row| MarkLine::from_stored(&row.obtained, row.max)),
    );

    Ok(MarksheetResponse {
        institute,
        student: student.student,
        class_name: class.map(|class| class.name),
        session_name,
        rows,
        summary,
    })
}

/// 抬头取自设置，未设置或为空时使用配置中的默认值
async fn load_institute_header(storage: &Arc<dyn Storage>) -> Result<InstituteHeader> {
    let defaults = &AppConfig::get().institute;

    let app_name = storage.get_setting(KnownSettingKey::AppName.as_str()).await?;
    let director = storage.get_setting(KnownSettingKey::Director.as_str()).await?;
    let manager = storage.get_setting(KnownSettingKey::Manager.as_str()).await?;

    let or_default = |value: Option<String>, default: &str| {
        value
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string())
    };

    Ok(InstituteHeader {
        app_name: or_default(app_name, &defaults.name),
        director: or_default(director, &defaults.director),
        manager: or_default(manager, &defaults.manager),
    })
}
