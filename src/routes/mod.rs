pub mod admins;

pub mod auth;

pub mod classes;

pub mod frontend;

pub mod marks;

pub mod sessions;

pub mod settings;

pub mod students;

pub mod subjects;

#[cfg(test)]
mod tests;

pub use admins::configure_admin_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use frontend::configure_frontend_routes;
pub use marks::configure_marks_routes;
pub use sessions::configure_sessions_routes;
pub use settings::configure_settings_routes;
pub use students::configure_students_routes;
pub use subjects::configure_subjects_routes;

use actix_web::web;

/// 注册全部 API 路由，前端路由必须最后注册
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_admin_routes)
        .configure(configure_sessions_routes)
        .configure(configure_classes_routes)
        .configure(configure_students_routes)
        .configure(configure_subjects_routes)
        .configure(configure_marks_routes)
        .configure(configure_settings_routes);
}
