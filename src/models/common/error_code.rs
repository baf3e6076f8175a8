/// 业务错误码，随 ApiResponse 的 code 字段返回
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1009,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,
    ServiceUnavailable = 1503,

    // 认证 2xxx
    AuthFailed = 2000,
    AdminNotFound = 2001,
    AdminAlreadyExists = 2002,
    AdminEmailInvalid = 2003,
    AdminPasswordInvalid = 2004,
    AdminCreationFailed = 2005,

    // 学期 3xxx
    SessionNotFound = 3000,
    SessionInvalid = 3001,

    // 班级 4xxx
    ClassNotFound = 4000,
    ClassInvalid = 4001,

    // 学生 5xxx
    StudentNotFound = 5000,
    StudentInvalid = 5001,

    // 科目 6xxx
    SubjectNotFound = 6000,
    SubjectInvalid = 6001,

    // 成绩 7xxx
    MarkNotFound = 7000,
    MarkInvalid = 7001,
    MarkSaveFailed = 7002,

    // 设置 8xxx
    SettingKeyInvalid = 8000,
    SettingUpdateFailed = 8001,
}
