use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

static SETTING_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]{1,64}$").expect("Invalid setting key regex"));

/// 名称字段最大长度（学期、班级、学生、科目）
pub const MAX_NAME_LENGTH: usize = 100;

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_setting_key(key: &str) -> Result<(), &'static str> {
    if !SETTING_KEY_RE.is_match(key) {
        return Err("Setting key must be 1-64 characters of letters, digits, '_', '.' or '-'");
    }
    Ok(())
}

/// 校验并去除首尾空白
pub fn validate_name(name: &str) -> Result<String, &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name must not be blank");
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err("Name must be at most 100 characters");
    }
    Ok(trimmed.to_string())
}

/// 考试日期：空白视为未设置，否则必须是 YYYY-MM-DD
pub fn validate_exam_date(date: Option<&str>) -> Result<Option<String>, &'static str> {
    match date.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(|_| Some(value.to_string()))
            .map_err(|_| "Date must be in YYYY-MM-DD format"),
    }
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证管理员密码是否符合安全策略
///
/// 至少 8 个字符，同时包含大写字母、小写字母和数字，且不是常见弱密码
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    let weak_passwords = [
        "password1",
        "admin1234",
        "qwerty123",
        "abcd1234",
        "marksheet1",
        "welcome123",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("Results2024").is_valid);
    }

    #[test]
    fn test_password_rules() {
        let result = validate_password("ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one uppercase letter")
        );

        let result = validate_password("ABCDEFGH1");
        assert!(
            result
                .errors
                .contains(&"Password must contain at least one lowercase letter")
        );

        let result = validate_password("Admin1234");
        assert!(!result.is_valid);
        assert!(result.error_message().contains("too common"));
    }

    #[test]
    fn test_email() {
        assert!(validate_email("office@institute.in").is_ok());
        assert!(validate_email("first.last+tag@mail.example.com").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_setting_key() {
        assert!(validate_setting_key("app_name").is_ok());
        assert!(validate_setting_key("ui.theme-v2").is_ok());
        assert!(validate_setting_key("").is_err());
        assert!(validate_setting_key("has space").is_err());
        assert!(validate_setting_key(&"k".repeat(65)).is_err());
    }

    #[test]
    fn test_name() {
        assert_eq!(validate_name("  Class 10 ").unwrap(), "Class 10");
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_exam_date() {
        assert_eq!(validate_exam_date(None).unwrap(), None);
        assert_eq!(validate_exam_date(Some("  ")).unwrap(), None);
        assert_eq!(
            validate_exam_date(Some("2024-03-15")).unwrap().as_deref(),
            Some("2024-03-15")
        );
        assert!(validate_exam_date(Some("15/03/2024")).is_err());
        assert!(validate_exam_date(Some("2024-02-30")).is_err());
    }
}
