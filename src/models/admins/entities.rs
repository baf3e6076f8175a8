use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 管理员角色
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub enum AdminRole {
    Admin,      // 普通管理员
    SuperAdmin, // 超级管理员，可创建其他管理员
}

impl AdminRole {
    pub const ADMIN: &'static str = "admin";
    pub const SUPER_ADMIN: &'static str = "super_admin";

    pub fn super_roles() -> &'static [&'static AdminRole] {
        &[&Self::SuperAdmin]
    }
}

impl<'de> Deserialize<'de> for AdminRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminRole::Admin => write!(f, "{}", AdminRole::ADMIN),
            AdminRole::SuperAdmin => write!(f, "{}", AdminRole::SUPER_ADMIN),
        }
    }
}

impl std::str::FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            AdminRole::ADMIN => Ok(AdminRole::Admin),
            AdminRole::SUPER_ADMIN => Ok(AdminRole::SuperAdmin),
            _ => Err(format!(
                "无效的管理员角色: '{s}'. 支持的角色: admin, super_admin"
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub struct Admin {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应和缓存中
    #[ts(skip)]
    pub password_hash: String,
    pub is_super_admin: bool,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Admin {
    pub fn role(&self) -> AdminRole {
        if self.is_super_admin {
            AdminRole::SuperAdmin
        } else {
            AdminRole::Admin
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip_through_str() {
        for role in [AdminRole::Admin, AdminRole::SuperAdmin] {
            let parsed: AdminRole = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
        assert!("teacher".parse::<AdminRole>().is_err());
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let admin = Admin {
            id: 1,
            email: "office@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            is_super_admin: true,
            last_login: None,
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_string(&admin).unwrap();
        assert!(!json.contains("argon2"));
        assert!(json.contains("\"isSuperAdmin\":true"));
        assert_eq!(admin.role(), AdminRole::SuperAdmin);
    }
}
