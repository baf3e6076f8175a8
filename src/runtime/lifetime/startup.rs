use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::errors::{MarksheetError, Result};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

const FALLBACK_CACHE: &str = "moka";
const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

async fn build_cache(name: &str) -> Result<Arc<dyn ObjectCache>> {
    let constructor = get_object_cache_plugin(name).ok_or_else(|| {
        MarksheetError::cache_plugin_not_found(format!("Cache backend '{name}' not registered"))
    })?;
    let cache = constructor().await?;
    Ok(Arc::from(cache))
}

/// 创建缓存实例，配置的后端不可用时回退到内存缓存
pub async fn create_cache() -> Result<Arc<dyn ObjectCache>> {
    let cache_type = AppConfig::get().cache.cache_type.as_str();

    warn!("Attempting to create {} cache backend", cache_type);

    match build_cache(cache_type).await {
        Ok(cache) => {
            warn!("Successfully created {} cache backend", cache_type);
            Ok(cache)
        }
        Err(e) if cache_type != FALLBACK_CACHE => {
            warn!("Failed to create {} cache: {}", cache_type, e);
            warn!("Falling back to memory cache");
            build_cache(FALLBACK_CACHE).await
        }
        Err(e) => Err(e),
    }
}

/// 生成随机密码，保证满足管理员密码策略
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789";
    let mut rng = rand::rng();
    let body: String = (0..length.saturating_sub(3))
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect();
    format!("Aa7{body}")
}

/// 初始化超级管理员
/// 数据库中没有任何管理员时，按 ADMIN_EMAIL / ADMIN_PASSWORD 创建
pub async fn seed_super_admin(storage: &Arc<dyn Storage>) -> Result<()> {
    let count = storage.count_admins().await?;
    if count > 0 {
        debug!("Database already has {} admin(s), skipping seed", count);
        return Ok(());
    }

    info!("No admins found in database, creating super admin account...");

    let email = std::env::var("ADMIN_EMAIL")
        .ok()
        .map(|email| email.trim().to_lowercase())
        .filter(|email| !email.is_empty())
        .unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string());

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD")
        .ok()
        .filter(|password| !password.is_empty())
        .unwrap_or_else(|| {
            let pwd = generate_random_password(16);
            warn!("==========================================================");
            warn!("  ADMIN_PASSWORD NOT SET - USING GENERATED PASSWORD");
            warn!("  Super admin: {}", email);
            warn!("  Generated password: {}", pwd);
            warn!("  Save this password or set ADMIN_PASSWORD");
            warn!("==========================================================");
            pwd
        });

    let password_hash = hash_password(&password)?;
    let admin = storage.create_admin(&email, &password_hash, true).await?;
    info!(
        "Super admin created successfully (ID: {}, email: {})",
        admin.id, admin.email
    );
    Ok(())
}

/// 准备服务器启动的上下文
/// 包括存储、超级管理员和缓存
pub async fn prepare_server_startup() -> Result<StartupContext> {
    // 重复安装只会返回 Err，忽略即可
    let _ = rustls::crypto::ring::default_provider().install_default();

    crate::cache::register_builtin_plugins();
    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    if let Err(e) = seed_super_admin(&storage).await {
        warn!("Failed to seed super admin: {}", e);
    }

    let cache = create_cache().await?;
    warn!("Cache backend initialized");

    Ok(StartupContext { storage, cache })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::utils::validate::validate_password;

    #[test]
    fn test_generated_password_meets_policy() {
        for _ in 0..20 {
            let password = generate_random_password(16);
            assert_eq!(password.len(), 16);
            assert!(validate_password(&password).is_valid);
        }
    }

    #[tokio::test]
    async fn test_seed_creates_single_super_admin() {
        let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::in_memory().await.unwrap());

        seed_super_admin(&storage).await.unwrap();
        seed_super_admin(&storage).await.unwrap();

        assert_eq!(storage.count_admins().await.unwrap(), 1);
    }
}
