use crate::cache::{ObjectCache, register::build_object_cache};
use crate::config::{AppConfig, BootstrapConfig};
use crate::errors::Result;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 创建缓存实例，配置的后端不可用时回退到内存缓存
async fn create_cache() -> Result<Arc<dyn ObjectCache>> {
    let cache_type = &AppConfig::get().cache.cache_type;
    warn!("Attempting to create {} cache backend", cache_type);

    let cache = build_object_cache(cache_type).await?;
    Ok(Arc::from(cache))
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 空库时按 `[bootstrap]` 配置创建管理员账号，已有任何账号则跳过
pub(crate) async fn seed_admin(storage: &Arc<dyn Storage>, bootstrap: &BootstrapConfig) {
    match storage.count_users().await {
        Ok(0) => info!("No users found, creating bootstrap admin account"),
        Ok(count) => {
            debug!("{} user(s) present, skipping admin bootstrap", count);
            return;
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping admin bootstrap", e);
            return;
        }
    }

    let password = match bootstrap.admin_password.as_deref() {
        Some(password) if !password.is_empty() => password.to_string(),
        _ => {
            let generated = generate_random_password(16);
            warn!(
                "ADMIN_PASSWORD not set, generated password for '{}': {}",
                bootstrap.admin_username, generated
            );
            generated
        }
    };

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin bootstrap", e);
            return;
        }
    };

    let admin_request = CreateUserRequest {
        username: bootstrap.admin_username.clone(),
        email: bootstrap.admin_email.clone(),
        password: password_hash,
        role: UserRole::Admin,
        display_name: Some("Administrator".to_string()),
    };

    match storage.create_user(admin_request).await {
        Ok(user) => info!("Bootstrap admin '{}' created (ID: {})", user.username, user.id),
        Err(e) => warn!("Failed to create bootstrap admin: {}", e),
    }
}

/// 准备服务器启动的上下文：存储（含迁移）、默认管理员、缓存
pub async fn prepare_server_startup() -> Result<StartupContext> {
    // 已安装过时返回 Err，可以忽略
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
        debug!("Debug mode: Cache registry is enabled");
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    seed_admin(&storage, &AppConfig::get().bootstrap).await;

    let cache = create_cache().await?;
    warn!("Cache backend initialized");

    Ok(StartupContext { storage, cache })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    #[test]
    fn test_generated_password_uses_charset() {
        let password = generate_random_password(16);
        assert_eq!(password.chars().count(), 16);
        assert!(password.is_ascii());
    }

    #[tokio::test]
    async fn test_seed_admin_only_on_empty_database() {
        let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::in_memory().await);

        seed_admin(&storage, &AppConfig::get().bootstrap).await;
        assert_eq!(storage.count_users().await.unwrap(), 1);
        let admin = storage.get_user_by_username("admin").await.unwrap().unwrap();
        assert!(admin.is_admin());

        seed_admin(&storage, &AppConfig::get().bootstrap).await;
        assert_eq!(storage.count_users().await.unwrap(), 1);
    }
}
