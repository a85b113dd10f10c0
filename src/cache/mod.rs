//! 对象缓存
//!
//! 缓存后端以插件形式在启动前注册（见 [`declare_object_cache_plugin!`]），
//! 运行时按 `cache.type` 选取；redis 不可用时回退到进程内的 moka。
//! 目前用于保存已认证用户，避免每个请求都查询数据库。

pub mod object_cache;
pub mod register;
mod traits;

use serde::{Serialize, de::DeserializeOwned};

pub use traits::{CacheResult, ObjectCache};

/// 声明并注册一个缓存插件
///
/// 第二个参数的类型需要提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $ty:ty) => {
        #[ctor::ctor]
        unsafe fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        <$ty>::new()
                            .map(|cache| Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                            .map_err($crate::errors::SchoolAdminError::cache_connection)
                    })
                }),
            );
        }
    };
}

/// 已认证用户的缓存键
pub fn user_cache_key(user_id: i64) -> String {
    format!("user:{user_id}")
}

/// 读取 JSON 值；反序列化失败的条目会被清除
pub async fn get_json<T: DeserializeOwned>(cache: &dyn ObjectCache, key: &str) -> Option<T> {
    match cache.get_raw(key).await {
        CacheResult::Found(json) => match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::info!("Dropping undecodable cache entry {}: {}", key, e);
                cache.remove(key).await;
                None
            }
        },
        CacheResult::NotFound | CacheResult::ExistsButNoValue => None,
    }
}

pub async fn put_json<T: Serialize>(cache: &dyn ObjectCache, key: String, value: &T, ttl: u64) {
    match serde_json::to_string(value) {
        Ok(json) => cache.insert_raw(key, json, ttl).await,
        Err(e) => tracing::warn!("Failed to serialize cache entry {}: {}", key, e),
    }
}

#[cfg(test)]
mod tests {
    use super::object_cache::moka::MokaCacheWrapper;
    use super::*;
    use crate::models::users::entities::{User, UserRole, UserStatus};

    fn user() -> User {
        User {
            id: 7,
            username: "fatima".to_string(),
            email: "fatima@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Teacher,
            status: UserStatus::Active,
            display_name: None,
            last_login: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_user_round_trips_without_password_hash() {
        let cache = MokaCacheWrapper::with_settings(100, 60);
        let key = user_cache_key(7);

        put_json(&cache, key.clone(), &user(), 0).await;
        let cached: User = get_json(&cache, &key).await.unwrap();

        assert_eq!(cached.username, "fatima");
        assert_eq!(cached.role, UserRole::Teacher);
        assert!(cached.password_hash.is_empty());
    }

    #[tokio::test]
    async fn test_undecodable_entry_is_removed() {
        let cache = MokaCacheWrapper::with_settings(100, 60);
        cache
            .insert_raw("user:1".to_string(), "not json".to_string(), 0)
            .await;

        assert!(get_json::<User>(&cache, "user:1").await.is_none());
        assert!(matches!(
            cache.get_raw("user:1").await,
            CacheResult::NotFound
        ));
    }
}
