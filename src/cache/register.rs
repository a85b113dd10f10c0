use crate::cache::traits::ObjectCache;
use crate::errors::{Result, SchoolAdminError};
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type BoxedObjectCacheFuture =
    Pin<Box<dyn Future<Output = Result<Box<dyn ObjectCache>>> + Send>>;
pub type ObjectCacheConstructor = Arc<dyn Fn() -> BoxedObjectCacheFuture + Send + Sync>;

const FALLBACK_PLUGIN: &str = "moka";

static OBJECT_CACHE_REGISTRY: Lazy<RwLock<HashMap<String, ObjectCacheConstructor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

// 注册表只在 ctor 阶段写入，锁中毒时沿用内部数据
pub fn register_object_cache_plugin<S: Into<String>>(name: S, constructor: ObjectCacheConstructor) {
    let mut registry = OBJECT_CACHE_REGISTRY
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    registry.insert(name.into(), constructor);
}

pub fn get_object_cache_plugin(name: &str) -> Option<ObjectCacheConstructor> {
    OBJECT_CACHE_REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .get(name)
        .cloned()
}

/// 按名称构建缓存；失败或未注册时回退到 moka
pub async fn build_object_cache(name: &str) -> Result<Box<dyn ObjectCache>> {
    if let Some(constructor) = get_object_cache_plugin(name) {
        match constructor().await {
            Ok(cache) => return Ok(cache),
            Err(e) if name != FALLBACK_PLUGIN => {
                tracing::warn!("Failed to create {} cache: {}, falling back to moka", name, e);
            }
            Err(e) => return Err(e),
        }
    } else {
        tracing::warn!("Cache backend '{}' not registered, falling back to moka", name);
    }

    let fallback = get_object_cache_plugin(FALLBACK_PLUGIN).ok_or_else(|| {
        SchoolAdminError::cache_plugin_not_found(format!(
            "No cache backend available (tried: {name})"
        ))
    })?;
    fallback().await
}

pub fn debug_object_cache_registry() {
    let registry = OBJECT_CACHE_REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if registry.is_empty() {
        tracing::debug!("No object cache plugins registered.");
    } else {
        tracing::debug!("Registered object cache plugins:");
        for key in registry.keys() {
            tracing::debug!(" - {}", key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_plugins_are_registered() {
        assert!(get_object_cache_plugin("moka").is_some());
        assert!(get_object_cache_plugin("redis").is_some());
        assert!(get_object_cache_plugin("memcached").is_none());
    }

    #[tokio::test]
    async fn test_unknown_backend_falls_back_to_moka() {
        let cache = build_object_cache("memcached").await.unwrap();
        cache
            .insert_raw("k".to_string(), "v".to_string(), 0)
            .await;
        assert_eq!(
            cache.get_raw("k").await,
            crate::cache::CacheResult::Found("v".to_string())
        );
    }
}
