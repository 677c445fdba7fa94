use async_trait::async_trait;

// 缓存查询结果
//
// ExistsButNoValue 表示后端暂时不可用或取值失败，调用方应回源而不是视为未命中后写缓存。
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    ExistsButNoValue,
}

// 对象缓存抽象：字符串进出，序列化由调用方负责
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// ttl 以秒计，0 表示使用实现方的默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    async fn remove(&self, key: &str);

    async fn invalidate_all(&self);
}
