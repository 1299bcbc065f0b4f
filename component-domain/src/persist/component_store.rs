//! 组件存储协议
//!
//! 只定义按 `(type_id, identifier, version)` 读写记录的接口，具体后端由上层注入。
//!
use crate::{
    error::ComponentResult as Result, persist::SerializedComponent, value_object::Version,
};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait ComponentStore: Send + Sync {
    /// 某个组件所有已存储的版本（升序）
    async fn versions(&self, type_id: &str, identifier: &str) -> Result<Vec<Version>>;

    /// 读取指定版本；`version` 为 `None` 时读取最新版本
    async fn get(
        &self,
        type_id: &str,
        identifier: &str,
        version: Option<Version>,
    ) -> Result<Option<SerializedComponent>>;

    /// 写入记录；同一唯一标识重复写入应返回错误
    async fn save(&self, record: SerializedComponent) -> Result<()>;

    /// 最新版本
    async fn latest_version(&self, type_id: &str, identifier: &str) -> Result<Option<Version>> {
        Ok(self.versions(type_id, identifier).await?.into_iter().max())
    }
}

#[async_trait]
impl<T> ComponentStore for Arc<T>
where
    T: ComponentStore + ?Sized,
{
    async fn versions(&self, type_id: &str, identifier: &str) -> Result<Vec<Version>> {
        (**self).versions(type_id, identifier).await
    }

    async fn get(
        &self,
        type_id: &str,
        identifier: &str,
        version: Option<Version>,
    ) -> Result<Option<SerializedComponent>> {
        (**self).get(type_id, identifier, version).await
    }

    async fn save(&self, record: SerializedComponent) -> Result<()> {
        (**self).save(record).await
    }

    async fn latest_version(&self, type_id: &str, identifier: &str) -> Result<Option<Version>> {
        (**self).latest_version(type_id, identifier).await
    }
}
