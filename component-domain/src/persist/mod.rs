//! 持久化协议（persist）
//!
//! 定义组件记录（`SerializedComponent`）与组件存储接口（`ComponentStore`）：
//! - 记录由已分配版本的组件生成，携带子组件的唯一标识与字段导出；
//! - 存储按三元组读写记录，具体后端（数据库、对象存储等）由上层提供实现并注入。
//!
mod component_store;
mod serialized_component;

pub use component_store::ComponentStore;
pub use serialized_component::SerializedComponent;
