//! 组件基础库（component-domain）
//!
//! 为数据/机器学习平台中的各类实体（模型、监听器、学习任务、验证数据集等）
//! 提供统一的组件抽象：
//! - 标识（`identity`）与唯一标识（`unique_id`）：`type_id/identifier/version`
//! - 组件接口（`component`）：生命周期钩子、子组件声明、验证作业与作业调度
//! - 作业描述（`job`）与协调者接口（`coordinator`）：只构造与提交，不执行
//! - 验证数据集（`dataset`）与数据集引用
//! - 持久化协议（`persist`）与注册编排（`registry`）
//! - 版本号等值对象（`value_object`）
//!
//! 本 crate 不包含作业执行引擎与具体存储后端，仅定义接口与最小必要的错误类型，
//! 以便在不同基础设施上进行适配实现。
//!
//! 典型用法：
//! 1. 使用 `#[component(type_id = "...")]` 声明组件结构体，并实现 `Component`（按需覆写钩子）；
//! 2. 提供 `ComponentStore` 与 `Coordinator` 的具体实现；
//! 3. 通过 `ComponentRegistry` 完成注册（分配版本、`on_create`、调度作业）与加载（`on_load`）。
//!
pub mod component;
pub mod coordinator;
pub mod dataset;
pub mod error;
pub mod identity;
pub mod job;
pub mod persist;
pub mod registry;
pub mod unique_id;
pub mod value_object;

pub use component_macros::{component, value_object};

// 允许在本 crate 内部通过 ::component_domain 进行自引用，
// 以便过程宏在本 crate 内（含单元测试）也能解析到 ::component_domain 路径。
extern crate self as component_domain;
