//! 组件标识（Identity）基础抽象
//!
//! 为所有组件提供统一的类别常量（`type_id`）、名称（`identifier`）与版本（`version`），
//! 以及字段级的结构化导出（`dict`）。通常由 `#[component]` 宏生成实现。
//!
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ComponentError, ComponentResult};
use crate::value_object::Version;

/// 字段名到值的浅层映射
pub type FieldMap = Map<String, Value>;

/// 组件类别常量，每个具体组件类型必须给出
pub trait ComponentType {
    /// 组件类别标识，例如 `"model"`、`"watcher"`、`"dataset"`
    const TYPE_ID: &'static str;
}

/// 具备类别、名称与可选版本的组件标识抽象（对象安全）
pub trait Identity: Send + Sync {
    /// 组件类别标识（与 `ComponentType::TYPE_ID` 一致）
    fn type_id(&self) -> &'static str;

    /// 类别内唯一的名称
    fn identifier(&self) -> &str;

    /// 当前版本；尚未持久化时为 `None`
    fn version(&self) -> Option<Version>;

    /// 由持久化层分配版本
    fn set_version(&mut self, version: Version);

    /// 回到未分配版本的状态（持久化失败时撤销暂定版本）
    fn clear_version(&mut self);

    /// 导出所有已声明字段
    fn dict(&self) -> ComponentResult<FieldMap>;
}

/// 将可序列化的组件导出为字段映射，供 `#[component]` 生成的 `dict` 使用
pub fn to_field_map<T: Serialize + ?Sized>(value: &T) -> ComponentResult<FieldMap> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(ComponentError::TypeMismatch {
            expected: "object".to_string(),
            found: json_kind(&other).to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
