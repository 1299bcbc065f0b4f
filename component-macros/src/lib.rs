//! 组件基础库的过程宏（component-macros）
//!
//! - `#[component]`：为具名字段结构体注入 `identifier` / `version` 字段，
//!   合并默认派生，并生成 `ComponentType` 与 `Identity` 实现；
//! - `#[value_object]`：为值对象合并默认派生。
//!
use proc_macro::TokenStream;

mod component;
mod derive_utils;
mod field_utils;
mod value_object;

/// 组件宏
/// - 若缺失则追加字段：`identifier: String`, `version: Option<Version>`，并置于字段最前
/// - 自动实现 `::component_domain::identity::{ComponentType, Identity}`
/// - 参数：`#[component(type_id = "model", debug = true|false)]`，`type_id` 必填
#[proc_macro_attribute]
pub fn component(attr: TokenStream, item: TokenStream) -> TokenStream {
    component::expand(attr, item)
}

/// 值对象宏
/// - 支持结构体（具名或 tuple）与枚举
/// - 合并/追加派生：Default, Clone, (Debug 可控), Serialize, Deserialize, PartialEq, Eq
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}
