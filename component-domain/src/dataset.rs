//! 验证数据集（Dataset）
//!
//! 作为组件注册的一份固定数据快照，用于模型验证；`DatasetRef` 则是作业参数中对数据集的引用，
//! 既可以是名称，也可以是已解析的数据集对象，均原样透传给作业系统。
//!
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use component_macros::component;

use crate::component::Component;

/// 验证数据集组件
#[component(type_id = "dataset")]
#[derive(PartialEq)]
pub struct Dataset {
    /// 产生数据的查询（不透明）
    select: Option<Value>,
    sample_size: Option<usize>,
    random_seed: Option<u64>,
    creation_date: Option<DateTime<Utc>>,
    raw_data: Vec<Value>,
}

impl Component for Dataset {}

impl Dataset {
    pub fn new(identifier: impl Into<String>, raw_data: Vec<Value>) -> Self {
        Self {
            identifier: identifier.into(),
            version: None,
            select: None,
            sample_size: None,
            random_seed: None,
            creation_date: Some(Utc::now()),
            raw_data,
        }
    }

    pub fn with_select(mut self, select: Value) -> Self {
        self.select = Some(select);
        self
    }

    pub fn with_sample(mut self, sample_size: usize, random_seed: Option<u64>) -> Self {
        self.sample_size = Some(sample_size);
        self.random_seed = random_seed;
        self
    }

    pub fn select(&self) -> Option<&Value> {
        self.select.as_ref()
    }

    pub fn sample_size(&self) -> Option<usize> {
        self.sample_size
    }

    pub fn random_seed(&self) -> Option<u64> {
        self.random_seed
    }

    pub fn creation_date(&self) -> Option<DateTime<Utc>> {
        self.creation_date
    }

    pub fn raw_data(&self) -> &[Value] {
        &self.raw_data
    }
}

/// 数据集引用：名称或已解析的数据集
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatasetRef {
    Name(String),
    Dataset(Dataset),
}

impl DatasetRef {
    pub fn name(&self) -> &str {
        match self {
            DatasetRef::Name(name) => name,
            DatasetRef::Dataset(dataset) => &dataset.identifier,
        }
    }

    /// 作业参数中的表示：名称为字符串，数据集为其序列化后的字段对象
    pub fn into_value(self) -> Value {
        match self {
            DatasetRef::Name(name) => Value::String(name),
            // 字段均为 JSON 兼容类型，序列化不会失败
            DatasetRef::Dataset(dataset) => serde_json::to_value(dataset).unwrap_or(Value::Null),
        }
    }
}

impl From<&str> for DatasetRef {
    fn from(name: &str) -> Self {
        DatasetRef::Name(name.to_string())
    }
}

impl From<String> for DatasetRef {
    fn from(name: String) -> Self {
        DatasetRef::Name(name)
    }
}

impl From<Dataset> for DatasetRef {
    fn from(dataset: Dataset) -> Self {
        DatasetRef::Dataset(dataset)
    }
}
