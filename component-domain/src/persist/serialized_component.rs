use crate::{
    component::Component,
    error::{ComponentError, ComponentResult as Result},
    identity::{ComponentType, FieldMap, Identity},
    unique_id::UniqueId,
    value_object::Version,
};
use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// 组件的持久化记录：标识三元组、子组件唯一标识与字段导出
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct SerializedComponent {
    #[builder(into)]
    type_id: String,
    #[builder(into)]
    identifier: String,
    version: Version,
    #[builder(default)]
    children: Vec<String>,
    payload: FieldMap,
    #[builder(default = Utc::now())]
    created_at: DateTime<Utc>,
}

impl SerializedComponent {
    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// 直接子组件的唯一标识（按声明顺序）
    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn payload(&self) -> &FieldMap {
        &self.payload
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn unique_id(&self) -> UniqueId {
        UniqueId::new(&self.type_id, &self.identifier, self.version)
    }

    /// 从已分配版本的组件创建记录；子组件同样必须已分配版本
    pub fn from_component(component: &dyn Component) -> Result<Self> {
        let version = component
            .version()
            .ok_or_else(|| ComponentError::VersionNotSet {
                type_id: component.type_id().to_string(),
                identifier: component.identifier().to_string(),
            })?;

        let children = component
            .child_components()
            .into_iter()
            .map(|child| child.unique_id())
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            type_id: component.type_id().to_string(),
            identifier: component.identifier().to_string(),
            version,
            children,
            payload: component.dict()?,
            created_at: Utc::now(),
        })
    }

    /// 将记录反序列化为组件实例，并以记录中的版本为准
    pub fn to_component<C>(&self) -> Result<C>
    where
        C: Component + ComponentType + DeserializeOwned,
    {
        if C::TYPE_ID != self.type_id {
            return Err(ComponentError::TypeMismatch {
                expected: C::TYPE_ID.to_string(),
                found: self.type_id.clone(),
            });
        }

        let mut component: C = serde_json::from_value(Value::Object(self.payload.clone()))?;
        component.set_version(self.version);
        Ok(component)
    }
}
