//! 组件唯一标识
//!
//! 三元组 `(type_id, identifier, version)` 唯一确定一个已持久化的组件，
//! 其字符串形式为 `type_id/identifier/version`。
//!
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ComponentError;
use crate::value_object::{ValueObject, Version};

/// 由三元组生成唯一标识字符串，无需组件实例
///
/// ```
/// use component_domain::unique_id::make_unique_id;
/// use component_domain::value_object::Version;
///
/// assert_eq!(make_unique_id("model", "clf1", Version::from_value(3)), "model/clf1/3");
/// ```
pub fn make_unique_id(type_id: &str, identifier: &str, version: Version) -> String {
    format!("{type_id}/{identifier}/{}", version.value())
}

/// 结构化的唯一标识
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniqueId {
    type_id: String,
    identifier: String,
    version: Version,
}

impl UniqueId {
    pub fn new(type_id: impl Into<String>, identifier: impl Into<String>, version: Version) -> Self {
        Self {
            type_id: type_id.into(),
            identifier: identifier.into(),
            version,
        }
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn version(&self) -> Version {
        self.version
    }
}

impl ValueObject for UniqueId {
    type Error = ComponentError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.type_id.is_empty() || self.type_id.contains('/') {
            return Err(ComponentError::InvalidValue {
                reason: format!("type_id must be non-empty without '/': '{}'", self.type_id),
            });
        }
        if self.identifier.is_empty() {
            return Err(ComponentError::InvalidValue {
                reason: "identifier must be non-empty".to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&make_unique_id(&self.type_id, &self.identifier, self.version))
    }
}

/// `type_id` 取第一个 `/` 之前，版本取最后一个 `/` 之后，中间部分整体作为 identifier
impl FromStr for UniqueId {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ComponentError::Parse {
            reason: format!("malformed unique id '{s}', expected type_id/identifier/version"),
        };

        let (type_id, rest) = s.split_once('/').ok_or_else(malformed)?;
        let (identifier, version) = rest.rsplit_once('/').ok_or_else(malformed)?;
        let version = version.parse::<usize>().map_err(|_| malformed())?;

        let id = Self::new(type_id, identifier, Version::from_value(version));
        id.validate()?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_make_unique_id() {
        let id = UniqueId::new("watcher", "docs/img", Version::from_value(0));
        assert_eq!(id.to_string(), "watcher/docs/img/0");
        assert_eq!(
            id.to_string(),
            make_unique_id("watcher", "docs/img", Version::new())
        );
    }

    #[test]
    fn parse_round_trips_identifiers_with_slashes() {
        let parsed: UniqueId = "watcher/docs/img/12".parse().unwrap();
        assert_eq!(parsed.type_id(), "watcher");
        assert_eq!(parsed.identifier(), "docs/img");
        assert_eq!(parsed.version(), Version::from_value(12));
    }

    #[test]
    fn parse_rejects_malformed() {
        for raw in ["model", "model/clf1", "model/clf1/latest", "/clf1/1", "model//1"] {
            let err = raw.parse::<UniqueId>().unwrap_err();
            assert!(
                matches!(
                    err,
                    ComponentError::Parse { .. } | ComponentError::InvalidValue { .. }
                ),
                "{raw}: {err:?}"
            );
        }
    }
}
