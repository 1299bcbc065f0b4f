//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//!

use std::fmt;
use std::str::FromStr;

use component_macros::value_object;

use crate::error::ComponentError;

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;
}

/// 组件版本号
///
/// 由持久化层在首次写入时分配，从 0 开始递增；组件上以 `Option<Version>` 表示，
/// `None` 即“尚未持久化”。
///
/// # 示例
///
/// ```
/// use component_domain::value_object::Version;
///
/// let v0 = Version::new();
/// assert_eq!(v0.value(), 0);
/// assert!(v0.is_new());
///
/// let v1 = v0.next();
/// assert_eq!(v1.value(), 1);
/// assert!(v1 > v0);
/// ```
// value_object 宏提供基础派生（Debug, Default, Clone, Serialize, Deserialize, PartialEq, Eq）
#[value_object]
#[derive(Copy, PartialOrd, Ord, Hash)]
pub struct Version(usize);

impl Version {
    /// 首个版本（版本号为 0）
    pub const fn new() -> Self {
        Self(0)
    }

    /// 从值创建版本号
    pub const fn from_value(value: usize) -> Self {
        Self(value)
    }

    /// 下一个版本号
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// 在可选的“最新版本”之后分配新版本：无历史版本时为 0
    ///
    /// ```
    /// use component_domain::value_object::Version;
    ///
    /// assert_eq!(Version::after(None), Version::new());
    /// assert_eq!(Version::after(Some(Version::from_value(4))).value(), 5);
    /// ```
    pub fn after(latest: Option<Version>) -> Self {
        latest.map(|v| v.next()).unwrap_or_default()
    }

    pub const fn value(&self) -> usize {
        self.0
    }

    /// 是否为首个版本
    pub fn is_new(&self) -> bool {
        self.0 == 0
    }

    /// 是否已有过更早的版本（版本大于零）
    pub fn is_created(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// 接受 `3` 或 `v3`
impl FromStr for Version {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('v').unwrap_or(s);
        let value = digits.parse::<usize>().map_err(|e| ComponentError::Parse {
            reason: format!("invalid version '{s}': {e}"),
        })?;
        Ok(Self(value))
    }
}

impl From<usize> for Version {
    fn from(value: usize) -> Self {
        Self::from_value(value)
    }
}

impl From<Version> for usize {
    fn from(version: Version) -> Self {
        version.value()
    }
}
