//! 作业描述（Job）
//!
//! 作业只是交给外部作业系统的工作单元描述：本 crate 负责构造与提交，
//! 从不执行、重试或分发作业。
//!
//! - `ComponentJob`：调用某个已注册组件上的方法（例如模型的 `predict`）；
//! - `FunctionJob`：调用作业系统中按名称注册的函数；
//! - `Job::submit`：记录依赖与分布式标记后交给 `Coordinator`。
//!
use std::fmt;

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use uuid::Uuid;

use component_macros::value_object;

use crate::coordinator::Coordinator;
use crate::error::{ComponentError, ComponentResult};

/// 作业标识（UUID v4）
#[value_object(default = false)]
#[derive(Copy, Hash)]
pub struct JobId(Uuid);

impl JobId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for JobId {
    type Err = crate::error::ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// 作业状态：仅覆盖构造与提交两个阶段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Pending,
    Submitted,
}

/// 调度选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct ScheduleOptions {
    /// 是否请求分布式执行
    #[builder(default)]
    pub distributed: bool,
    /// 是否输出更多信息
    #[builder(default)]
    pub verbose: bool,
}

/// 组件方法调用作业
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct ComponentJob {
    #[builder(default)]
    job_id: JobId,
    #[builder(into)]
    component_identifier: String,
    #[builder(into)]
    type_id: String,
    #[builder(into)]
    method_name: String,
    #[builder(default)]
    args: Vec<Value>,
    #[builder(default)]
    kwargs: Map<String, Value>,
    #[builder(default)]
    dependencies: Vec<JobId>,
    #[builder(default)]
    distributed: bool,
    #[builder(default)]
    status: JobStatus,
    #[builder(default = Utc::now())]
    created_at: DateTime<Utc>,
}

impl ComponentJob {
    pub fn job_id(&self) -> JobId {
        self.job_id
    }

    pub fn component_identifier(&self) -> &str {
        &self.component_identifier
    }

    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn kwargs(&self) -> &Map<String, Value> {
        &self.kwargs
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// 按名称调用已注册函数的作业
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
pub struct FunctionJob {
    #[builder(default)]
    job_id: JobId,
    #[builder(into)]
    callable: String,
    #[builder(default)]
    args: Vec<Value>,
    #[builder(default)]
    kwargs: Map<String, Value>,
    #[builder(default)]
    dependencies: Vec<JobId>,
    #[builder(default)]
    distributed: bool,
    #[builder(default)]
    status: JobStatus,
    #[builder(default = Utc::now())]
    created_at: DateTime<Utc>,
}

impl FunctionJob {
    pub fn job_id(&self) -> JobId {
        self.job_id
    }

    pub fn callable(&self) -> &str {
        &self.callable
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn kwargs(&self) -> &Map<String, Value> {
        &self.kwargs
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// 作业描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Job {
    Function(FunctionJob),
    Component(ComponentJob),
}

impl Job {
    pub fn id(&self) -> JobId {
        match self {
            Job::Function(job) => job.job_id,
            Job::Component(job) => job.job_id,
        }
    }

    pub fn dependencies(&self) -> &[JobId] {
        match self {
            Job::Function(job) => &job.dependencies,
            Job::Component(job) => &job.dependencies,
        }
    }

    pub fn is_distributed(&self) -> bool {
        match self {
            Job::Function(job) => job.distributed,
            Job::Component(job) => job.distributed,
        }
    }

    pub fn status(&self) -> JobStatus {
        match self {
            Job::Function(job) => job.status,
            Job::Component(job) => job.status,
        }
    }

    /// 追加依赖（去重，保持首次出现的顺序；忽略对自身的依赖）
    pub fn depends_on(mut self, upstream: &[Job]) -> Self {
        let own_id = self.id();
        let deps = match &mut self {
            Job::Function(job) => &mut job.dependencies,
            Job::Component(job) => &mut job.dependencies,
        };
        for id in upstream.iter().map(Job::id) {
            if id != own_id && !deps.contains(&id) {
                deps.push(id);
            }
        }
        self
    }

    /// 提交给协调者：记录依赖与分布式标记，状态置为 `Submitted`，返回已提交的作业以便链式声明依赖。
    ///
    /// 下游依赖按 `job.id()` 记录，协调者返回的标识与之不符时报 `InvalidState`。
    pub fn submit(
        self,
        db: &dyn Coordinator,
        dependencies: &[Job],
        distributed: bool,
    ) -> ComponentResult<Job> {
        let mut job = self.depends_on(dependencies);
        match &mut job {
            Job::Function(inner) => {
                inner.distributed = distributed;
                inner.status = JobStatus::Submitted;
            }
            Job::Component(inner) => {
                inner.distributed = distributed;
                inner.status = JobStatus::Submitted;
            }
        }

        let job_id = db.submit_job(job.clone())?;
        if job_id != job.id() {
            return Err(ComponentError::InvalidState {
                reason: format!(
                    "coordinator returned job id {job_id} for submitted job {}",
                    job.id()
                ),
            });
        }
        debug!(
            %job_id,
            dependencies = job.dependencies().len(),
            distributed,
            "job submitted"
        );
        Ok(job)
    }
}

impl From<ComponentJob> for Job {
    fn from(job: ComponentJob) -> Self {
        Job::Component(job)
    }
}

impl From<FunctionJob> for Job {
    fn from(job: FunctionJob) -> Self {
        Job::Function(job)
    }
}
