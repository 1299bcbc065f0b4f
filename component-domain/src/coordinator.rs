//! 协调者（Coordinator）
//!
//! 外部系统的最小接口：接收作业描述。生命周期钩子与 `schedule_jobs` 通过它提交工作；
//! 作业如何排队、执行、重试或分发由具体实现决定。
//!
use std::sync::Arc;

use crate::error::ComponentResult;
use crate::job::{Job, JobId};

pub trait Coordinator: Send + Sync {
    /// 接收一个作业描述，返回其标识。
    ///
    /// 返回值必须是 `job.id()`：下游作业以该标识声明依赖，实现不得另行分配。
    fn submit_job(&self, job: Job) -> ComponentResult<JobId>;
}

impl<T> Coordinator for Arc<T>
where
    T: Coordinator + ?Sized,
{
    fn submit_job(&self, job: Job) -> ComponentResult<JobId> {
        (**self).submit_job(job)
    }
}

impl<T> Coordinator for &T
where
    T: Coordinator + ?Sized,
{
    fn submit_job(&self, job: Job) -> ComponentResult<JobId> {
        (**self).submit_job(job)
    }
}
