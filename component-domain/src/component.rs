//! 组件（Component）抽象
//!
//! 模型、监听器（watcher）、学习任务、验证数据集等平台实体的共同基础：
//! - 标识由 `Identity` 提供，`unique_id` 在版本分配后才可计算；
//! - `on_create` / `on_load` 由协调者在首次持久化或重新加载时调用（默认空实现）；
//! - `child_components` 声明子组件，供外部递归注册/遍历；
//! - `create_validation_job` / `schedule_jobs` 只构造或提交作业描述，不执行。
//!
use serde_json::{Map, Value};

use crate::coordinator::Coordinator;
use crate::dataset::DatasetRef;
use crate::error::{ComponentError, ComponentResult};
use crate::identity::Identity;
use crate::job::{ComponentJob, Job, ScheduleOptions};
use crate::unique_id;
use crate::value_object::Version;

/// 验证作业调用的组件方法
pub const VALIDATION_METHOD: &str = "predict";
/// 验证作业指向的组件类别
pub const VALIDATION_TYPE_ID: &str = "model";

/// 组件接口（对象安全，可作为 `dyn Component` 使用）
pub trait Component: Identity {
    /// 首次创建（持久化）时调用，仅调用一次
    fn on_create(&mut self, db: &dyn Coordinator) -> ComponentResult<()> {
        let _ = db;
        Ok(())
    }

    /// 从存储中重新加载时调用
    fn on_load(&mut self, db: &dyn Coordinator) -> ComponentResult<()> {
        let _ = db;
        Ok(())
    }

    /// 本组件拥有的子组件（有序），默认无
    fn child_components(&self) -> Vec<&dyn Component> {
        Vec::new()
    }

    /// 与 `child_components` 相同的子组件（同序），以可变引用返回
    fn child_components_mut(&mut self) -> Vec<&mut dyn Component> {
        Vec::new()
    }

    /// `type_id/identifier/version`；版本未设置时返回 `VersionNotSet`
    fn unique_id(&self) -> ComponentResult<String> {
        let version = self.version().ok_or_else(|| ComponentError::VersionNotSet {
            type_id: self.type_id().to_string(),
            identifier: self.identifier().to_string(),
        })?;
        Ok(unique_id::make_unique_id(
            self.type_id(),
            self.identifier(),
            version,
        ))
    }

    /// 构造针对本组件的验证作业（非分布式 `predict` 调用）
    fn create_validation_job<D, I, S>(&self, validation_set: D, metrics: I) -> ComponentJob
    where
        Self: Sized,
        D: Into<DatasetRef>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let metrics: Vec<Value> = metrics
            .into_iter()
            .map(|m| Value::String(m.into()))
            .collect();

        let mut kwargs = Map::new();
        kwargs.insert("distributed".to_string(), Value::Bool(false));
        kwargs.insert(
            "validation_set".to_string(),
            validation_set.into().into_value(),
        );
        kwargs.insert("metrics".to_string(), Value::Array(metrics));

        ComponentJob::builder()
            .component_identifier(self.identifier())
            .type_id(VALIDATION_TYPE_ID)
            .method_name(VALIDATION_METHOD)
            .kwargs(kwargs)
            .build()
    }

    /// 提交本组件的作业，返回实际提交的作业；默认不提交任何作业
    fn schedule_jobs(
        &self,
        db: &dyn Coordinator,
        dependencies: &[Job],
        options: ScheduleOptions,
    ) -> ComponentResult<Vec<Job>> {
        let _ = (db, dependencies, options);
        Ok(Vec::new())
    }

    /// 无需实例的唯一标识构造，与 `unique_id` 格式一致
    fn make_unique_id(type_id: &str, identifier: &str, version: Version) -> String
    where
        Self: Sized,
    {
        unique_id::make_unique_id(type_id, identifier, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComponentError;
    use crate::identity::ComponentType;
    use crate::job::JobId;
    use component_macros::component;
    use std::sync::Mutex;

    #[component(type_id = "model")]
    struct Classifier {
        threshold: f64,
    }

    impl Component for Classifier {}

    fn classifier(version: Option<usize>) -> Classifier {
        Classifier {
            identifier: "clf1".to_string(),
            version: version.map(Version::from_value),
            threshold: 0.5,
        }
    }

    #[derive(Default)]
    struct CountingCoordinator {
        submitted: Mutex<usize>,
    }

    impl Coordinator for CountingCoordinator {
        fn submit_job(&self, job: Job) -> ComponentResult<JobId> {
            *self.submitted.lock().unwrap() += 1;
            Ok(job.id())
        }
    }

    #[test]
    fn unique_id_requires_version() {
        let err = classifier(None).unique_id().unwrap_err();
        match err {
            ComponentError::VersionNotSet {
                type_id,
                identifier,
            } => {
                assert_eq!(type_id, "model");
                assert_eq!(identifier, "clf1");
            }
            other => panic!("unexpected {other:?}"),
        }

        assert_eq!(classifier(Some(3)).unique_id().unwrap(), "model/clf1/3");
    }

    #[test]
    fn make_unique_id_matches_instance() {
        for v in [0, 1, 7, 42] {
            let clf = classifier(Some(v));
            assert_eq!(
                Classifier::make_unique_id(Classifier::TYPE_ID, "clf1", Version::from_value(v)),
                clf.unique_id().unwrap()
            );
        }
    }

    #[test]
    fn defaults_have_no_children_and_schedule_nothing() {
        let mut clf = classifier(None);
        assert!(clf.child_components().is_empty());
        assert!(clf.child_components_mut().is_empty());

        let db = CountingCoordinator::default();
        let upstream: Job = clf.create_validation_job("ds", ["acc"]).into();
        let jobs = clf
            .schedule_jobs(
                &db,
                &[upstream],
                ScheduleOptions::builder().distributed(true).verbose(true).build(),
            )
            .unwrap();
        assert!(jobs.is_empty());
        assert_eq!(*db.submitted.lock().unwrap(), 0);

        clf.on_create(&db).unwrap();
        clf.on_load(&db).unwrap();
        assert_eq!(*db.submitted.lock().unwrap(), 0);
    }

    #[test]
    fn validation_job_shape() {
        let job = classifier(None).create_validation_job("my_dataset", ["accuracy", "f1"]);

        assert_eq!(job.component_identifier(), "clf1");
        assert_eq!(job.method_name(), "predict");
        assert_eq!(job.type_id(), "model");
        assert!(job.args().is_empty());

        let expected = serde_json::json!({
            "distributed": false,
            "validation_set": "my_dataset",
            "metrics": ["accuracy", "f1"],
        });
        assert_eq!(Value::Object(job.kwargs().clone()), expected);
    }

    #[test]
    fn dict_holds_declared_fields() {
        let dict = classifier(Some(1)).dict().unwrap();
        let mut keys: Vec<&str> = dict.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["identifier", "threshold", "version"]);
        assert_eq!(dict["version"], Value::from(1));
    }

    #[test]
    fn usable_as_trait_object() {
        let boxed: Box<dyn Component> = Box::new(classifier(Some(2)));
        assert_eq!(boxed.type_id(), "model");
        assert_eq!(boxed.unique_id().unwrap(), "model/clf1/2");
    }
}
