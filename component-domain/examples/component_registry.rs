//! 示例：通过 ComponentRegistry 注册与加载带子组件的模型
use async_trait::async_trait;
use component_domain::component::Component;
use component_domain::coordinator::Coordinator;
use component_domain::error::ComponentResult;
use component_domain::job::{ComponentJob, Job, JobId, ScheduleOptions};
use component_domain::persist::{ComponentStore, SerializedComponent};
use component_domain::registry::ComponentRegistry;
use component_domain::value_object::Version;
use component_macros::component;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[component(type_id = "encoder")]
struct Encoder {
    dim: usize,
}

impl Component for Encoder {}

#[component(type_id = "model")]
struct Model {
    encoder: Encoder,
}

impl Component for Model {
    fn on_create(&mut self, _db: &dyn Coordinator) -> ComponentResult<()> {
        println!("🆕 on_create {}", self.unique_id()?);
        Ok(())
    }

    fn on_load(&mut self, _db: &dyn Coordinator) -> ComponentResult<()> {
        println!("📦 on_load {}", self.unique_id()?);
        Ok(())
    }

    fn child_components(&self) -> Vec<&dyn Component> {
        vec![&self.encoder]
    }

    fn child_components_mut(&mut self) -> Vec<&mut dyn Component> {
        vec![&mut self.encoder]
    }

    fn schedule_jobs(
        &self,
        db: &dyn Coordinator,
        dependencies: &[Job],
        options: ScheduleOptions,
    ) -> ComponentResult<Vec<Job>> {
        let warmup: Job = ComponentJob::builder()
            .component_identifier(self.identifier.clone())
            .type_id("model")
            .method_name("warmup")
            .build()
            .into();
        Ok(vec![warmup.submit(db, dependencies, options.distributed)?])
    }
}

#[derive(Default)]
struct MemoryStore {
    records: Mutex<BTreeMap<String, SerializedComponent>>,
}

#[async_trait]
impl ComponentStore for MemoryStore {
    async fn versions(&self, type_id: &str, identifier: &str) -> ComponentResult<Vec<Version>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.type_id() == type_id && r.identifier() == identifier)
            .map(|r| r.version())
            .collect())
    }

    async fn get(
        &self,
        type_id: &str,
        identifier: &str,
        version: Option<Version>,
    ) -> ComponentResult<Option<SerializedComponent>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.type_id() == type_id && r.identifier() == identifier)
            .filter(|r| version.is_none_or(|v| r.version() == v))
            .max_by_key(|r| r.version())
            .cloned())
    }

    async fn save(&self, record: SerializedComponent) -> ComponentResult<()> {
        let key = record.unique_id().to_string();
        self.records.lock().unwrap().insert(key, record);
        Ok(())
    }
}

struct LoggingCoordinator;

impl Coordinator for LoggingCoordinator {
    fn submit_job(&self, job: Job) -> ComponentResult<JobId> {
        println!("📥 作业 {}", job.id());
        Ok(job.id())
    }
}

#[tokio::main]
async fn main() -> ComponentResult<()> {
    println!("=== ComponentRegistry 示例 ===\n");

    let registry = ComponentRegistry::new(MemoryStore::default());
    let db = LoggingCoordinator;

    for round in 0..2 {
        let mut model = Model {
            identifier: "clf1".into(),
            version: None,
            encoder: Encoder {
                identifier: "clf1-enc".into(),
                version: None,
                dim: 32 * (round + 1),
            },
        };
        let jobs = registry
            .add(&mut model, &db, &[], ScheduleOptions::default())
            .await?;
        println!("✅ 注册 {}，提交 {} 个作业\n", model.unique_id()?, jobs.len());
    }

    println!("--- 重新加载 ---");
    let latest: Model = registry.load("clf1", None, &db).await?;
    println!("最新版本 encoder.dim = {}", latest.encoder.dim);

    let first: Model = registry.load("clf1", Some(Version::new()), &db).await?;
    println!("v0 encoder.dim = {}", first.encoder.dim);

    println!("版本列表: {:?}", registry.versions("model", "clf1").await?);
    Ok(())
}
