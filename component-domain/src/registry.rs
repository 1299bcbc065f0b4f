//! 组件注册编排器（ComponentRegistry）
//!
//! 封装“分配版本 → on_create → 持久化记录 → 调度作业”与“读取记录 → 恢复版本 → on_load”
//! 两条标准流程，以存储实现（`ComponentStore`）为依赖，便于在应用层直接调用。
//!
use crate::{
    component::Component,
    coordinator::Coordinator,
    error::{ComponentError, ComponentResult},
    identity::{ComponentType, Identity},
    job::{Job, ScheduleOptions},
    persist::{ComponentStore, SerializedComponent},
    value_object::Version,
};
use futures_util::future::BoxFuture;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

/// 面向应用层的组件注册编排器。
///
/// - `S`：组件存储（实现 `ComponentStore`）
pub struct ComponentRegistry<S>
where
    S: ComponentStore,
{
    store: S,
}

impl<S> ComponentRegistry<S>
where
    S: ComponentStore,
{
    /// 创建编排器实例
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 注册组件（含子组件）：
    /// 1. 先按声明顺序深度优先注册子组件；
    /// 2. 分配版本（最新版本 + 1，无历史版本时为 0）；
    /// 3. 调用 `on_create`（仅此一次）；
    /// 4. 持久化记录；
    /// 5. 调用 `schedule_jobs` 并汇总整棵组件树提交的作业。
    ///
    /// 已带版本且该版本已在存储中的组件（例如 `load` 得到的实例）跳过第 2-4 步，只调度作业。
    /// 钩子或存储失败时中止，记录不会写入，实例恢复为调用前的版本。
    pub async fn add(
        &self,
        component: &mut dyn Component,
        db: &dyn Coordinator,
        dependencies: &[Job],
        options: ScheduleOptions,
    ) -> ComponentResult<Vec<Job>> {
        self.add_tree(component, db, dependencies, options).await
    }

    fn add_tree<'a>(
        &'a self,
        component: &'a mut dyn Component,
        db: &'a dyn Coordinator,
        dependencies: &'a [Job],
        options: ScheduleOptions,
    ) -> BoxFuture<'a, ComponentResult<Vec<Job>>> {
        Box::pin(async move {
            let mut jobs = Vec::new();

            for child in component.child_components_mut() {
                debug!(
                    child = component_label(child.type_id(), child.identifier()),
                    "registering child component"
                );
                let child_jobs = self.add_tree(child, db, dependencies, options).await?;
                jobs.extend(child_jobs);
            }

            let type_id = component.type_id();
            let identifier = component.identifier().to_string();

            let stored = self
                .stored_version(type_id, &identifier, component.version())
                .await?;
            let unique_id = match stored {
                Some(version) => {
                    debug!(type_id, %identifier, %version, "component already stored, skipping create");
                    component.unique_id()?
                }
                None => self.persist_new(component, db).await?,
            };

            let own_jobs = component.schedule_jobs(db, dependencies, options)?;
            if options.verbose {
                info!(%unique_id, jobs = own_jobs.len(), "component jobs scheduled");
            }
            jobs.extend(own_jobs);

            Ok(jobs)
        })
    }

    /// 实例已带版本且存储中存在该版本时返回它
    async fn stored_version(
        &self,
        type_id: &str,
        identifier: &str,
        version: Option<Version>,
    ) -> ComponentResult<Option<Version>> {
        let Some(version) = version else {
            return Ok(None);
        };
        let stored = self.store.get(type_id, identifier, Some(version)).await?;
        Ok(stored.map(|_| version))
    }

    /// 分配下一个版本、调用 `on_create` 并写入记录；任一步失败都恢复实例原有的版本
    async fn persist_new(
        &self,
        component: &mut dyn Component,
        db: &dyn Coordinator,
    ) -> ComponentResult<String> {
        let previous = component.version();
        let latest = self
            .store
            .latest_version(component.type_id(), component.identifier())
            .await?;
        component.set_version(Version::after(latest));

        let saved: ComponentResult<String> = async {
            component.on_create(db)?;
            let record = SerializedComponent::from_component(&*component)?;
            let unique_id = record.unique_id().to_string();
            self.store.save(record).await?;
            Ok(unique_id)
        }
        .await;

        match saved {
            Ok(unique_id) => {
                info!(%unique_id, "component added");
                Ok(unique_id)
            }
            Err(err) => {
                match previous {
                    Some(version) => component.set_version(version),
                    None => component.clear_version(),
                }
                warn!(
                    type_id = component.type_id(),
                    identifier = component.identifier(),
                    error = %err,
                    "component add aborted"
                );
                Err(err)
            }
        }
    }

    /// 加载组件：读取记录（`version` 为 `None` 时取最新），恢复版本，
    /// 先对子组件（深度优先）再对组件本身调用 `on_load`。
    pub async fn load<C>(
        &self,
        identifier: &str,
        version: Option<Version>,
        db: &dyn Coordinator,
    ) -> ComponentResult<C>
    where
        C: Component + ComponentType + DeserializeOwned,
    {
        let record = self
            .store
            .get(C::TYPE_ID, identifier, version)
            .await?
            .ok_or_else(|| ComponentError::NotFound {
                reason: match version {
                    Some(v) => format!("{}/{identifier}/{}", C::TYPE_ID, v.value()),
                    None => format!("{}/{identifier}", C::TYPE_ID),
                },
            })?;

        let mut component = record.to_component::<C>()?;
        notify_loaded(&mut component, db)?;

        info!(unique_id = %record.unique_id(), "component loaded");
        Ok(component)
    }

    /// 某个组件所有已存储的版本
    pub async fn versions(&self, type_id: &str, identifier: &str) -> ComponentResult<Vec<Version>> {
        self.store.versions(type_id, identifier).await
    }
}

fn notify_loaded(component: &mut dyn Component, db: &dyn Coordinator) -> ComponentResult<()> {
    for child in component.child_components_mut() {
        notify_loaded(child, db)?;
    }
    component.on_load(db)
}

fn component_label(type_id: &str, identifier: &str) -> String {
    format!("{type_id}/{identifier}")
}
