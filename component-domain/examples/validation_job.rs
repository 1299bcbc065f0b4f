//! 示例：为模型构造验证作业并提交给协调者
use component_domain::component::Component;
use component_domain::coordinator::Coordinator;
use component_domain::dataset::Dataset;
use component_domain::error::ComponentResult;
use component_domain::job::{Job, JobId};
use component_macros::component;
use serde_json::json;
use std::sync::Mutex;

#[component(type_id = "model")]
struct Classifier {
    labels: Vec<String>,
}

impl Component for Classifier {}

#[derive(Default)]
struct PrintingCoordinator {
    queue: Mutex<Vec<Job>>,
}

impl Coordinator for PrintingCoordinator {
    fn submit_job(&self, job: Job) -> ComponentResult<JobId> {
        println!("📥 收到作业 {}", job.id());
        let id = job.id();
        self.queue.lock().unwrap().push(job);
        Ok(id)
    }
}

fn main() -> ComponentResult<()> {
    println!("=== 验证作业示例 ===\n");

    let clf = Classifier {
        identifier: "clf1".to_string(),
        version: None,
        labels: vec!["cat".into(), "dog".into()],
    };

    match clf.unique_id() {
        Ok(id) => println!("unique_id: {id}"),
        Err(e) => println!("⚠️  {e}"),
    }

    // 按名称引用数据集
    let by_name = clf.create_validation_job("my_dataset", ["accuracy", "f1"]);
    println!("✅ 按名称: {}", serde_json::to_string_pretty(by_name.kwargs())?);

    // 直接携带数据集对象
    let holdout = Dataset::new("holdout", vec![json!({"x": [0.1, 0.2], "y": "cat"})]);
    let inline = clf.create_validation_job(holdout, ["accuracy"]);
    println!("✅ 携带数据集: {}", serde_json::to_string_pretty(inline.kwargs())?);

    let db = PrintingCoordinator::default();
    let first = Job::from(by_name).submit(&db, &[], false)?;
    let second = Job::from(inline).submit(&db, std::slice::from_ref(&first), false)?;
    println!(
        "\n作业 {} 依赖 {:?}，队列中共 {} 个作业",
        second.id(),
        second.dependencies(),
        db.queue.lock().unwrap().len()
    );

    Ok(())
}
