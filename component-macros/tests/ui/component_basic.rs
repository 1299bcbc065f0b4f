use component_domain::component::Component;
use component_domain::identity::{ComponentType, Identity};
use component_domain::value_object::Version;
use component_macros::component;

#[component(type_id = "model")]
struct Classifier {
    threshold: f64,
}

impl Component for Classifier {}

// 已声明的 identifier/version 字段会被复用并移到最前
#[component(type_id = "watcher", debug = false)]
#[derive(Default)]
struct Watcher {
    select: String,
    version: Option<Version>,
    identifier: String,
}

impl std::fmt::Debug for Watcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Watcher({})", self.identifier)
    }
}

impl Component for Watcher {}

fn main() {
    let mut clf = Classifier {
        identifier: "clf1".to_string(),
        version: None,
        threshold: 0.5,
    };
    assert_eq!(Classifier::TYPE_ID, "model");
    assert_eq!(clf.type_id(), "model");
    assert!(clf.unique_id().is_err());

    clf.set_version(Version::from_value(2));
    assert_eq!(clf.unique_id().unwrap(), "model/clf1/2");
    let _ = format!("{:?}", clf.clone());
    clf.clear_version();
    assert!(clf.version().is_none());

    let w = Watcher::default();
    assert_eq!(<Watcher as ComponentType>::TYPE_ID, "watcher");
    let keys: Vec<String> = w.dict().unwrap().keys().cloned().collect();
    assert_eq!(keys.len(), 3);
    let _ = format!("{:?}", w);
}
