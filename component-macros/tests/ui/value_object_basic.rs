use component_macros::value_object;

#[value_object]
struct Amount {
    value: i64,
}

#[value_object(debug = false)]
struct NonDebugVO(i32);

#[value_object(default = false)]
struct Token(String);

#[value_object]
enum Level {
    #[default]
    Low,
    High,
}

fn main() {
    // Debug 默认开启，应可格式化
    let _ = format!("{:?}", Amount { value: 0 });

    // Default/Clone/PartialEq 可用（编译期检查足矣）
    let a = Amount::default();
    let _b = a.clone();
    let _eq = a == Amount { value: 0 };

    // debug = false 时不派生 Debug，只做构造
    let _ = NonDebugVO(1);

    // default = false 时仍具备 Clone/PartialEq
    let t = Token("t".to_string());
    let _same = t.clone() == t;

    let _lv: Level = Default::default();
    let _hi = Level::High;
}
