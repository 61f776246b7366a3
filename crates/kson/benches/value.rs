use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kson::{js_array, js_object, json, JsValue};

fn document() -> JsValue {
    let pets: Vec<JsValue> = (0..100_i32)
        .map(|i| {
            JsValue::from(js_object! {
                "kind" => if i % 2 == 0 { "dog" } else { "cat" },
                "name" => format!("pet-{i}"),
                "age" => i,
                "weight" => f64::from(i) * 1.5,
            })
        })
        .collect();
    JsValue::from(js_object! {
        "firstName" => "Andrew",
        "tags" => js_array!["a", "b", "c"],
        "pets" => pets,
    })
}

fn bench_value(c: &mut Criterion) {
    let value = document();
    let text = json::to_string(&value).expect("Failed to serialize JSON");

    c.bench_function("parse", |b| {
        b.iter(|| json::from_str(black_box(&text)).expect("Failed to parse JSON"))
    });
    c.bench_function("serialize", |b| {
        b.iter(|| json::to_string(black_box(&value)).expect("Failed to serialize JSON"))
    });
    c.bench_function("index", |b| {
        b.iter(|| black_box(&value)["pets"][black_box(50_usize)]["name"].as_str())
    });
    c.bench_function("pointer", |b| {
        b.iter(|| black_box(&value).pointer(black_box("/pets/50/name")).is_ok())
    });
    c.bench_function("as_list", |b| {
        b.iter(|| {
            black_box(&value)["pets"]
                .as_list()
                .filter_map(|pet| pet["age"].as_int())
                .sum::<i32>()
        })
    });
}

criterion_group!(benches, bench_value);
criterion_main!(benches);
