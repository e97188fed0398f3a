//! Benchmarks for the format engine.
//!
//! Renders a synthetic class with a mix of fields, methods and constructors through every
//! renderer, with a permissive and a selective member filter.

extern crate jlscope;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use jlscope::{
    filter::MemberFilter,
    format::OutputType,
    metadata::{ClassRaw, ClassView, MemberRaw, Modifiers},
};
use std::hint::black_box;
use strum::IntoEnumIterator;

fn member(name: &str, ty: &str, modifiers: Modifiers, parameters: usize) -> MemberRaw {
    MemberRaw {
        kind: None,
        modifiers,
        ty: ty.to_string(),
        name: name.to_string(),
        parameters: (0..parameters)
            .map(|i| format!("java.lang.Param{i}"))
            .collect(),
        varargs: false,
        synthetic: false,
        bridge: false,
    }
}

fn large_class() -> ClassView {
    let access = [Modifiers::PUBLIC, Modifiers::PROTECTED, Modifiers::PRIVATE, Modifiers::empty()];

    let fields = (0..200)
        .map(|i| member(&format!("field{i}"), "int", access[i % 4] | Modifiers::STATIC, 0))
        .collect();
    let mut methods: Vec<MemberRaw> = (0..800)
        .map(|i| member(&format!("method{i}"), "java.lang.Object", access[i % 4], i % 5))
        .collect();
    methods.push(member("<init>", "void", Modifiers::PUBLIC, 2));
    methods.push(member("<clinit>", "void", Modifiers::STATIC, 0));

    ClassRaw {
        name: "com.example.Large".to_string(),
        modifiers: Modifiers::PUBLIC,
        fields,
        methods,
    }
    .to_owned()
    .unwrap()
}

fn bench_format(c: &mut Criterion) {
    let class = large_class();

    let mut group = c.benchmark_group("format");
    for output in OutputType::iter() {
        for filter in [MemberFilter::All, MemberFilter::Visible] {
            let formatter = output.formatter(Some(filter.rc()));
            group.bench_with_input(
                BenchmarkId::new(output.to_string(), filter),
                &class,
                |b, class| {
                    b.iter(|| black_box(formatter.format(black_box(class)).unwrap()));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_format);
criterion_main!(benches);
