use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mshop_domain::search::SearchAttribute;
use mshop_kernel::Context;
use mshop_kernel::config::Settings;
use mshop_manager::prelude::*;
use serde_json::json;
use std::any::Any;
use std::hint::black_box;
use std::sync::Arc;

#[derive(Debug)]
struct Plain(ManagerBase);

impl Manager for Plain {
    fn name(&self) -> &TypeName {
        self.0.class()
    }

    fn implements(&self, iface: &TypeName) -> bool {
        self.0.implements(iface)
    }

    fn search_attributes(&self, _with_sub: bool) -> Result<Vec<SearchAttribute>, ManagerError> {
        Ok(Vec::new())
    }

    fn sub_manager(&self, manager: &str, name: Option<&str>) -> Result<ManagerHandle, ManagerError> {
        self.0.sub_manager(manager, name)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct Noop;

impl DecoratorHook for Noop {}

fn resolver(decorators: usize) -> Resolver {
    let names: Vec<String> = (0..decorators).map(|i| format!("Layer{i}")).collect();
    let builder = Registry::builder().manager("Bench::Manager::Lists::Standard", |resolver| {
        Ok(Arc::new(Plain(ManagerBase::new(resolver, "bench", Some("lists"), "Standard")?)) as ManagerHandle)
    });
    let registry = names
        .iter()
        .fold(builder, |builder, name| builder.hook(format!("Common::Manager::Decorator::{name}"), |_| Noop))
        .build()
        .unwrap();

    let settings = Settings::default().with("mshop/common/manager/decorators/default", json!(names));
    Resolver::new(Context::builder().config(settings).build(), registry)
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for decorators in [0usize, 4, 16] {
        let resolver = resolver(decorators);

        group.bench_with_input(BenchmarkId::new("uncached", decorators), &resolver, |b, r| {
            b.iter(|| r.resolve(black_box("bench"), Some("lists"), None).unwrap());
        });

        let subs = SubManagers::new(resolver.clone());
        subs.get("bench", "lists", None).unwrap();
        group.bench_with_input(BenchmarkId::new("cached", decorators), &subs, |b, s| {
            b.iter(|| s.get(black_box("bench"), "lists", None).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
