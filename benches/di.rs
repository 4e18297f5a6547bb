use criterion::{black_box, criterion_group, criterion_main, Criterion};
use token_di::{DepSpec, Injector, Provider, StaticInjector, Token};

// ===== Micro Benchmarks =====

fn bench_value_hit(c: &mut Criterion) {
    let token = Token::new("VALUE");
    let injector =
        StaticInjector::create(vec![Provider::value(token.clone(), 42u64)], None).unwrap();

    // Prime the record
    let _ = injector.get(&token).unwrap();

    c.bench_function("value_hit_u64", |b| {
        b.iter(|| {
            let v = injector.get_as::<u64>(&token).unwrap();
            black_box(v);
        })
    });
}

fn bench_factory_cold(c: &mut Criterion) {
    struct ExpensiveToCreate {
        data: Vec<u64>,
    }

    let token = Token::new("EXPENSIVE");

    c.bench_function("factory_cold_expensive", |b| {
        b.iter_batched(
            || {
                StaticInjector::create(
                    vec![Provider::factory(token.clone(), vec![], |_| {
                        ExpensiveToCreate {
                            data: (0..1000).collect(),
                        }
                    })],
                    None,
                )
                .unwrap()
            },
            |injector| {
                let v = injector.get_as::<ExpensiveToCreate>(&token).unwrap();
                black_box(v.data.len());
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_dependency_chain(c: &mut Criterion) {
    // head depends on mid depends on tail; resolved-hit path after priming.
    let tail = Token::new("TAIL");
    let mid = Token::new("MID");
    let head = Token::new("HEAD");

    let injector = StaticInjector::create(
        vec![
            Provider::value(tail.clone(), 1u64),
            Provider::factory(mid.clone(), vec![DepSpec::of(tail.clone())], |deps| {
                deps[0].downcast_ref::<u64>().unwrap() + 1
            }),
            Provider::factory(head.clone(), vec![DepSpec::of(mid.clone())], |deps| {
                deps[0].downcast_ref::<u64>().unwrap() + 1
            }),
        ],
        None,
    )
    .unwrap();

    let _ = injector.get(&head).unwrap();

    c.bench_function("dependency_chain_hit", |b| {
        b.iter(|| {
            let v = injector.get_as::<u64>(&head).unwrap();
            black_box(*v);
        })
    });
}

fn bench_parent_chain_lookup(c: &mut Criterion) {
    let token = Token::new("ROOTED");

    let root = StaticInjector::create(vec![Provider::value(token.clone(), 7u64)], None).unwrap();
    let mut leaf = root;
    for _ in 0..4 {
        leaf = StaticInjector::create(Vec::<Provider>::new(), Some(leaf)).unwrap();
    }

    c.bench_function("parent_chain_depth_4", |b| {
        b.iter(|| {
            let v = leaf.get_as::<u64>(&token).unwrap();
            black_box(*v);
        })
    });
}

fn bench_multi_aggregation(c: &mut Criterion) {
    let token = Token::new("MANY");

    let providers: Vec<Provider> = (0..8)
        .map(|i| Provider::value(token.clone(), i as u64).multi())
        .collect();
    let injector = StaticInjector::create(providers, None).unwrap();

    let _ = injector.get(&token).unwrap();

    c.bench_function("multi_aggregation_hit_8", |b| {
        b.iter(|| {
            let v = injector.get_all(&token).unwrap();
            black_box(v.len());
        })
    });
}

criterion_group!(
    benches,
    bench_value_hit,
    bench_factory_cold,
    bench_dependency_chain,
    bench_parent_chain_lookup,
    bench_multi_aggregation
);
criterion_main!(benches);
