use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dataset::{Label, LabelSequence};
use gym::{Env, FraudDetectionEnv};

fn bench_step(c: &mut Criterion) {
    let labels = LabelSequence::new(
        (0..100_000)
            .map(|i| if i % 577 == 0 { Label::Fraud } else { Label::NotFraud })
            .collect(),
    );
    let mut env = FraudDetectionEnv::new(labels).expect("non-empty dataset");
    env.seed(Some(0));

    c.bench_function("fraud_env_step", |b| {
        b.iter(|| {
            let action = env.sample_action();
            let t = env.step(black_box(action));
            if t.done {
                env.reset();
            }
            black_box(t.reward)
        });
    });
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
