//! Tick-loop benchmarks.

use choreo_animation::{AnimationSpec, Choreographer, ManualClock, ManualScheduler};
use choreo_core::{Point, Target, TargetRef};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;
use std::time::Duration;

struct NullWindow;

impl Target for NullWindow {
    fn move_to(&self, _position: Point) {}

    fn close(&self) {}

    fn is_closed(&self) -> bool {
        false
    }
}

fn loaded_manager(n: usize) -> Choreographer<ManualClock, ManualScheduler> {
    let mut mgr = Choreographer::new(ManualClock::new(), ManualScheduler::new());
    for i in 0..n {
        mgr.register_animation(
            format!("anim-{i}"),
            AnimationSpec::new()
                .target(Arc::new(NullWindow) as TargetRef)
                .update(|_ctx, elapsed| {
                    black_box(elapsed.as_secs_f64());
                    Ok(())
                }),
        );
    }
    mgr.start();
    mgr
}

/// Benchmark one tick pass across registry sizes.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for size in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("animations", size), &size, |b, &size| {
            let mut mgr = loaded_manager(size);
            b.iter(|| {
                mgr.clock_mut().advance(Duration::from_micros(16));
                mgr.tick();
            })
        });
    }

    group.finish();
}

/// Benchmark the register/stop cycle churn-heavy hosts lean on.
fn bench_registration_churn(c: &mut Criterion) {
    c.bench_function("register_then_stop", |b| {
        let mut mgr = Choreographer::new(ManualClock::new(), ManualScheduler::new());
        b.iter(|| {
            mgr.register_animation(
                "churn",
                AnimationSpec::new().target(Arc::new(NullWindow) as TargetRef),
            );
            mgr.stop_animation("churn");
        })
    });
}

criterion_group!(benches, bench_tick, bench_registration_churn);
criterion_main!(benches);
