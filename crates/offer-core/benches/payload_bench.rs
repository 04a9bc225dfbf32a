//! Criterion benchmarks for the payload codec.
//!
//! Measures encode and decode latency for the payload shapes the bridge
//! handles most often: identifier wrappers on the command path, and offers
//! and status updates on the event path.
//!
//! Run with:
//! ```bash
//! cargo bench --package offer-core --bench payload_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use offer_core::{
    CommandInfo, Filters, FrameworkId, Offer, OfferId, Payload, Resource, ResourceValue, SlaveId,
    TaskId, TaskInfo, TaskState, TaskStatus,
};
use uuid::Uuid;

// ── Value fixtures ────────────────────────────────────────────────────────────

fn make_offer_id() -> OfferId {
    OfferId {
        value: Uuid::new_v4().to_string(),
    }
}

fn make_filters() -> Filters {
    Filters {
        refuse_seconds: Some(5.0),
    }
}

fn make_offer(resource_count: usize) -> Offer {
    Offer {
        id: make_offer_id(),
        framework_id: FrameworkId {
            value: "fw-bench".to_string(),
        },
        slave_id: SlaveId {
            value: "slave-bench".to_string(),
        },
        hostname: "bench.cluster".to_string(),
        resources: (0..resource_count)
            .map(|i| Resource {
                name: format!("resource-{i}"),
                value: ResourceValue::Scalar(i as f64),
            })
            .collect(),
    }
}

fn make_task_info() -> TaskInfo {
    TaskInfo {
        name: "bench-task".to_string(),
        task_id: TaskId {
            value: Uuid::new_v4().to_string(),
        },
        slave_id: SlaveId {
            value: "slave-bench".to_string(),
        },
        resources: vec![Resource {
            name: "cpus".to_string(),
            value: ResourceValue::Scalar(1.0),
        }],
        command: Some(CommandInfo {
            value: "/bin/true".to_string(),
            arguments: vec![],
            shell: false,
        }),
    }
}

fn make_task_status() -> TaskStatus {
    TaskStatus {
        task_id: TaskId {
            value: "task-bench".to_string(),
        },
        state: TaskState::Running,
        message: None,
        slave_id: Some(SlaveId {
            value: "slave-bench".to_string(),
        }),
        executor_id: None,
        timestamp: Some(0.0),
    }
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    let offer_id = make_offer_id();
    group.bench_function("offer_id", |b| {
        b.iter(|| Payload::encode(black_box(&offer_id)).unwrap())
    });

    let filters = make_filters();
    group.bench_function("filters", |b| {
        b.iter(|| Payload::encode(black_box(&filters)).unwrap())
    });

    let task = make_task_info();
    group.bench_function("task_info", |b| {
        b.iter(|| Payload::encode(black_box(&task)).unwrap())
    });

    let status = make_task_status();
    group.bench_function("task_status", |b| {
        b.iter(|| Payload::encode(black_box(&status)).unwrap())
    });

    for resource_count in [1, 8, 64] {
        let offer = make_offer(resource_count);
        group.bench_with_input(
            BenchmarkId::new("offer", resource_count),
            &offer,
            |b, offer| b.iter(|| Payload::encode(black_box(offer)).unwrap()),
        );
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let offer_id_payload = Payload::encode(&make_offer_id()).unwrap();
    group.bench_function("offer_id", |b| {
        b.iter(|| {
            let id: OfferId = black_box(&offer_id_payload).decode().unwrap();
            id
        })
    });

    let task_payload = Payload::encode(&make_task_info()).unwrap();
    group.bench_function("task_info", |b| {
        b.iter(|| {
            let task: TaskInfo = black_box(&task_payload).decode().unwrap();
            task
        })
    });

    for resource_count in [1, 8, 64] {
        let payload = Payload::encode(&make_offer(resource_count)).unwrap();
        group.bench_with_input(
            BenchmarkId::new("offer", resource_count),
            &payload,
            |b, payload| {
                b.iter(|| {
                    let offer: Offer = black_box(payload).decode().unwrap();
                    offer
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
