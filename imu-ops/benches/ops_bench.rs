use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use im::{HashMap, Vector};
use imu_ops::{Key, Map, map, seq};
use std::iter;

fn bench_seq(c: &mut Criterion) {
    let mut group = c.benchmark_group("seq");
    for size in [16usize, 256, 4096] {
        let items: Vec<u64> = (0..size as u64).collect();
        group.bench_with_input(BenchmarkId::new("add", size), &items, |b, items| {
            b.iter(|| seq::add(black_box(items), 7))
        });
        group.bench_with_input(BenchmarkId::new("del", size), &items, |b, items| {
            b.iter(|| seq::del(black_box(items), &3))
        });
    }
    group.finish();
}

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");
    for size in [16usize, 256, 4096] {
        let entries: Map<u64> = (0..size as u64).map(|i| (Key::from(i), i)).collect();
        group.bench_with_input(BenchmarkId::new("set", size), &entries, |b, entries| {
            b.iter(|| map::set(black_box(entries), 3, 0))
        });
        group.bench_with_input(BenchmarkId::new("del", size), &entries, |b, entries| {
            b.iter(|| map::del(black_box(entries), 3))
        });
    }
    group.finish();
}

fn bench_seq_techniques(c: &mut Criterion) {
    let mut group = c.benchmark_group("seq_techniques");
    for size in [16usize, 256, 4096] {
        let items: Vec<u64> = (0..size as u64).collect();
        let persistent = Vector::from(items.clone());

        group.bench_with_input(BenchmarkId::new("add/seq", size), &items, |b, items| {
            b.iter(|| seq::add(black_box(items), 7))
        });
        group.bench_with_input(BenchmarkId::new("add/chain", size), &items, |b, items| {
            b.iter(|| {
                black_box(items)
                    .iter()
                    .copied()
                    .chain(iter::once(7))
                    .collect::<Vec<_>>()
            })
        });
        group.bench_with_input(BenchmarkId::new("add/concat", size), &items, |b, items| {
            b.iter(|| [&black_box(items)[..], &[7][..]].concat())
        });
        group.bench_with_input(BenchmarkId::new("add/im", size), &persistent, |b, v| {
            b.iter(|| {
                let mut out = black_box(v).clone();
                out.push_back(7);
                out
            })
        });

        group.bench_with_input(BenchmarkId::new("del/seq", size), &items, |b, items| {
            b.iter(|| seq::del(black_box(items), &3))
        });
        group.bench_with_input(BenchmarkId::new("del/retain", size), &items, |b, items| {
            b.iter(|| {
                let mut out = black_box(items).clone();
                out.retain(|&x| x != 3);
                out
            })
        });
        group.bench_with_input(BenchmarkId::new("del/splice", size), &items, |b, items| {
            b.iter(|| {
                let mut out = black_box(items).clone();
                if let Some(at) = out.iter().position(|&x| x == 3) {
                    out.splice(at..=at, []).for_each(drop);
                }
                out
            })
        });
        group.bench_with_input(BenchmarkId::new("del/im", size), &persistent, |b, v| {
            b.iter(|| {
                let mut out = black_box(v).clone();
                out.retain(|&x| x != 3);
                out
            })
        });
    }
    group.finish();
}

fn bench_map_techniques(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_techniques");
    for size in [16usize, 256, 4096] {
        let entries: Map<u64> = (0..size as u64).map(|i| (Key::from(i), i)).collect();
        let persistent: HashMap<Key, u64> = entries.clone().into_iter().collect();

        group.bench_with_input(BenchmarkId::new("set/map", size), &entries, |b, entries| {
            b.iter(|| map::set(black_box(entries), 3, 0))
        });
        group.bench_with_input(BenchmarkId::new("set/im", size), &persistent, |b, m| {
            b.iter(|| black_box(m).update(Key::from(3), 0))
        });

        group.bench_with_input(BenchmarkId::new("del/map", size), &entries, |b, entries| {
            b.iter(|| map::del(black_box(entries), 3))
        });
        group.bench_with_input(BenchmarkId::new("del/filter", size), &entries, |b, entries| {
            b.iter(|| {
                black_box(entries)
                    .iter()
                    .filter(|(k, _)| k.as_str() != "3")
                    .map(|(k, v)| (k.clone(), *v))
                    .collect::<Map<u64>>()
            })
        });
        group.bench_with_input(BenchmarkId::new("del/im", size), &persistent, |b, m| {
            b.iter(|| black_box(m).without("3"))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_seq,
    bench_map,
    bench_seq_techniques,
    bench_map_techniques
);
criterion_main!(benches);
