#[macro_use]
extern crate bencher;

use bencher::{black_box, Bencher};
use denseset::BitSet;
use rand::{thread_rng, RngCore};

const BITS: usize = 2 << 16;

fn bench_dense_set(b: &mut Bencher) {
    let mut r = thread_rng();
    b.iter(|| {
        let mut set: BitSet<usize> = BitSet::new();
        for _ in 0..1000 {
            set.insert((r.next_u32() as usize) % BITS);
        }
        for x in set.iter() {
            black_box(x);
        }
    });
}

fn bench_dense_set_union(b: &mut Bencher) {
    let mut r = thread_rng();
    let mut left: BitSet<usize> = BitSet::new();
    let mut right: BitSet<usize> = BitSet::new();
    for _ in 0..1000 {
        left.insert((r.next_u32() as usize) % BITS);
        right.insert((r.next_u32() as usize) % BITS);
    }
    b.iter(|| {
        let mut merged = left.clone();
        merged.union_with(&right);
        black_box(merged.len());
    });
}

fn bench_hash_set(b: &mut Bencher) {
    let mut r = thread_rng();
    b.iter(|| {
        let mut set = std::collections::HashSet::new();
        for _ in 0..1000 {
            set.insert((r.next_u32() as usize) % BITS);
        }
        for x in set.iter() {
            black_box(x);
        }
    });
}

fn bench_bit_set(b: &mut Bencher) {
    let mut r = thread_rng();
    b.iter(|| {
        let mut set = bit_set::BitSet::new();
        for _ in 0..1000 {
            set.insert((r.next_u32() as usize) % BITS);
        }
        for x in set.iter() {
            black_box(x);
        }
    });
}

benchmark_group!(
    benches,
    bench_dense_set,
    bench_dense_set_union,
    bench_hash_set,
    bench_bit_set
);
benchmark_main!(benches);
