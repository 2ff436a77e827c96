use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_movegen::move_generation::legality_filter::LegalMoveGenerator;

#[path = "../tests/common/mod.rs"]
mod common;

use common::{load_position, perft, STARTPOS};

/// Reference position with its known node counts by depth. The quick suite
/// stops at `quick_depth`; the standard suite runs every listed depth.
struct BenchCase {
    name: &'static str,
    position: &'static str,
    nodes_by_depth: &'static [u64],
    quick_depth: usize,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        position: STARTPOS,
        nodes_by_depth: &[20, 400, 8902, 197_281],
        quick_depth: 3,
    },
    BenchCase {
        name: "castling_and_pins",
        position: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        nodes_by_depth: &[48, 2039, 97_862],
        quick_depth: 2,
    },
    BenchCase {
        name: "rook_and_pawn_endgame",
        position: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        nodes_by_depth: &[14, 191, 2812, 43_238],
        quick_depth: 3,
    },
    BenchCase {
        name: "promotion_heavy",
        position: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        nodes_by_depth: &[6, 264, 9467],
        quick_depth: 2,
    },
];

fn standard_suite() -> bool {
    std::env::var("PLUM_BENCH_SUITE").is_ok_and(|value| value.eq_ignore_ascii_case("standard"))
}

fn bench_perft(c: &mut Criterion) {
    let standard = standard_suite();
    let generator = LegalMoveGenerator::default();
    let mut group = c.benchmark_group(if standard { "perft_standard" } else { "perft_quick" });
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let position = load_position(case.position).expect("benchmark position should load");
        let depths = if standard {
            case.nodes_by_depth.len()
        } else {
            case.quick_depth
        };

        for (depth, &expected) in (1u8..).zip(&case.nodes_by_depth[..depths]) {
            // Refuse to time a generator that miscounts.
            let mut board = position.board;
            let nodes = perft(&generator, &mut board, position.side, depth);
            assert_eq!(nodes, expected, "{} depth {depth} miscounted", case.name);

            group.throughput(Throughput::Elements(expected));
            group.bench_function(BenchmarkId::new(case.name, depth), |b| {
                b.iter(|| {
                    let mut board = position.board;
                    black_box(perft(&generator, &mut board, position.side, black_box(depth)))
                });
            });
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
