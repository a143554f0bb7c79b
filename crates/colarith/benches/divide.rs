//! Division benchmarks using divan
//!
//! Compares the generic dense-by-constant kernel against the constant-divisor
//! fast path for `intDiv` and `modulo`.

use colarith::{Column, DenseColumn, KernelRegistry, OperationKind, Scalar};
use std::sync::LazyLock;

fn main() {
    divan::main();
}

const ROWS: usize = 65_536;

static GENERIC: LazyLock<KernelRegistry> =
    LazyLock::new(|| KernelRegistry::builder().fast_path(false).build().unwrap());

static FAST: LazyLock<KernelRegistry> = LazyLock::new(|| KernelRegistry::new().unwrap());

fn unsigned_rows() -> Column {
    Column::from(DenseColumn::UInt64(
        (0..ROWS as u64).map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15)).collect(),
    ))
}

fn signed_rows() -> Column {
    Column::from(DenseColumn::Int32(
        (0..ROWS as i32).map(|i| i.wrapping_mul(-1_640_531_527)).collect(),
    ))
}

// === intDiv ===

mod int_div {
    use super::*;

    #[divan::bench(args = [3, 7, 1000, 1 << 20])]
    fn generic_u64(bencher: divan::Bencher, divisor: u64) {
        let rows = unsigned_rows();
        let divisor = Column::constant(Scalar::UInt64(divisor), ROWS);
        bencher.bench_local(|| GENERIC.execute(OperationKind::DivideInt, &rows, Some(&divisor)));
    }

    #[divan::bench(args = [3, 7, 1000, 1 << 20])]
    fn fast_u64(bencher: divan::Bencher, divisor: u64) {
        let rows = unsigned_rows();
        let divisor = Column::constant(Scalar::UInt64(divisor), ROWS);
        bencher.bench_local(|| FAST.execute(OperationKind::DivideInt, &rows, Some(&divisor)));
    }

    #[divan::bench(args = [-7, 3, 1000])]
    fn generic_i32(bencher: divan::Bencher, divisor: i32) {
        let rows = signed_rows();
        let divisor = Column::constant(Scalar::Int32(divisor), ROWS);
        bencher.bench_local(|| GENERIC.execute(OperationKind::DivideInt, &rows, Some(&divisor)));
    }

    #[divan::bench(args = [-7, 3, 1000])]
    fn fast_i32(bencher: divan::Bencher, divisor: i32) {
        let rows = signed_rows();
        let divisor = Column::constant(Scalar::Int32(divisor), ROWS);
        bencher.bench_local(|| FAST.execute(OperationKind::DivideInt, &rows, Some(&divisor)));
    }
}

// === modulo ===

mod modulo {
    use super::*;

    #[divan::bench]
    fn generic_u64(bencher: divan::Bencher) {
        let rows = unsigned_rows();
        let divisor = Column::constant(Scalar::UInt8(10), ROWS);
        bencher.bench_local(|| GENERIC.execute(OperationKind::Modulo, &rows, Some(&divisor)));
    }

    #[divan::bench]
    fn fast_u64(bencher: divan::Bencher) {
        let rows = unsigned_rows();
        let divisor = Column::constant(Scalar::UInt8(10), ROWS);
        bencher.bench_local(|| FAST.execute(OperationKind::Modulo, &rows, Some(&divisor)));
    }

    #[divan::bench(args = [16, 32, 64])]
    fn fast_i32_by_width(bencher: divan::Bencher, width: usize) {
        let registry = KernelRegistry::builder().vector_width(width).build().unwrap();
        let rows = signed_rows();
        let divisor = Column::constant(Scalar::Int16(-10), ROWS);
        bencher.bench_local(|| registry.execute(OperationKind::Modulo, &rows, Some(&divisor)));
    }
}
