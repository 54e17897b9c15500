//! Distance matrices with known optimal tours.

use optiquiz_core::DistanceMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `n` nodes on a ring: neighbours are 1 apart, every other pair 3.
///
/// The optimal tour from 0 walks the ring and costs `n`.
pub fn ring(n: usize) -> DistanceMatrix {
    let rows = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    let gap = i.abs_diff(j);
                    if gap == 0 {
                        0
                    } else if gap == 1 || gap == n - 1 {
                        1
                    } else {
                        3
                    }
                })
                .collect()
        })
        .collect();
    DistanceMatrix::new(rows).expect("ring matrix is valid")
}

/// A 4-node matrix where going round one way is much cheaper.
///
/// `0 -> 1 -> 2 -> 3 -> 0` costs 4; the reverse direction costs 40.
pub fn asymmetric_four() -> DistanceMatrix {
    DistanceMatrix::new(vec![
        vec![0, 1, 10, 10],
        vec![10, 0, 1, 10],
        vec![10, 10, 0, 1],
        vec![1, 10, 10, 0],
    ])
    .expect("asymmetric matrix is valid")
}

/// A seeded symmetric matrix with entries in `50..=100`.
pub fn random_symmetric(n: usize, seed: u64) -> DistanceMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = vec![vec![0u32; n]; n];
    for i in 0..n {
        for j in i + 1..n {
            let d = rng.random_range(50..=100);
            rows[i][j] = d;
            rows[j][i] = d;
        }
    }
    DistanceMatrix::new(rows).expect("random matrix is valid")
}
