use rand::Rng;

/// Invoke `f` exactly `times` times, collecting results in call order.
pub fn repeat<R>(times: usize, mut f: impl FnMut() -> R) -> Vec<R> {
    (0..times).map(|_| f()).collect()
}

/// Sum of `n` uniform samples from `[0, 1)`.
pub fn random_sum<G: Rng>(n: usize, rng: &mut G) -> f64 {
    (0..n).map(|_| rng.random::<f64>()).sum()
}
