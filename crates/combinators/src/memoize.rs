use std::collections::HashMap;
use std::hash::Hash;

/// Result cache keyed by the full argument tuple.
///
/// The computation is passed per call rather than stored, so a recursive
/// function can thread the same cache through its own recursion.
#[derive(Debug, Clone)]
pub struct Memoize<A, R> {
    cache: HashMap<A, R>,
    hits: u64,
    misses: u64,
}

impl<A, R> Default for Memoize<A, R> {
    fn default() -> Self {
        Self {
            cache: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }
}

impl<A, R> Memoize<A, R>
where
    A: Clone + Eq + Hash,
    R: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached result for `args`, computing and storing it on a miss.
    ///
    /// `compute` receives the cache so it can recurse through it.
    pub fn get_or_compute<F>(&mut self, args: A, compute: F) -> R
    where
        F: FnOnce(&mut Self, &A) -> R,
    {
        if let Some(hit) = self.cache.get(&args) {
            self.hits += 1;
            return hit.clone();
        }
        self.misses += 1;
        let result = compute(self, &args);
        self.cache.insert(args, result.clone());
        result
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

/// Largest argument whose Fibonacci number fits in a `u128`.
pub const MAX_FIB_ARGUMENT: u32 = 185;

/// Fibonacci with `fib(0) = fib(1) = 1`, each `n` evaluated once per cache.
///
/// Returns `None` when the result overflows `u128` (`n > MAX_FIB_ARGUMENT`).
pub fn memoized_fib(memo: &mut Memoize<u32, Option<u128>>, n: u32) -> Option<u128> {
    memo.get_or_compute(n, |memo, &n| {
        tracing::debug!(n, "evaluating fib");
        if n < 2 {
            return Some(1);
        }
        let prev = memoized_fib(memo, n - 1)?;
        let before = memoized_fib(memo, n - 2)?;
        prev.checked_add(before)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_of_ten() {
        let mut memo = Memoize::new();
        assert_eq!(memoized_fib(&mut memo, 10), Some(89));
    }

    #[test]
    fn fib_reports_overflow_instead_of_wrapping() {
        let mut memo = Memoize::new();
        let last = memoized_fib(&mut memo, MAX_FIB_ARGUMENT).unwrap();
        assert_eq!(last, 332_825_110_087_067_562_321_196_029_789_634_457_848);

        assert_eq!(memoized_fib(&mut memo, MAX_FIB_ARGUMENT + 1), None);
        assert_eq!(memoized_fib(&mut Memoize::new(), 190), None);
    }

    #[test]
    fn fib_evaluates_each_argument_once() {
        let mut memo = Memoize::new();
        memoized_fib(&mut memo, 30);
        assert_eq!(memo.misses(), 31);
        assert_eq!(memo.len(), 31);

        let hits_before = memo.hits();
        memoized_fib(&mut memo, 30);
        assert_eq!(memo.misses(), 31);
        assert_eq!(memo.hits(), hits_before + 1);
    }

    #[test]
    fn caches_by_full_argument_tuple() {
        let mut memo: Memoize<(i32, i32), i32> = Memoize::new();
        let mut calls = 0;

        for args in [(1, 2), (2, 1), (1, 2), (1, 2)] {
            memo.get_or_compute(args, |_, &(a, b)| {
                calls += 1;
                a * 10 + b
            });
        }

        assert_eq!(calls, 2);
        assert_eq!(memo.get_or_compute((2, 1), |_, _| unreachable!()), 21);
    }
}
