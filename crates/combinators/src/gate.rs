/// Runs the wrapped function on every second call only.
///
/// Calls are counted from 1; odd-numbered calls are swallowed and return
/// `None`.
#[derive(Debug, Clone)]
pub struct EveryOther<F> {
    f: F,
    calls: u64,
}

impl<F> EveryOther<F> {
    pub fn new(f: F) -> Self {
        Self { f, calls: 0 }
    }

    /// Calls seen so far, including swallowed ones.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    pub fn call<A, R>(&mut self, args: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        self.calls += 1;
        if self.calls % 2 != 0 {
            return None;
        }
        Some((self.f)(args))
    }
}
