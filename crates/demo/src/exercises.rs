//! The call-combinator exercises, run once each.

use rand::Rng;
use serde::Serialize;

use storehub_combinators::{CallArgs, EveryOther, Memoize, clip, memoized_fib, random_sum, repeat};

/// Argument of the memoized Fibonacci exercise.
pub const FIB_ARGUMENT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinatorReport {
    /// `None` if the result overflowed.
    pub fib: Option<u128>,
    /// Distinct arguments the memoized Fibonacci evaluated.
    pub fib_evaluations: u64,
    /// Output of the clipped printer, one line per call.
    pub clipped: Vec<String>,
    /// Output of the every-other greeter; `None` for swallowed calls.
    pub greetings: Vec<Option<String>>,
    pub random_sums: Vec<f64>,
}

pub fn run_combinators<G: Rng>(
    repeat_times: usize,
    sample_size: usize,
    rng: &mut G,
) -> CombinatorReport {
    let mut memo = Memoize::new();
    let fib = memoized_fib(&mut memo, FIB_ARGUMENT);

    let print_clip = clip(|values: &[String]| values.join(" "));
    let clipped = vec![
        print_clip(
            &CallArgs::positional(["1".to_string(), "2".to_string()])
                .with_named("z", "3".to_string())
                .with_named("s", "_".to_string()),
        ),
        print_clip(
            &CallArgs::positional(["1".to_string(), "2".to_string(), "3".to_string()])
                .with_named("sep", "_".to_string()),
        ),
    ];

    let mut print_hello = EveryOther::new(|x: u32| format!("hello {x}"));
    let greetings = (1..=4).map(|x| print_hello.call(x)).collect();

    tracing::info!(repeat_times, sample_size, "sampling random sums");
    let random_sums = repeat(repeat_times, || random_sum(sample_size, rng));

    CombinatorReport {
        fib,
        fib_evaluations: memo.misses(),
        clipped,
        greetings,
        random_sums,
    }
}
