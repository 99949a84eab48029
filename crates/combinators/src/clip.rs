use std::collections::BTreeMap;

/// Arguments of a call: positional values plus named ones.
#[derive(Debug, Clone, PartialEq)]
pub struct CallArgs<T> {
    pub positional: Vec<T>,
    pub named: BTreeMap<String, T>,
}

impl<T> Default for CallArgs<T> {
    fn default() -> Self {
        Self {
            positional: Vec::new(),
            named: BTreeMap::new(),
        }
    }
}

impl<T> CallArgs<T> {
    pub fn positional(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            positional: values.into_iter().collect(),
            named: BTreeMap::new(),
        }
    }

    pub fn with_named(mut self, name: impl Into<String>, value: T) -> Self {
        self.named.insert(name.into(), value);
        self
    }
}

/// Wrap `f` so that it only ever sees the positional arguments.
pub fn clip<T, R, F>(f: F) -> impl Fn(&CallArgs<T>) -> R
where
    F: Fn(&[T]) -> R,
{
    move |args: &CallArgs<T>| {
        if !args.named.is_empty() {
            tracing::trace!(dropped = args.named.len(), "clipping named arguments");
        }
        f(&args.positional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join(values: &[String]) -> String {
        values.join(" ")
    }

    #[test]
    fn named_arguments_never_reach_the_inner_function() {
        let print = clip(join);
        let args = CallArgs::positional(["1".to_string(), "2".to_string()])
            .with_named("z", "3".to_string())
            .with_named("sep", "_".to_string());

        assert_eq!(print(&args), "1 2");
    }

    #[test]
    fn positional_only_calls_pass_through() {
        let sum = clip(|xs: &[i64]| xs.iter().sum::<i64>());
        assert_eq!(sum(&CallArgs::positional([1, 2, 3])), 6);
        assert_eq!(sum(&CallArgs::default()), 0);
    }
}
