//! Function composition: the `pipe!` family and [`Pipeline`]

use std::fmt::Debug;

/// Compose two fallible stages, stopping at the first `Err`
pub fn try_forward_compose<A, B, C, E, F, G>(f: F, g: G) -> impl Fn(A) -> Result<C, E>
where
    F: Fn(A) -> Result<B, E>,
    G: Fn(B) -> Result<C, E>,
{
    move |a| f(a).and_then(&g)
}

/// Wrap a single stage so a one-element pipe has the same shape as a longer one
pub fn single<A, B, F>(f: F) -> impl Fn(A) -> B
where
    F: Fn(A) -> B,
{
    move |a| f(a)
}

/// Left-to-right composition of one or more unary functions.
///
/// `pipe!(f, g, h)` is a function equivalent to `|x| h(g(f(x)))`. Adjacent
/// stages must agree on types, which the compiler checks. An empty
/// `pipe!()` does not match any arm.
///
/// ```
/// use fnkit_core::pipe;
///
/// let xform = pipe!(
///     |x: i32| x + 3,
///     |y: i32| y * 2,
///     |z: i32| z.to_string(),
///     |s: String| s.repeat(3),
/// );
/// assert_eq!(xform(2), "101010");
/// ```
#[macro_export]
macro_rules! pipe {
    (@fold $acc:expr ;) => {
        $acc
    };
    (@fold $acc:expr ; $next:expr $(, $rest:expr)*) => {
        $crate::pipe!(
            @fold $crate::functional::operators::forward_compose($acc, $next) ;
            $($rest),*
        )
    };
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!(@fold $crate::functional::composition::single($first) ; $($rest),*)
    };
}

/// Like `pipe!`, for stages returning `Result` with a shared error type.
/// The first `Err` is returned as-is and later stages are skipped.
#[macro_export]
macro_rules! try_pipe {
    (@fold $acc:expr ;) => {
        $acc
    };
    (@fold $acc:expr ; $next:expr $(, $rest:expr)*) => {
        $crate::try_pipe!(
            @fold $crate::functional::composition::try_forward_compose($acc, $next) ;
            $($rest),*
        )
    };
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::try_pipe!(@fold $crate::functional::composition::single($first) ; $($rest),*)
    };
}

/// A composed function that can be stored in a field and extended later.
///
/// A `Pipeline` always holds at least one stage: the only constructor takes
/// the first one.
pub struct Pipeline<F> {
    stages: usize,
    f: F,
}

impl<F> Pipeline<F> {
    /// Start a pipeline from its first stage
    pub fn new(f: F) -> Self {
        Self { stages: 1, f }
    }

    /// Append a stage that consumes this pipeline's output
    pub fn then<A, B, C, G>(self, g: G) -> Pipeline<impl Fn(A) -> C>
    where
        F: Fn(A) -> B,
        G: Fn(B) -> C,
    {
        let f = self.f;
        Pipeline {
            stages: self.stages + 1,
            f: move |a| g(f(a)),
        }
    }

    /// Run the input through every stage
    pub fn call<A, B>(&self, input: A) -> B
    where
        F: Fn(A) -> B,
    {
        (self.f)(input)
    }

    /// Number of stages composed so far
    pub fn stages(&self) -> usize {
        self.stages
    }

    /// Unwrap into the plain composed closure
    pub fn into_fn(self) -> F {
        self.f
    }
}

impl<F> Debug for Pipeline<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages)
            .finish_non_exhaustive()
    }
}
