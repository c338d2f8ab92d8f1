//! Small general-purpose function operators

use std::any::Any;

/// Forward composition operator (f >> g)
pub fn forward_compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |a| g(f(a))
}

/// Identity function. Returns its argument untouched, so a reference or an
/// `Arc` comes back pointing at the same allocation.
pub fn identity<T>(x: T) -> T {
    x
}

/// No-op. Takes ownership of whatever it is given and drops it; pass a tuple
/// to discard several values at once.
pub fn empty_fn<A>(_args: A) {}

/// Identity that erases the static type; the caller downcasts.
pub fn echo(x: Box<dyn Any + Send>) -> Box<dyn Any + Send> {
    x
}

/// Pair two sequences element-wise, stopping at the end of the shorter one.
pub fn zip<A, B>(a: impl IntoIterator<Item = A>, b: impl IntoIterator<Item = B>) -> Vec<(A, B)> {
    a.into_iter().zip(b).collect()
}
