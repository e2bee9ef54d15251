//! Provider composition without hand-written nesting.
//!
//! A provider wraps a subtree: it sets up whatever it owns (usually a context)
//! and then builds the subtree inside that scope. Subtrees are deferred so an
//! inner provider and everything below it are constructed after the outer
//! providers have run, which lets inner providers read outer contexts.

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

/// A deferred subtree.
pub type Subtree<V> = Box<dyn FnOnce() -> V>;

/// Wraps a deferred subtree and returns the rendered result.
pub type Provider<V> = Box<dyn FnOnce(Subtree<V>) -> V>;

/// Nest `providers` around `subtree`, first entry outermost.
///
/// With no providers the subtree is returned untouched.
pub fn compose<V: 'static>(providers: Vec<Provider<V>>, subtree: Subtree<V>) -> Subtree<V> {
    providers
        .into_iter()
        .rev()
        .fold(subtree, |inner, provider| Box::new(move || provider(inner)))
}
