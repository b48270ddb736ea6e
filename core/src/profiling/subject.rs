//! Capability interfaces for the profiled function and its input generator
//!
//! The profiler never inspects inputs or outputs. An analyzed function only
//! needs `invoke(input)`, a generator only needs `generate(size)`; both carry
//! a name used to identify them in exported records.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use super::error::BoxError;

/// A function whose running time is profiled
pub trait AnalyzedFunction<I: ?Sized> {
    /// Value returned by one invocation, discarded by the profiler
    type Output;

    /// Identifier recorded in the result
    fn name(&self) -> &str;

    /// Run the function once on `input`
    fn invoke(&self, input: &I) -> Result<Self::Output, BoxError>;
}

/// A function producing an input of a requested size
pub trait InputGenerator {
    type Input;

    /// Identifier recorded in the result
    fn name(&self) -> &str;

    /// Produce an input with `size` elements
    fn generate(&self, size: usize) -> Self::Input;
}

impl<I: ?Sized, T: AnalyzedFunction<I> + ?Sized> AnalyzedFunction<I> for &T {
    type Output = T::Output;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn invoke(&self, input: &I) -> Result<Self::Output, BoxError> {
        (**self).invoke(input)
    }
}

impl<T: InputGenerator + ?Sized> InputGenerator for &T {
    type Input = T::Input;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn generate(&self, size: usize) -> Self::Input {
        (**self).generate(size)
    }
}

/// Named infallible closure, see [`analyzed`]
#[derive(Clone)]
pub struct Analyzed<F> {
    name: String,
    function: F,
}

/// Named closure returning `Result`, see [`fallible`]
#[derive(Clone)]
pub struct FallibleAnalyzed<F> {
    name: String,
    function: F,
}

/// Named generator closure, see [`generator`]
#[derive(Clone)]
pub struct Generator<F> {
    name: String,
    function: F,
}

/// Wrap an infallible closure as an analyzed function
pub fn analyzed<F>(name: impl Into<String>, function: F) -> Analyzed<F> {
    Analyzed {
        name: name.into(),
        function,
    }
}

/// Wrap a closure returning `Result` as an analyzed function
///
/// The first `Err` aborts the profiling run and is surfaced unchanged.
pub fn fallible<F>(name: impl Into<String>, function: F) -> FallibleAnalyzed<F> {
    FallibleAnalyzed {
        name: name.into(),
        function,
    }
}

/// Wrap a closure as an input generator
pub fn generator<F>(name: impl Into<String>, function: F) -> Generator<F> {
    Generator {
        name: name.into(),
        function,
    }
}

impl<F> Analyzed<F> {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<F> FallibleAnalyzed<F> {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<I, O, F> AnalyzedFunction<I> for Analyzed<F>
where
    I: ?Sized,
    F: Fn(&I) -> O,
{
    type Output = O;

    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn invoke(&self, input: &I) -> Result<O, BoxError> {
        Ok((self.function)(input))
    }
}

impl<I, O, E, F> AnalyzedFunction<I> for FallibleAnalyzed<F>
where
    I: ?Sized,
    F: Fn(&I) -> Result<O, E>,
    E: Into<BoxError>,
{
    type Output = O;

    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn invoke(&self, input: &I) -> Result<O, BoxError> {
        (self.function)(input).map_err(Into::into)
    }
}

impl<T, F> InputGenerator for Generator<F>
where
    F: Fn(usize) -> T,
{
    type Input = T;

    fn name(&self) -> &str {
        &self.name
    }

    fn generate(&self, size: usize) -> T {
        (self.function)(size)
    }
}

impl<F> std::fmt::Debug for Analyzed<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzed").field("name", &self.name).finish()
    }
}

impl<F> std::fmt::Debug for FallibleAnalyzed<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallibleAnalyzed").field("name", &self.name).finish()
    }
}

impl<F> std::fmt::Debug for Generator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closures_keep_their_names() {
        let sum = analyzed("sum", |values: &Vec<u64>| values.iter().sum::<u64>());
        let ones = generator("ones", |size: usize| vec![1u64; size]);

        assert_eq!(sum.name(), "sum");
        assert_eq!(ones.name(), "ones");
        assert_eq!(sum.invoke(&ones.generate(5)).unwrap(), 5);
    }

    #[test]
    fn test_fallible_errors_are_boxed() {
        let parse = fallible("parse", |text: &str| text.parse::<u32>());

        assert_eq!(parse.invoke("42").unwrap(), 42);
        let error = parse.invoke("forty-two").unwrap_err();
        assert!(error.downcast_ref::<std::num::ParseIntError>().is_some());
    }

    #[test]
    fn test_references_forward_calls() {
        let length = analyzed("length", |text: &String| text.len());
        let by_ref = &length;

        assert_eq!(AnalyzedFunction::<String>::name(&by_ref), "length");
        assert_eq!(by_ref.invoke(&"abc".to_string()).unwrap(), 3);
    }
}
