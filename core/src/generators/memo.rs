//! Opt-in memoization of generated inputs
//!
//! Wraps any generator and hands out clones of the first input produced for
//! each size. Repeated runs over the same sizes then measure the analyzed
//! function against identical inputs.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::cell::RefCell;
use std::collections::HashMap;

use log::trace;

use crate::profiling::InputGenerator;

/// Caches the input produced for each size and hands out clones
///
/// The cache belongs to the wrapper, so two profiling runs only share inputs
/// when they share the wrapper.
pub struct Memoized<G: InputGenerator> {
    inner: G,
    cache: RefCell<HashMap<usize, G::Input>>,
}

impl<G: InputGenerator> Memoized<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Number of cached sizes
    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }

    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: InputGenerator> std::fmt::Debug for Memoized<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memoized")
            .field("generator", &self.inner.name())
            .field("cached", &self.cached())
            .finish()
    }
}

impl<G> InputGenerator for Memoized<G>
where
    G: InputGenerator,
    G::Input: Clone,
{
    type Input = G::Input;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn generate(&self, size: usize) -> G::Input {
        if let Some(input) = self.cache.borrow().get(&size) {
            trace!("{}: cached input for size {}", self.inner.name(), size);
            return input.clone();
        }
        let input = self.inner.generate(size);
        self.cache.borrow_mut().insert(size, input.clone());
        input
    }
}
