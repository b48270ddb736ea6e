//! ASYMPTOTE core
//!
//! Empirical time-complexity profiler: times a function over progressively
//! larger inputs and infers its asymptotic class by least-squares fitting.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod challenges;
pub mod export;
pub mod generators;
pub mod profiling;

pub use self::profiling::*;
