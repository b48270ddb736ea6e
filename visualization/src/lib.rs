//! ASYMPTOTE visualization
//!
//! Size-vs-time charts of profiling records, rendered as standalone SVG.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod chart;
pub mod scale;

pub use self::chart::{ChartError, ChartRenderer};
pub use self::scale::LinearScale;
