//! # mentor-rolling
//!
//! Rolling statistics (mean, standard deviation, momentum, z-score) over a
//! score series, with partial windows at the leading edge.
//!
//! The leading edge uses whatever history is available: position `i` with
//! fewer than `window` prior values averages over `i + 1` values instead.
//! A single-sample window has standard deviation 0.0, and a z-score is 0.0
//! wherever the window standard deviation is 0 (constant window). This
//! "insufficient history means zero dispersion" policy is deliberate.
//!
//! ```
//! use mentor_rolling::RollingStats;
//!
//! let scores = [0.9, 0.88, 0.75, 0.78];
//! let stats = RollingStats::compute(&scores, 3)?;
//! assert_eq!(stats.mean().len(), 4);
//! assert_eq!(stats.momentum()[0], 0.0);
//! # Ok::<(), mentor_rolling::RollingError>(())
//! ```

mod error;
mod window;

pub mod stats;

pub use error::RollingError;
pub use window::RollingStats;
