//! Worker sizing for the parallel tree walk
//!
//! This module only deals with **system resources**: it turns the user's
//! thread settings and the number of available CPU cores into a fixed worker
//! count. It knows nothing about files, keys or caps.
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │   TreeWalker    │    │   Parallel       │    │   System        │
//! │                 │───▶│   Module         │───▶│   Resources     │
//! │ • thread limit  │    │ • CPU cores      │    │ • num_cpus      │
//! │ • percentage    │    │ • clamping       │    │                 │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use dupe_check::parallel::ParallelConfig;
//!
//! let config = ParallelConfig { max_threads: 4, thread_percentage: 75 };
//! let workers = config.calculate_optimal_workers();
//! assert!((1..=4).contains(&workers));
//! ```

pub mod processor;

pub use processor::ParallelConfig;
