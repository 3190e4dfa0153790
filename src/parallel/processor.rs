/// Thread settings for the bounded worker pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Maximum number of worker threads (0 = auto-detect)
    pub max_threads: usize,
    /// Percentage of CPU cores to use (1-100)
    pub thread_percentage: u8,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            max_threads: 0,
            thread_percentage: 75,
        }
    }
}

impl ParallelConfig {
    /// Calculate the number of worker threads for a walk
    pub fn calculate_optimal_workers(&self) -> usize {
        Self::workers_for_cores(num_cpus::get(), self.max_threads, self.thread_percentage)
    }

    fn workers_for_cores(cpu_cores: usize, max_threads: usize, thread_percentage: u8) -> usize {
        let by_percentage = std::cmp::max(1, (cpu_cores * thread_percentage as usize) / 100);

        // An explicit thread count is a hard limit, not a suggestion
        if max_threads > 0 {
            max_threads
        } else {
            by_percentage
        }
    }
}
