/// Controls when elimination and normalization fan out over rayon.
///
/// An elimination step touching fewer columns than `parallel_threshold`,
/// or a normalization sweep over fewer rows, runs on the calling thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelConfig {
    pub parallel_threshold: usize,
    /// Size of the global rayon pool, see [`ParallelConfig::init_thread_pool`].
    pub num_threads: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
            num_threads: None,
        }
    }
}

impl ParallelConfig {
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    pub fn always() -> Self {
        Self {
            parallel_threshold: 0,
            ..Self::default()
        }
    }

    #[inline(always)]
    pub fn is_parallel(&self, len: usize) -> bool {
        len >= self.parallel_threshold
    }

    // The global pool can only be built once per process, later calls keep
    // the existing pool.
    pub fn init_thread_pool(&self) {
        if let Some(num_threads) = self.num_threads {
            if rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build_global()
                .is_err()
            {
                log::debug!("rayon global pool already initialized, keeping it");
            }
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
