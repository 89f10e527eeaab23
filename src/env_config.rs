//! Shared environment configuration for the fairdice binaries.

/// Read `RAYON_NUM_THREADS` (fallback `OMP_NUM_THREADS`, default: rayon's
/// choice). Builds the global rayon thread pool, tolerating an
/// already-initialized pool. Returns the configured count if any.
pub fn init_rayon_threads(override_threads: Option<usize>) -> Option<usize> {
    let num_threads = override_threads.or_else(|| {
        std::env::var("RAYON_NUM_THREADS")
            .or_else(|_| std::env::var("OMP_NUM_THREADS"))
            .ok()
            .and_then(|s| s.parse().ok())
    });
    if let Some(n) = num_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .ok(); // May fail if already initialized
        println!("Rayon threads: {}", n);
    }
    num_threads
}
