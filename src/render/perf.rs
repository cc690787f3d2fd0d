#[cfg(feature = "profiling")]
use std::time::Instant;

#[cfg(feature = "profiling")]
pub struct ProfileGuard {
    name: &'static str,
    start: Instant,
}

#[cfg(feature = "profiling")]
impl ProfileGuard {
    pub fn new(name: &'static str) -> Self {
        log::trace!("begin:{name}");
        Self {
            name,
            start: Instant::now(),
        }
    }
}

#[cfg(feature = "profiling")]
impl Drop for ProfileGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        log::debug!("[profiling] {} took {:.3} ms", self.name, elapsed_ms);
    }
}

#[cfg(not(feature = "profiling"))]
pub struct ProfileGuard;

#[cfg(not(feature = "profiling"))]
impl ProfileGuard {
    pub fn new(_name: &'static str) -> Self {
        Self
    }
}

#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        let _profile_guard = $crate::render::perf::ProfileGuard::new($name);
    };
}
