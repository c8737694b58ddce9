//! Global statistics about a render: how many rays were traced and where the time went.
//!
//! Counters are registered lazily the first time they are hit and are compiled out
//! without the `counter` feature.

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
};

pub enum Counter {
    Count(CounterU64),
    Time(CounterTime),
}

impl Counter {
    pub fn format(&self) -> String {
        match self {
            Counter::Count(a) => a.value().to_string(),
            Counter::Time(a) => super::timer::format_elapsed(a.value()),
        }
    }
}

#[derive(Default)]
pub struct CounterU64 {
    atomic: AtomicU64,
}

impl CounterU64 {
    pub const fn new() -> Self {
        Self {
            atomic: AtomicU64::new(0),
        }
    }
    pub fn inc(&self) {
        self.atomic.fetch_add(1, Ordering::Relaxed);
    }
    pub fn value(&self) -> u64 {
        self.atomic.load(Ordering::Acquire)
    }
}

#[derive(Default)]
pub struct CounterTime {
    // Note: can only store up to 564 years
    nanos: AtomicU64,
}

impl CounterTime {
    pub const fn new() -> Self {
        Self {
            nanos: AtomicU64::new(0),
        }
    }
    pub fn add(&self, dur: std::time::Duration) {
        self.nanos.fetch_add(dur.as_nanos() as u64, Ordering::Relaxed);
    }
    pub fn value(&self) -> std::time::Duration {
        std::time::Duration::from_nanos(self.nanos.load(Ordering::Acquire))
    }
}

lazy_static::lazy_static! {
    pub static ref __COUNTERS: Mutex<BTreeMap<&'static str, Arc<Counter>>> = Mutex::new(BTreeMap::new());
}

pub fn insert_counter(descr: &'static str, counter: Counter) -> Arc<Counter> {
    let mut counters = __COUNTERS.lock().unwrap();
    counters.entry(descr).or_insert_with(|| Arc::new(counter)).clone()
}

/// Formatted value of every counter hit so far, sorted by name
pub fn snapshot() -> Vec<(&'static str, String)> {
    let counters = __COUNTERS.lock().unwrap();
    counters
        .iter()
        .map(|(name, counter)| (*name, counter.format()))
        .collect()
}

pub fn report_counters() {
    for (counter_name, value) in snapshot() {
        log::log!(target: "counter_report", log::Level::Info, "{counter_name}: {value}");
    }
}

#[macro_export]
macro_rules! counter {
    ($descr:literal) => {
        if cfg!(feature = "counter") {
            use $crate::utils::counter::{insert_counter, lazy_static, Counter, CounterU64};
            lazy_static::lazy_static! {
                static ref COUNTER_REF: std::sync::Arc<Counter> = {
                    insert_counter($descr, Counter::Count(CounterU64::new()))
                };
            }

            if let Counter::Count(c) = &**COUNTER_REF {
                c.inc();
            } else {
                panic!("counter {} was registered as a timer", $descr)
            };
        };
    };
}

pub use counter;
// Reexport for ease of use
pub use lazy_static;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_registers_and_counts() {
        for _ in 0..3 {
            counter!("test: counted three times");
        }
        let value = snapshot()
            .into_iter()
            .find(|(name, _)| *name == "test: counted three times")
            .map(|(_, value)| value);
        if cfg!(feature = "counter") {
            assert_eq!(value.as_deref(), Some("3"));
        } else {
            assert_eq!(value, None);
        }
    }

    #[test]
    fn time_counter_accumulates() {
        let timer = CounterTime::new();
        timer.add(std::time::Duration::from_millis(2));
        timer.add(std::time::Duration::from_millis(3));
        assert_eq!(timer.value(), std::time::Duration::from_millis(5));
    }
}
