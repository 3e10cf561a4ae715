//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::cell::Cell;
use std::io;
use std::sync::{Arc, Mutex};

use fluent_optional::Optional;

/// Counts how many times a collaborator closure was invoked.
#[derive(Debug, Default)]
pub struct CallCounter(Cell<usize>);

impl CallCounter {
    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }
}

/// The even-only mapper used by the `flat_map` scenarios.
pub fn keep_even(n: i32) -> Optional<i32> {
    if n % 2 == 0 {
        Optional::of(n)
    } else {
        Optional::empty()
    }
}

/// Tracing writer that appends formatted events to a shared buffer.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
