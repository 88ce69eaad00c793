//! Shared sinks for integration tests

#![allow(dead_code)]

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// In-memory sink that can be inspected after the logger took ownership
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    /// Every line parsed as JSON; panics on a torn or malformed line
    pub fn records(&self) -> Vec<serde_json::Value> {
        self.contents()
            .lines()
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("bad line {:?}: {}", l, e))
            })
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Accepts one byte per call and yields in between, so any write that is not
/// serialized by the logger would interleave with other threads
#[derive(Clone, Default)]
pub struct TrickleWriter(SharedBuffer);

impl TrickleWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &SharedBuffer {
        &self.0
    }
}

impl Write for TrickleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match buf.first() {
            Some(byte) => {
                self.0 .0.lock().push(*byte);
                std::thread::yield_now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
