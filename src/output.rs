// Copyright (c) 2026 MCU-Debug Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::File;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Destination for emitted debug lines.
///
/// Each call receives one complete line and must write it with a single write so that lines from
/// concurrent callers interleave only at line boundaries.
pub trait Output: Send + Sync {
    fn write_line(&self, line: &[u8]) -> io::Result<()>;
}

// Stderr and stdout: the handle lock is held for the whole line, then flushed
impl Output for io::Stderr {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut w = self.lock();
        w.write_all(line)?;
        w.flush()
    }
}

impl Output for io::Stdout {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut w = self.lock();
        w.write_all(line)?;
        w.flush()
    }
}

impl Output for File {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut w: &File = self;
        w.write_all(line)
    }
}

impl<W: Write + Send> Output for Mutex<W> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        // A poisoned writer is still usable for appending bytes.
        let mut w = self.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        w.write_all(line)?;
        w.flush()
    }
}

impl<O: Output + ?Sized> Output for Arc<O> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }
}

impl<O: Output + ?Sized> Output for Box<O> {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// In-memory sink. Clones share the same buffer, so one clone can be handed to a debug function
/// and another kept to read what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Vec<u8> {
        self.buf
            .lock()
            .map(|b| b.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.contents().is_empty()
    }
}

impl Output for MemoryOutput {
    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        self.buf.write_line(line)
    }
}

/// The default sink.
pub fn stderr() -> Arc<dyn Output> {
    Arc::new(io::stderr())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Seek};
    use std::thread;

    #[test]
    fn memory_output_is_shared_between_clones() {
        let out = MemoryOutput::new();
        let writer = out.clone();
        writer.write_line(b"one\n").unwrap();
        writer.write_line(b"two\n").unwrap();
        assert_eq!(out.contents_string(), "one\ntwo\n");
    }

    #[test]
    fn concurrent_lines_stay_whole() {
        let out = MemoryOutput::new();
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let out = out.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        let line = format!("thread-{t} line-{i} {}\n", "x".repeat(64));
                        out.write_line(line.as_bytes()).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        let text = out.contents_string();
        assert_eq!(text.lines().count(), 8 * 50);
        for line in text.lines() {
            assert!(line.starts_with("thread-"));
            assert!(line.ends_with(&"x".repeat(64)));
        }
    }

    #[test]
    fn file_output_appends_lines() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_line(b"hello\n").unwrap();
        file.write_line(b"world\n").unwrap();
        file.rewind().unwrap();
        let mut s = String::new();
        file.read_to_string(&mut s).unwrap();
        assert_eq!(s, "hello\nworld\n");
    }
}
