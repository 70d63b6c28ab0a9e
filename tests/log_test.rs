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

//! The crate reports dropped lines through the `log` facade instead of failing the caller.

use flexi_logger::{FileSpec, Logger, WriteMode};
use nsdebug::{Arg, Config, DebugFn, Output};
use std::io;

struct ClosedPipe;

impl Output for ClosedPipe {
    fn write_line(&self, _line: &[u8]) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }
}

#[test]
fn test_write_failure_is_logged() {
    let dir = tempfile::tempdir().unwrap();
    let handle = Logger::try_with_str("debug")
        .unwrap()
        .log_to_file(
            FileSpec::default()
                .directory(dir.path())
                .basename("nsdebug")
                .suppress_timestamp(),
        )
        .write_mode(WriteMode::Direct)
        .start()
        .unwrap();

    let dbg = DebugFn::with_control(Config::new("IO").output(ClosedPipe), Some("IO"));
    dbg.call(&[Arg::from("lost")]);
    dbg.call(&[Arg::from(f64::NAN)]);
    handle.flush();

    let mut logged = String::new();
    for entry in std::fs::read_dir(dir.path()).unwrap() {
        logged.push_str(&std::fs::read_to_string(entry.unwrap().path()).unwrap());
    }
    assert!(logged.contains("dropping debug line"), "{logged}");
    assert!(logged.contains("pipe closed"), "{logged}");
    assert!(logged.contains("structured rendering failed"), "{logged}");
}
