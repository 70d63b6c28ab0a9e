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

//! Line composition and colored emission.

use anyhow::{Context, Result};

use crate::caller::CallerInfo;
use crate::output::Output;
use crate::style::{self, Style};

/// `"<namespace> <caller><body>"` without the trailing newline. The caller part carries its own
/// line break.
pub fn compose_line(namespace: &str, caller: Option<&CallerInfo>, body: &str) -> String {
    match caller {
        Some(caller) => format!("{} {}{}", namespace, caller, body),
        None => format!("{} {}", namespace, body),
    }
}

/// Style the composed line and write it, newline included, in one `write_line` call.
pub fn emit(
    namespace: &str,
    caller: Option<&CallerInfo>,
    body: &str,
    styles: &[Style],
    colorize: bool,
    sink: &dyn Output,
) -> Result<()> {
    let line = compose_line(namespace, caller, body);
    let mut out = if colorize && !styles.is_empty() {
        style::paint(&line, styles).to_string()
    } else {
        line
    };
    out.push('\n');
    sink.write_line(out.as_bytes())
        .with_context(|| format!("writing debug line for namespace {}", namespace))
}
