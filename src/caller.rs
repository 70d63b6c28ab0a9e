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

//! Call-site location for debug lines.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// Where a debug call was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerInfo {
    pub file: &'static str,
    pub function: Option<Cow<'static, str>>,
    pub line: u32,
}

impl CallerInfo {
    pub fn new(file: &'static str, function: Option<&'static str>, line: u32) -> Self {
        Self {
            file,
            function: function.map(Cow::Borrowed),
            line,
        }
    }

    /// File and line from `location`, function name looked up from the stack when debug info
    /// is available.
    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            function: function_at(location.file(), location.line()).map(Cow::Owned),
            line: location.line(),
        }
    }
}

/// Rendered as `file#function:line` followed by a line break, or `file:line` when the function is
/// unknown, so the body of the debug line starts on the next line.
impl fmt::Display for CallerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.function {
            Some(function) => writeln!(f, "{}#{}:{}", self.file, function, self.line),
            None => writeln!(f, "{}:{}", self.file, self.line),
        }
    }
}

/// Location of the code that called into the `#[track_caller]` chain ending here.
///
/// File and line always resolve. The function name needs debug info in the binary; without it
/// `function` is `None` and the annotation degrades to `file:line`.
#[track_caller]
pub fn resolve() -> Option<CallerInfo> {
    let location = Location::caller();
    if location.file().is_empty() {
        return None;
    }
    Some(CallerInfo::from_location(location))
}

/// Name of the function whose frame is currently executing `file:line`.
fn function_at(file: &str, line: u32) -> Option<String> {
    let mut found: Option<String> = None;
    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if found.is_some() || symbol.lineno() != Some(line) {
                return;
            }
            let same_file = symbol
                .filename()
                .is_some_and(|path| path.ends_with(Path::new(file)));
            if same_file {
                found = symbol.name().map(|name| format!("{:#}", name));
            }
        });
        found.is_none()
    });
    found.map(|name| clean_symbol(&name).to_string())
}

/// Strip the legacy hash suffix and closure segments from a demangled path.
fn clean_symbol(name: &str) -> &str {
    let mut name = match name.rsplit_once("::h") {
        Some((path, hash)) if hash.len() == 16 && hash.chars().all(|c| c.is_ascii_hexdigit()) => {
            path
        }
        _ => name,
    };
    loop {
        let trimmed = name
            .trim_end_matches("::{{closure}}")
            .trim_end_matches("::{closure#0}");
        if trimmed == name {
            return name;
        }
        name = trimmed;
    }
}

/// Path of the enclosing function, e.g. `my_crate::worker::run`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        name.trim_end_matches("::{{closure}}")
    }};
}

/// [`CallerInfo`] for the place the macro is expanded.
#[macro_export]
macro_rules! caller {
    () => {
        $crate::caller::CallerInfo::new(
            ::std::file!(),
            ::std::option::Option::Some($crate::function_name!()),
            ::std::line!(),
        )
    };
}
