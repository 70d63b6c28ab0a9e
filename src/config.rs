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

use std::fmt;
use std::sync::Arc;

use crate::output::{self, Output};
use crate::style::{Style, DEFAULT_STYLE};

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "DEBUG";

/// Options for one debug function. Start from [`Config::default`] (or [`Config::new`]) and override
/// only what differs; the value is frozen once handed to a debug function.
#[derive(Clone)]
pub struct Config {
    /// Identifies the debug statements for activation. Default: `DEBUG`
    pub namespace: String,
    /// Applied in order to the whole line. Default: `[Green]`
    pub style: Vec<Style>,
    /// Prefix the body with `file#function:line` on its own line. Default: false
    pub show_caller_info: bool,
    /// Indented structured rendering. Default: false
    pub pretty: bool,
    /// Where lines are written. Default: stderr
    pub output: Arc<dyn Output>,
    /// Emit style escape codes at all. Default: true (subject to `NO_COLOR` and friends)
    ///
    /// When true, `colored` still decides per process whether codes are written, and it looks at
    /// whether *stdout* is a terminal, not at the configured output. With the default stderr sink,
    /// `prog | less` drops colour on a terminal stderr and `prog 2>file` writes escape codes into
    /// the file. Set this to false for file or pipe sinks.
    pub colorize: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            style: DEFAULT_STYLE.to_vec(),
            show_caller_info: false,
            pretty: false,
            output: output::stderr(),
            colorize: true,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("namespace", &self.namespace)
            .field("style", &self.style)
            .field("show_caller_info", &self.show_caller_info)
            .field("pretty", &self.pretty)
            .field("colorize", &self.colorize)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Defaults with the given namespace.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self::default().namespace(namespace)
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn style(mut self, style: impl IntoIterator<Item = Style>) -> Self {
        self.style = style.into_iter().collect();
        self
    }

    pub fn show_caller_info(mut self, show: bool) -> Self {
        self.show_caller_info = show;
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn output<O: Output + 'static>(mut self, output: O) -> Self {
        self.output = Arc::new(output);
        self
    }

    pub fn shared_output(mut self, output: Arc<dyn Output>) -> Self {
        self.output = output;
        self
    }

    pub fn colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Fill the fields a caller left blank. The namespace is trimmed, like the entries of
    /// `DEBUG`, and a blank one becomes `DEBUG`; an empty style list stays empty and means unstyled.
    pub(crate) fn resolved(mut self) -> Self {
        let trimmed = self.namespace.trim();
        self.namespace = if trimmed.is_empty() {
            DEFAULT_NAMESPACE.to_string()
        } else {
            trimmed.to_string()
        };
        self
    }
}
