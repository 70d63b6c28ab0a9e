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

//! Debug function instances.
//!
//! A [`DebugFn`] is built once from a [`Config`] and invoked as often as needed. The `DEBUG`
//! environment variable is read when the instance is created and the verdict is cached; later
//! changes to the variable are only seen after an explicit [`DebugFn::refresh`].

use std::sync::atomic::{AtomicBool, Ordering};

use crate::caller::{self, CallerInfo};
use crate::config::Config;
use crate::emit::emit;
use crate::format::format_values;
use crate::namespace::ControlSpec;
use crate::value::Arg;

pub struct DebugFn {
    config: Config,
    active: AtomicBool,
}

impl DebugFn {
    /// Build a debug function, taking the activation verdict from the current `DEBUG` value.
    pub fn new(config: Config) -> Self {
        Self::from_spec(config, &ControlSpec::from_env())
    }

    /// Build a debug function against an explicit control string instead of the environment.
    pub fn with_control(config: Config, control: Option<&str>) -> Self {
        Self::from_spec(config, &ControlSpec::from_control(control))
    }

    fn from_spec(config: Config, spec: &ControlSpec) -> Self {
        let config = config.resolved();
        let active = spec.is_active(&config.namespace);
        Self {
            config,
            active: AtomicBool::new(active),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Cached activation verdict.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    /// Re-read `DEBUG` and update the verdict. Returns the new verdict.
    pub fn refresh(&self) -> bool {
        self.store(&ControlSpec::from_env())
    }

    /// Update the verdict from an explicit control string. Returns the new verdict.
    pub fn refresh_with(&self, control: Option<&str>) -> bool {
        self.store(&ControlSpec::from_control(control))
    }

    fn store(&self, spec: &ControlSpec) -> bool {
        let active = spec.is_active(&self.config.namespace);
        self.active.store(active, Ordering::Relaxed);
        active
    }

    /// Print `args` if the namespace is active. The caller location, when enabled, is the code
    /// that invoked this method.
    #[track_caller]
    pub fn call(&self, args: &[Arg<'_>]) {
        if !self.is_active() {
            return;
        }
        let caller = if self.config.show_caller_info {
            caller::resolve()
        } else {
            None
        };
        self.write(caller.as_ref(), args);
    }

    /// Like [`DebugFn::call`] with a location captured elsewhere, usually by [`debug_println!`].
    ///
    /// [`debug_println!`]: crate::debug_println
    pub fn emit_at(&self, caller: CallerInfo, args: &[Arg<'_>]) {
        if !self.is_active() {
            return;
        }
        let caller = self.config.show_caller_info.then_some(caller);
        self.write(caller.as_ref(), args);
    }

    fn write(&self, caller: Option<&CallerInfo>, args: &[Arg<'_>]) {
        let body = format_values(args, self.config.pretty);
        if let Err(e) = emit(
            &self.config.namespace,
            caller,
            &body,
            &self.config.style,
            self.config.colorize,
            self.config.output.as_ref(),
        ) {
            log::warn!("dropping debug line: {:#}", e);
        }
    }
}

impl std::fmt::Debug for DebugFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebugFn")
            .field("namespace", &self.config.namespace)
            .field("active", &self.is_active())
            .finish()
    }
}

/// Create a debug function from `config`.
pub fn new(config: Config) -> DebugFn {
    DebugFn::new(config)
}

/// Create a debug function for the `DEBUG` namespace with default settings.
pub fn new_default() -> DebugFn {
    DebugFn::new(Config::default())
}

/// Print debug values through a [`DebugFn`] if its namespace is active.
///
/// Arguments are only evaluated when the namespace is active. Each argument is converted with
/// `Arg::from`, so pass primitives and strings directly and wrap structs with `Arg::record` and
/// errors with `Arg::error`.
#[macro_export]
macro_rules! debug_println {
    ($dbg:expr $(, $arg:expr)* $(,)?) => {{
        let dbg: &$crate::DebugFn = &$dbg;
        if dbg.is_active() {
            dbg.emit_at($crate::caller!(), &[$($crate::Arg::from($arg)),*]);
        }
    }};
}
