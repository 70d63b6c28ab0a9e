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

//! Namespace activation from the `DEBUG` control variable.
//!
//! Grammar: empty or absent disables everything, `*` enables everything, otherwise a comma
//! separated list of namespaces. An entry prefixed with `!` excludes that namespace and wins over
//! any wildcard or positive entry, wherever it appears in the list. A `*` entry inside a list
//! enables every namespace that is not excluded. Matching is exact and case-sensitive.

use std::env;

/// Name of the process environment variable consulted for activation.
pub const CONTROL_VAR: &str = "DEBUG";

const WILDCARD: &str = "*";
const EXCLUDE_PREFIX: char = '!';

/// Parsed form of a control string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ControlSpec {
    /// Nothing is active.
    #[default]
    Disabled,
    /// Namespaces named (or matched by a wildcard) and not excluded are active.
    List {
        include: Vec<String>,
        exclude: Vec<String>,
        wildcard: bool,
        exclude_all: bool,
    },
}

impl ControlSpec {
    pub fn parse(control: &str) -> Self {
        let control = control.trim();
        if control.is_empty() {
            return ControlSpec::Disabled;
        }

        let mut include = Vec::new();
        let mut exclude = Vec::new();
        let mut wildcard = false;
        let mut exclude_all = false;

        for entry in control.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            match entry.strip_prefix(EXCLUDE_PREFIX) {
                Some(excluded) => {
                    let excluded = excluded.trim();
                    if excluded == WILDCARD {
                        exclude_all = true;
                    } else if !excluded.is_empty() {
                        exclude.push(excluded.to_string());
                    }
                }
                None if entry == WILDCARD => wildcard = true,
                None => include.push(entry.to_string()),
            }
        }

        if include.is_empty() && !wildcard {
            // Only exclusions (or nothing usable): no namespace can become active.
            return ControlSpec::Disabled;
        }

        ControlSpec::List {
            include,
            exclude,
            wildcard,
            exclude_all,
        }
    }

    /// Snapshot of the `DEBUG` environment variable. Unset or unreadable means disabled.
    pub fn from_env() -> Self {
        match env::var(CONTROL_VAR) {
            Ok(value) => Self::parse(&value),
            Err(env::VarError::NotPresent) => ControlSpec::Disabled,
            Err(env::VarError::NotUnicode(raw)) => {
                log::debug!(
                    "{} is not valid UTF-8 ({:?}), treating as unset",
                    CONTROL_VAR,
                    raw
                );
                ControlSpec::Disabled
            }
        }
    }

    pub fn from_control(control: Option<&str>) -> Self {
        control.map(Self::parse).unwrap_or_default()
    }

    pub fn is_active(&self, namespace: &str) -> bool {
        match self {
            ControlSpec::Disabled => false,
            ControlSpec::List {
                include,
                exclude,
                wildcard,
                exclude_all,
            } => {
                if *exclude_all || exclude.iter().any(|n| n == namespace) {
                    return false;
                }
                *wildcard || include.iter().any(|n| n == namespace)
            }
        }
    }
}

/// Decide whether `namespace` is active under `control`.
pub fn is_active(control: Option<&str>, namespace: &str) -> bool {
    ControlSpec::from_control(control).is_active(namespace)
}
