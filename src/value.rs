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

//! Values accepted by a debug function.
//!
//! Call sites hand over an ordered list of [`Arg`]s. Primitives convert with `From`, structured
//! values go through [`Arg::record`] and errors through [`Arg::error`], so the formatter never has
//! to inspect types at runtime.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// A structured value that can be rendered as JSON, with a `Debug` rendering as fallback.
pub trait Record {
    fn to_json(&self) -> serde_json::Result<serde_json::Value>;
    fn describe(&self) -> String;
}

impl<T: Serialize + fmt::Debug + ?Sized> Record for T {
    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    fn describe(&self) -> String {
        format!("{:?}", self)
    }
}

/// Anything that carries an error message. Every `std::error::Error` qualifies; other types may
/// implement it directly.
pub trait HasMessage {
    fn message(&self) -> String;
}

impl<E: std::error::Error + ?Sized> HasMessage for E {
    fn message(&self) -> String {
        self.to_string()
    }
}

/// One value of a debug call.
#[derive(Clone)]
pub enum Arg<'a> {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(&'a str),
    Record(&'a dyn Record),
    /// Message text taken from a [`HasMessage`] value.
    Error(Cow<'a, str>),
}

impl<'a> Arg<'a> {
    pub fn record<T: Record>(value: &'a T) -> Self {
        Arg::Record(value)
    }

    pub fn error<E: HasMessage + ?Sized>(err: &E) -> Self {
        Arg::Error(Cow::Owned(err.message()))
    }

    /// Human-readable form used when structured rendering fails.
    pub fn plain(&self) -> Cow<'_, str> {
        match self {
            Arg::Null => Cow::Borrowed("null"),
            Arg::Bool(b) => Cow::Owned(b.to_string()),
            Arg::Int(n) => Cow::Owned(n.to_string()),
            Arg::UInt(n) => Cow::Owned(n.to_string()),
            Arg::Float(f) => Cow::Owned(f.to_string()),
            Arg::Text(s) => Cow::Borrowed(s),
            Arg::Record(r) => Cow::Owned(r.describe()),
            Arg::Error(msg) => Cow::Borrowed(msg.as_ref()),
        }
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Null => f.write_str("Null"),
            Arg::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Arg::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Arg::UInt(n) => f.debug_tuple("UInt").field(n).finish(),
            Arg::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Arg::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Arg::Record(r) => f.debug_tuple("Record").field(&r.describe()).finish(),
            Arg::Error(msg) => f.debug_tuple("Error").field(msg).finish(),
        }
    }
}

macro_rules! arg_from_int {
    ($variant:ident, $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Arg<'_> {
                fn from(n: $t) -> Self {
                    Arg::$variant(n as $wide)
                }
            }
        )*
    };
}

arg_from_int!(Int, i64: i8, i16, i32, i64, isize);
arg_from_int!(UInt, u64: u8, u16, u32, u64, usize);

impl From<f32> for Arg<'_> {
    fn from(f: f32) -> Self {
        Arg::Float(f as f64)
    }
}

impl From<f64> for Arg<'_> {
    fn from(f: f64) -> Self {
        Arg::Float(f)
    }
}

impl From<bool> for Arg<'_> {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl From<()> for Arg<'_> {
    fn from(_: ()) -> Self {
        Arg::Null
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Text(s)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(s: &'a String) -> Self {
        Arg::Text(s.as_str())
    }
}

impl From<&anyhow::Error> for Arg<'_> {
    fn from(err: &anyhow::Error) -> Self {
        Arg::Error(Cow::Owned(err.to_string()))
    }
}

impl From<&(dyn std::error::Error + 'static)> for Arg<'_> {
    fn from(err: &(dyn std::error::Error + 'static)) -> Self {
        Arg::error(err)
    }
}

impl<'a, T: Into<Arg<'a>> + Copy> From<&'a Option<T>> for Arg<'a> {
    fn from(opt: &'a Option<T>) -> Self {
        match opt {
            Some(v) => (*v).into(),
            None => Arg::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::io;

    #[derive(Serialize, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn primitives_convert_to_matching_variants() {
        assert!(matches!(Arg::from(-3i32), Arg::Int(-3)));
        assert!(matches!(Arg::from(7usize), Arg::UInt(7)));
        assert!(matches!(Arg::from(true), Arg::Bool(true)));
        assert!(matches!(Arg::from("hi"), Arg::Text("hi")));
        assert!(matches!(Arg::from(&String::from("s")), Arg::Text("s")));
        assert!(matches!(Arg::from(()), Arg::Null));
        let none: Option<i32> = None;
        assert!(matches!(Arg::from(&none), Arg::Null));
    }

    #[test]
    fn error_arg_exposes_message() {
        let err = io::Error::new(io::ErrorKind::Other, "disk on fire");
        let arg = Arg::error(&err);
        assert_eq!(arg.plain(), "disk on fire");

        let any = anyhow::anyhow!("bad thing");
        assert_eq!(Arg::from(&any).plain(), "bad thing");
    }

    #[test]
    fn record_plain_uses_debug() {
        let p = Point { x: 1, y: 2 };
        assert_eq!(Arg::record(&p).plain(), "Point { x: 1, y: 2 }");
    }

    #[test]
    fn custom_message_type() {
        struct Oops;
        impl HasMessage for Oops {
            fn message(&self) -> String {
                "oops".to_string()
            }
        }
        let o = Oops;
        assert_eq!(Arg::error(&o).plain(), "oops");
    }
}
