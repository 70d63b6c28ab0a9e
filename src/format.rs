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

//! Value formatting: turn the arguments of one debug call into the body of one line.

use crate::value::Arg;
use anyhow::{anyhow, Context, Result};
use serde_json::Value;

/// Render `args` as JSON (indented when `pretty`), falling back to plain text joined by spaces
/// when any value cannot be serialized. Never fails.
///
/// No arguments render as `[]`, a single argument is rendered on its own and several arguments
/// render as an array. A single record that is itself a sequence is therefore indistinguishable
/// from several scalar arguments: `[Arg::record(&vec![1, 2])]` and `[Arg::from(1), Arg::from(2)]`
/// both render `[1,2]`.
pub fn format_values(args: &[Arg<'_>], pretty: bool) -> String {
    match serialize_values(args, pretty) {
        Ok(body) => body,
        Err(e) => {
            log::debug!("structured rendering failed, using plain text: {:#}", e);
            format_plain(args)
        }
    }
}

/// Structured rendering only.
pub fn serialize_values(args: &[Arg<'_>], pretty: bool) -> Result<String> {
    let value = match args {
        [single] => to_json(single)?,
        _ => Value::Array(
            args.iter()
                .enumerate()
                .map(|(i, arg)| to_json(arg).with_context(|| format!("argument {}", i)))
                .collect::<Result<Vec<_>>>()?,
        ),
    };

    let bytes = if pretty {
        serde_json::to_vec_pretty(&value)?
    } else {
        serde_json::to_vec(&value)?
    };
    String::from_utf8(bytes).context("serialized output is not valid UTF-8")
}

/// Plain rendering of every argument, joined by a single space.
pub fn format_plain(args: &[Arg<'_>]) -> String {
    args.iter()
        .map(|arg| arg.plain())
        .collect::<Vec<_>>()
        .join(" ")
}

fn to_json(arg: &Arg<'_>) -> Result<Value> {
    Ok(match arg {
        Arg::Null => Value::Null,
        Arg::Bool(b) => Value::Bool(*b),
        Arg::Int(n) => Value::from(*n),
        Arg::UInt(n) => Value::from(*n),
        Arg::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .ok_or_else(|| anyhow!("{} has no JSON representation", f))?,
        Arg::Text(s) => Value::String(s.to_string()),
        Arg::Record(r) => r.to_json().context("record is not serializable")?,
        Arg::Error(msg) => Value::String(msg.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::collections::HashMap;
    use std::io;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct SomeStruct {
        a: String,
        b: i32,
        c: bool,
        d: HashMap<String, serde_json::Value>,
    }

    fn some_struct() -> SomeStruct {
        SomeStruct {
            a: "a".to_string(),
            b: 1,
            c: true,
            d: HashMap::from([
                ("some".to_string(), serde_json::json!("data")),
                ("another".to_string(), serde_json::json!(1)),
            ]),
        }
    }

    #[test]
    fn empty_list_is_an_empty_array() {
        assert_eq!(format_values(&[], false), "[]");
        assert_eq!(format_values(&[], true), "[]");
    }

    #[test]
    fn single_text_is_quoted() {
        assert_eq!(format_values(&[Arg::from("hello")], false), "\"hello\"");
    }

    #[test]
    fn several_values_form_an_array() {
        let args = [Arg::from("n"), Arg::from(3u8), Arg::from(false), Arg::Null];
        assert_eq!(format_values(&args, false), r#"["n",3,false,null]"#);
    }

    #[test]
    fn single_sequence_record_matches_multiple_args() {
        let v = vec![1, 2];
        let one = format_values(&[Arg::record(&v)], false);
        let two = format_values(&[Arg::from(1), Arg::from(2)], false);
        assert_eq!(one, "[1,2]");
        assert_eq!(one, two);
    }

    #[test]
    fn record_round_trips() {
        let s = some_struct();
        let out = format_values(&[Arg::record(&s)], false);
        let back: SomeStruct = serde_json::from_str(&out).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn pretty_is_multiline() {
        let s = some_struct();
        let compact = format_values(&[Arg::record(&s)], false);
        let pretty = format_values(&[Arg::record(&s)], true);
        assert!(!compact.contains('\n'));
        assert!(pretty.lines().count() > 1);
        assert!(pretty.contains("\n  \"a\": \"a\""));
        let a: serde_json::Value = serde_json::from_str(&compact).unwrap();
        let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn error_renders_as_its_message() {
        let err = io::Error::new(io::ErrorKind::NotFound, "no such widget");
        assert_eq!(format_values(&[Arg::error(&err)], false), "\"no such widget\"");
        let out = format_values(&[Arg::from("lookup"), Arg::error(&err)], false);
        assert_eq!(out, r#"["lookup","no such widget"]"#);
        assert!(!out.contains("NotFound"));
    }

    #[test]
    fn unserializable_record_falls_back_to_plain() {
        let keyed: HashMap<(i32, i32), i32> = HashMap::from([((1, 2), 3)]);
        let out = format_values(&[Arg::from("grid"), Arg::record(&keyed)], false);
        assert_eq!(out, "grid {(1, 2): 3}");
    }

    #[test]
    fn non_finite_float_falls_back_to_plain() {
        let err = io::Error::new(io::ErrorKind::Other, "overflow");
        let out = format_values(&[Arg::from(f64::NAN), Arg::error(&err)], true);
        assert_eq!(out, "NaN overflow");
    }

    #[test]
    fn serialize_reports_failure() {
        assert!(serialize_values(&[Arg::from(f64::INFINITY)], false).is_err());
        assert!(serialize_values(&[Arg::from(1.5f64)], false).is_ok());
    }
}
