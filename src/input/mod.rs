//! Loading series from files or stdin.
//!
//! JSON accepts three shapes:
//! - an array: `[1999, 2001, 2001]`
//! - an object mapping labels to values: `{"Alien": 1979, "Heat": 1995}`
//! - an object with explicit series: `{"x": [...], "color_by": [...]}`
//!
//! Plain text holds one value per non-blank line.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value as JsonValue};

use crate::error::{DotplotError, Result};
use crate::series::{LabeledSeries, Value};

/// Path that selects stdin.
pub const STDIN_SOURCE: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// JSON for `.json` files, text otherwise.
    #[default]
    Auto,
    Json,
    Text,
}

impl std::str::FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "json" => Ok(Self::Json),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(format!("Unknown input format: {s}")),
        }
    }
}

impl InputFormat {
    /// Concrete format for `source`. Stdin in `Auto` mode is sniffed from content.
    fn resolve(self, source: &Path, content: &str) -> Self {
        match self {
            Self::Auto => {
                let is_json = if source == Path::new(STDIN_SOURCE) {
                    content.trim_start().starts_with(['[', '{'])
                } else {
                    source
                        .extension()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
                };
                if is_json { Self::Json } else { Self::Text }
            }
            other => other,
        }
    }
}

/// Series read from one source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeriesInput {
    pub x: Vec<Value>,
    pub color_by: Option<Vec<Value>>,
    /// Index labels when the source was a labeled series.
    pub labels: Option<Vec<String>>,
}

impl SeriesInput {
    /// Attach a color series loaded from a separate source.
    ///
    /// # Errors
    /// Returns `InvalidInput` if this input already carries color keys.
    pub fn with_color_by(mut self, color_by: Vec<Value>) -> Result<Self> {
        if self.color_by.is_some() {
            return Err(DotplotError::InvalidInput(
                "color_by given both in the input file and separately".to_string(),
            ));
        }
        self.color_by = Some(color_by);
        Ok(self)
    }
}

/// Load a series from a path, or from stdin when `source` is `-`.
///
/// # Errors
/// Returns `FileAccess` if the source cannot be read, `JsonParse` for
/// malformed JSON and `InvalidInput` for unsupported shapes or elements.
pub fn load_series(source: &Path, format: InputFormat) -> Result<SeriesInput> {
    let content = read_source(source)?;
    parse_series(&content, format.resolve(source, &content))
}

fn read_source(source: &Path) -> Result<String> {
    if source == Path::new(STDIN_SOURCE) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| DotplotError::FileAccess {
                path: PathBuf::from("<stdin>"),
                source: e,
            })?;
        return Ok(content);
    }
    std::fs::read_to_string(source).map_err(|e| DotplotError::FileAccess {
        path: source.to_path_buf(),
        source: e,
    })
}

/// Parse series content in a concrete format. `Auto` is treated as text.
///
/// # Errors
/// Returns `JsonParse` or `InvalidInput` as described in [`load_series`].
pub fn parse_series(content: &str, format: InputFormat) -> Result<SeriesInput> {
    match format {
        InputFormat::Json => parse_json(content),
        InputFormat::Text | InputFormat::Auto => Ok(parse_text(content)),
    }
}

fn parse_text(content: &str) -> SeriesInput {
    SeriesInput {
        x: content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(Value::parse)
            .collect(),
        ..SeriesInput::default()
    }
}

fn parse_json(content: &str) -> Result<SeriesInput> {
    let root: JsonValue = serde_json::from_str(content)?;
    match root {
        JsonValue::Object(mut map) if is_explicit_shape(&map) => {
            let x = map.remove("x").unwrap_or(JsonValue::Null);
            let color_by = map.remove("color_by");
            if let Some(key) = map.keys().next() {
                return Err(DotplotError::InvalidInput(format!(
                    "unexpected key '{key}'; expected only 'x' and 'color_by'"
                )));
            }
            let (x, labels) = sequence("x", x)?;
            let color_by = color_by
                .map(|keys| sequence("color_by", keys).map(|(values, _)| values))
                .transpose()?;
            Ok(SeriesInput {
                x,
                color_by,
                labels,
            })
        }
        other => {
            let (x, labels) = sequence("x", other)?;
            Ok(SeriesInput {
                x,
                color_by: None,
                labels,
            })
        }
    }
}

/// `{"x": <series>, "color_by": ...}` as opposed to a labeled series that
/// happens to have a label named `x`.
fn is_explicit_shape(map: &Map<String, JsonValue>) -> bool {
    matches!(map.get("x"), Some(JsonValue::Array(_) | JsonValue::Object(_)))
        || map.contains_key("color_by")
}

/// A JSON array or labeled object as values plus optional labels.
fn sequence(name: &str, json: JsonValue) -> Result<(Vec<Value>, Option<Vec<String>>)> {
    match json {
        JsonValue::Array(items) => {
            let values = items
                .into_iter()
                .enumerate()
                .map(|(i, item)| element(name, &i.to_string(), item))
                .collect::<Result<Vec<_>>>()?;
            Ok((values, None))
        }
        JsonValue::Object(map) => {
            let series = labeled(name, map)?;
            let labels = series.labels().to_vec();
            Ok((series.into_values(), Some(labels)))
        }
        other => Err(DotplotError::InvalidInput(format!(
            "{name} must be a list or a labeled series, got {}",
            json_kind(&other)
        ))),
    }
}

fn labeled(name: &str, map: Map<String, JsonValue>) -> Result<LabeledSeries<Value>> {
    map.into_iter()
        .map(|(label, item)| {
            let value = element(name, &label, item)?;
            Ok((label, value))
        })
        .collect()
}

fn element(name: &str, position: &str, item: JsonValue) -> Result<Value> {
    match item {
        JsonValue::Number(n) => n
            .as_i64()
            .map(Value::Int)
            .or_else(|| n.as_f64().map(Value::Float))
            .ok_or_else(|| {
                DotplotError::InvalidInput(format!("{name}[{position}]: unsupported number {n}"))
            }),
        JsonValue::String(s) => Ok(Value::Text(s)),
        other => Err(DotplotError::InvalidInput(format!(
            "{name}[{position}] must be a number or string, got {}",
            json_kind(&other)
        ))),
    }
}

const fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
