use serde::Serialize;

use crate::dotchart::DotCoordinates;
use crate::error::Result;
use crate::series::Value;

use super::CoordsFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    #[serde(flatten)]
    coordinates: &'a DotCoordinates<Value, Value>,
}

#[derive(Serialize)]
struct Summary {
    points: usize,
    distinct: usize,
    max_count: usize,
}

impl CoordsFormatter for JsonFormatter {
    fn format(&self, coords: &DotCoordinates<Value, Value>) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                points: coords.len(),
                distinct: coords.y.iter().filter(|&&count| count == 1).count(),
                max_count: coords.max_count(),
            },
            coordinates: coords,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
