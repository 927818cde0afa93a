//! Line rendering for visit records.

use serde_json::{Value, json};

use nestwalk_config::OutputFormat;
use nestwalk_engine::{Container, Visit};

pub(crate) fn render(visit: &Visit<&Value>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => plain(visit),
        OutputFormat::Json => json_line(visit),
    }
}

/// `<pointer>\t<summary>`, e.g. `/items/0\t{2}` or `/name\t"root"`.
fn plain(visit: &Visit<&Value>) -> String {
    format!("{}\t{}", visit.path.to_pointer(), summary(visit.value))
}

fn summary(value: &Value) -> String {
    match value {
        Value::Object(map) => format!("{{{}}}", map.len()),
        Value::Array(items) => format!("[{}]", items.len()),
        scalar => scalar.to_string(),
    }
}

fn json_line(visit: &Visit<&Value>) -> String {
    let mut record = json!({
        "pointer": visit.path.to_pointer(),
        "key": visit.key,
        "depth": visit.depth(),
        "kind": visit.value.kind().as_str(),
    });
    let extra = match visit.value {
        Value::Object(map) => ("len", json!(map.len())),
        Value::Array(items) => ("len", json!(items.len())),
        scalar => ("value", (*scalar).clone()),
    };
    if let Value::Object(fields) = &mut record {
        fields.insert(extra.0.to_string(), extra.1);
    }
    record.to_string()
}
