//! Format-dispatching rendering of API records.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::Serialize;
use serde_json::{Map, Value};

use super::table;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(format!(
                "Invalid output format \"{}\", must be one of ['json', 'yaml', 'table']",
                s
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Project `records` onto `columns` and render them in `format`.
///
/// The column order is preserved verbatim in every format. Values missing
/// from a record render blank in tables and `null` in JSON and YAML.
pub fn print_records<T: Serialize>(
    format: OutputFormat,
    records: &[T],
    columns: &[&str],
) -> Result<()> {
    let projected = project_records(records, columns)?;
    match format {
        OutputFormat::Table => table::display_records(columns, &projected),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&projected)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&projected)?),
    }
    Ok(())
}

fn project_records<T: Serialize>(
    records: &[T],
    columns: &[&str],
) -> Result<Vec<Map<String, Value>>> {
    records.iter().map(|record| project(record, columns)).collect()
}

fn project<T: Serialize>(record: &T, columns: &[&str]) -> Result<Map<String, Value>> {
    let value = serde_json::to_value(record)?;
    let fields = value
        .as_object()
        .ok_or_else(|| anyhow!("only object-shaped records can be printed"))?;

    Ok(columns
        .iter()
        .map(|column| {
            let field = fields.get(*column).cloned().unwrap_or(Value::Null);
            ((*column).to_string(), field)
        })
        .collect())
}
