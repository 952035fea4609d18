/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use serde_json::{Map, Value};

/// Renders link records as CSV text for the import endpoint
///
/// The header is taken from the keys of the first record, in insertion
/// order. Later records may omit columns (written as empty cells) but may
/// not introduce new ones.
/// Strings are written verbatim, `null` as an empty cell and any other value
/// in its JSON form.
pub fn records_to_csv(records: &[Map<String, Value>]) -> Result<String, AppError> {
    let Some(first) = records.first() else {
        return Err(AppError::InvalidInput("no records provided".to_string()));
    };
    let header: Vec<&str> = first.keys().map(String::as_str).collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&header)?;

    for (index, record) in records.iter().enumerate() {
        if let Some(unknown) = record.keys().find(|k| !header.contains(&k.as_str())) {
            return Err(AppError::InvalidInput(format!(
                "record {index} has column {unknown:?} missing from the header"
            )));
        }
        let row: Vec<String> = header
            .iter()
            .map(|column| record.get(*column).map(cell).unwrap_or_default())
            .collect();
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Csv(csv::Error::from(e.into_error())))?;
    String::from_utf8(bytes).map_err(|e| AppError::InvalidInput(format!("csv is not UTF-8: {e}")))
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
