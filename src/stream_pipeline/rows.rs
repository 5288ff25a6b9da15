//! The row-oriented view of a decoded table.

use arrow::datatypes::SchemaRef;
use arrow::json::writer::{JsonArray, WriterBuilder};
use arrow::record_batch::RecordBatch;
use serde_json::{Map, Value};

use crate::error::RowcastError;

/// A decoded table re-shaped as rows: each row is an independent mapping from
/// column name to JSON value, preserving the table's row order.
#[derive(Debug, Clone)]
pub struct RowTable {
    schema: SchemaRef,
    rows: Vec<Map<String, Value>>,
}

impl RowTable {
    /// Re-shapes a columnar table into rows using the Arrow JSON writer's
    /// default value encoding. Nulls are written explicitly so every row
    /// carries the full set of column keys.
    pub fn from_batch(batch: &RecordBatch) -> Result<Self, RowcastError> {
        let schema = batch.schema();

        // The JSON writer emits nothing for a zero-row table, so the empty
        // case is handled before it is involved.
        if batch.num_rows() == 0 {
            return Ok(Self {
                schema,
                rows: Vec::new(),
            });
        }

        let mut writer = WriterBuilder::new()
            .with_explicit_nulls(true)
            .build::<_, JsonArray>(Vec::new());
        writer.write(batch)?;
        writer.finish()?;
        let rows = serde_json::from_slice(&writer.into_inner())?;

        Ok(Self { schema, rows })
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// The column names of the declared schema, in schema order. Present even
    /// when the table has zero rows.
    pub fn column_names(&self) -> Vec<&str> {
        self.schema
            .fields()
            .iter()
            .map(|field| field.name().as_str())
            .collect()
    }

    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    pub fn rows(&self) -> &[Map<String, Value>] {
        &self.rows
    }

    /// Serializes the table as a JSON array of row objects.
    pub fn to_json_string(&self) -> Result<String, RowcastError> {
        Ok(serde_json::to_string(&self.rows)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Int64Array, StringArray};
    use arrow::datatypes::{DataType, Field, Schema};
    use serde_json::json;
    use std::sync::Arc;

    fn two_column_batch() -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![
            Field::new("id", DataType::Int64, false),
            Field::new("name", DataType::Utf8, true),
        ]));
        RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Int64Array::from(vec![1, 2, 3])),
                Arc::new(StringArray::from(vec![Some("a"), None, Some("c")])),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_rows_preserve_order_and_keys() {
        let table = RowTable::from_batch(&two_column_batch()).unwrap();
        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.column_names(), vec!["id", "name"]);

        let rendered: Value = serde_json::from_str(&table.to_json_string().unwrap()).unwrap();
        assert_eq!(
            rendered,
            json!([
                {"id": 1, "name": "a"},
                {"id": 2, "name": null},
                {"id": 3, "name": "c"},
            ])
        );
    }

    #[test]
    fn test_null_values_keep_their_column_key() {
        let table = RowTable::from_batch(&two_column_batch()).unwrap();
        let second = &table.rows()[1];
        assert!(second.contains_key("name"));
        assert_eq!(second["name"], Value::Null);
    }

    #[test]
    fn test_zero_row_batch_serializes_to_empty_array() {
        let schema = Arc::new(Schema::new(vec![Field::new("id", DataType::Int64, false)]));
        let batch = RecordBatch::new_empty(schema);
        let table = RowTable::from_batch(&batch).unwrap();
        assert_eq!(table.num_rows(), 0);
        assert_eq!(table.column_names(), vec!["id"]);
        assert_eq!(table.to_json_string().unwrap(), "[]");
    }
}
