//! Parquet input and output for [`Table`].

use crate::error::{PlotError, Result};
use crate::{Column, Table};
use arrow::array::{ArrayRef, AsArray, Float64Array};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Field, Float64Type, Schema};
use arrow::record_batch::RecordBatch;
use log::{debug, warn};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

/// prefix pandas gives to a stored (non-default) index
const PANDAS_INDEX_PREFIX: &str = "__index_level_";

impl Table {
    /// Init a Table from a parquet file, one column per numeric field.
    ///
    /// Every numeric type is cast to f64 and nulls become NAN.
    /// Index columns written by pandas are skipped,
    /// any other non-numeric column is an error.
    pub fn from_parquet<P: AsRef<Path>>(fin: P) -> Result<Table> {
        let fin = fin.as_ref();
        let file = File::open(fin).map_err(|source| PlotError::Open {
            path: fin.to_path_buf(),
            source,
        })?;
        let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
        let n_rows = builder.metadata().file_metadata().num_rows().max(0) as usize;
        let schema = builder.schema().clone();

        let mut table = Table::new();
        let mut keep: Vec<usize> = Vec::with_capacity(schema.fields().len());
        for (i, field) in schema.fields().iter().enumerate() {
            if field.name().starts_with(PANDAS_INDEX_PREFIX) {
                warn!("skipping pandas index column '{}'", field.name());
                continue;
            }
            if !is_plottable(field.data_type()) {
                return Err(PlotError::UnsupportedColumn {
                    name: field.name().clone(),
                    data_type: field.data_type().to_string(),
                });
            }
            keep.push(i);
            table.push(field.name().clone(), Vec::with_capacity(n_rows));
        }

        let reader = builder.build()?;
        for batch in reader {
            let batch = batch?;
            for (column, &i) in table.columns_mut().iter_mut().zip(keep.iter()) {
                append_f64(&mut column.values, batch.column(i))?;
            }
        }
        for column in table.columns() {
            let nans = column.values.iter().filter(|v| v.is_nan()).count();
            if nans > 0 {
                warn!("column '{}' has {} missing values", column.name, nans);
            }
            debug!("column '{}': {} values", column.name, column.values.len());
        }
        Ok(table)
    }

    /// writes every column as a nullable Float64 field at the given path
    pub fn to_parquet<P: AsRef<Path>>(&self, fout: P) -> Result<()> {
        let fout = fout.as_ref();
        let fields: Vec<Field> = self
            .columns()
            .iter()
            .map(|c| Field::new(c.name.as_str(), DataType::Float64, true))
            .collect();
        let schema = Arc::new(Schema::new(fields));
        let arrays: Vec<ArrayRef> = self
            .columns()
            .iter()
            .map(|c: &Column| Arc::new(Float64Array::from(c.values.clone())) as ArrayRef)
            .collect();
        let batch = RecordBatch::try_new(schema.clone(), arrays)?;

        let file = File::create(fout).map_err(|source| PlotError::Write {
            path: fout.to_path_buf(),
            source,
        })?;
        let mut writer = ArrowWriter::try_new(file, schema, None)?;
        writer.write(&batch)?;
        writer.close()?;
        Ok(())
    }
}

fn is_plottable(data_type: &DataType) -> bool {
    data_type.is_numeric() || matches!(data_type, DataType::Boolean | DataType::Null)
}

fn append_f64(out: &mut Vec<f64>, array: &ArrayRef) -> Result<()> {
    let as_f64 = cast(array.as_ref(), &DataType::Float64)?;
    let values = as_f64.as_primitive::<Float64Type>();
    out.reserve(values.len());
    out.extend(values.iter().map(|v| v.unwrap_or(f64::NAN)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Float32Array, Int64Array, StringArray};

    fn write_batches(path: &Path, batches: &[RecordBatch]) {
        let file = File::create(path).unwrap();
        let mut writer = ArrowWriter::try_new(file, batches[0].schema(), None).unwrap();
        for batch in batches {
            writer.write(batch).unwrap();
        }
        writer.close().unwrap();
    }

    #[test]
    fn test_roundtrip_keeps_order_and_nan() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.parquet");
        let mut table = Table::new();
        table.push("zeta", vec![1., f64::NAN, 3.]);
        table.push("alpha", vec![-1., -2., -3.]);
        table.to_parquet(&path).unwrap();

        let loaded = Table::from_parquet(&path).unwrap();
        let names: Vec<&str> = loaded.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
        assert!(loaded.columns()[0].values[1].is_nan());
        assert_eq!(loaded.column("alpha").unwrap().values, vec![-1., -2., -3.]);
    }

    #[test]
    fn test_mixed_numeric_types_over_batches() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixed.parquet");
        let schema = Arc::new(Schema::new(vec![
            Field::new("f32", DataType::Float32, true),
            Field::new("i64", DataType::Int64, true),
            Field::new("__index_level_0__", DataType::Int64, false),
        ]));
        let first = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Float32Array::from(vec![Some(0.5), None])),
                Arc::new(Int64Array::from(vec![1, 2])),
                Arc::new(Int64Array::from(vec![0, 1])),
            ],
        )
        .unwrap();
        let second = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Float32Array::from(vec![Some(1.5)])),
                Arc::new(Int64Array::from(vec![3])),
                Arc::new(Int64Array::from(vec![2])),
            ],
        )
        .unwrap();
        write_batches(&path, &[first, second]);

        let table = Table::from_parquet(&path).unwrap();
        assert_eq!(table.n_columns(), 2);
        let f = &table.column("f32").unwrap().values;
        assert_eq!(f.len(), 3);
        assert_eq!(f[0], 0.5);
        assert!(f[1].is_nan());
        assert_eq!(f[2], 1.5);
        assert_eq!(table.column("i64").unwrap().values, vec![1., 2., 3.]);
        assert!(table.column("__index_level_0__").is_none());
    }

    #[test]
    fn test_string_column_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("text.parquet");
        let schema = Arc::new(Schema::new(vec![
            Field::new("v", DataType::Float64, false),
            Field::new("sample", DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Float64Array::from(vec![1.0])),
                Arc::new(StringArray::from(vec!["A"])),
            ],
        )
        .unwrap();
        write_batches(&path, &[batch]);

        match Table::from_parquet(&path) {
            Err(PlotError::UnsupportedColumn { name, .. }) => assert_eq!(name, "sample"),
            other => panic!("expected UnsupportedColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c1.parquet");
        match Table::from_parquet(&path) {
            Err(PlotError::Open { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Open error, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c1.parquet");
        std::fs::write(&path, b"not a parquet file at all").unwrap();
        assert!(matches!(
            Table::from_parquet(&path),
            Err(PlotError::Parquet(_))
        ));
    }
}
