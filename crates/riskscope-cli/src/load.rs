//! CSV upload reading: each file becomes one logical Arrow table.

use std::fs::File;
use std::io::Seek;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use arrow::compute::concat_batches;
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::record_batch::RecordBatch;

/// Read a headered CSV into a single batch, schema inferred from the
/// whole file.
pub fn read_csv(path: &Path) -> anyhow::Result<RecordBatch> {
    let mut file = File::open(path).with_context(|| format!("opening {}", path.display()))?;

    let format = Format::default().with_header(true);
    let (schema, _) = format
        .infer_schema(&mut file, None)
        .with_context(|| format!("inferring schema of {}", path.display()))?;
    file.rewind()?;

    let schema = Arc::new(schema);
    let reader = ReaderBuilder::new(schema.clone())
        .with_format(format)
        .build(file)
        .with_context(|| format!("reading {}", path.display()))?;

    let batches: Vec<RecordBatch> = reader
        .collect::<Result<_, _>>()
        .with_context(|| format!("decoding {}", path.display()))?;
    Ok(concat_batches(&schema, &batches)?)
}

/// Write a batch as a headered CSV.
pub fn write_csv(path: &Path, batch: &RecordBatch) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = arrow::csv::WriterBuilder::new().with_header(true).build(file);
    writer
        .write(batch)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
