//! JSONL storage for records
//!
//! Tasks live in `.tareas/tasks.jsonl` and subtasks in
//! `.tareas/subtasks.jsonl`, one JSON object per line. File order is
//! creation order; a later line with an existing ID replaces the earlier one
//! in place.
//!
//! Readers take a shared lock on the data file. Every writer first takes an
//! exclusive lock on a sibling `.lock` file and holds it for the whole
//! read-modify-write, so appends and rewrites from concurrent processes are
//! serialized. The data file itself is replaced by rename and cannot carry
//! that lock.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use crate::domain::{Record, RecordId};

/// Store for record data in JSONL format
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Creates a new record store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the sibling file writers lock
    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("jsonl.lock")
    }

    /// Blocks until this process is the only writer; released on drop
    fn lock_writers(&self) -> Result<File> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let lock_path = self.lock_path();
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .with_context(|| format!("Failed to open lock file: {}", lock_path.display()))?;

        file.lock_exclusive()
            .context("Failed to acquire write lock on record store")?;

        Ok(file)
    }

    /// Reads all records in file order
    pub fn read_all(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open record store: {}", self.path.display()))?;

        // Acquire shared lock for reading
        file.lock_shared()
            .context("Failed to acquire read lock on record store")?;

        let reader = BufReader::new(&file);
        let mut records: Vec<Record> = Vec::new();
        let mut positions: HashMap<RecordId, usize> = HashMap::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;

            if line.trim().is_empty() {
                continue;
            }

            let record: Record = serde_json::from_str(&line)
                .with_context(|| format!("Failed to parse record at line {}", line_num + 1))?;

            match positions.get(&record.id) {
                Some(&pos) => records[pos] = record,
                None => {
                    positions.insert(record.id.clone(), records.len());
                    records.push(record);
                }
            }
        }

        // Lock is released when file is dropped
        Ok(records)
    }

    /// Writes all records to the store (full rewrite, order preserved)
    pub fn write_all(&self, records: &[Record]) -> Result<()> {
        let _writers = self.lock_writers()?;
        self.replace_file(records)
    }

    /// Rewrites the data file; callers hold the writer lock
    fn replace_file(&self, records: &[Record]) -> Result<()> {
        // Write to temp file first
        let temp_path = self.path.with_extension("jsonl.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            let mut writer = BufWriter::new(&file);

            for record in records {
                let line = serde_json::to_string(record).context("Failed to serialize record")?;
                writeln!(writer, "{}", line).context("Failed to write record")?;
            }

            writer.flush().context("Failed to flush record store")?;
        }

        // Atomic rename
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }

    /// Appends a single record without rewriting the file
    pub fn append(&self, record: &Record) -> Result<()> {
        let _writers = self.lock_writers()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open record store: {}", self.path.display()))?;

        let mut writer = BufWriter::new(&file);
        let line = serde_json::to_string(record).context("Failed to serialize record")?;
        writeln!(writer, "{}", line).context("Failed to write record")?;

        writer.flush().context("Failed to flush record store")?;

        Ok(())
    }

    /// Replaces the record with the same ID; returns false if it does not exist
    pub fn update(&self, record: &Record) -> Result<bool> {
        let _writers = self.lock_writers()?;
        let mut records = self.read_all()?;
        let Some(slot) = records.iter_mut().find(|r| r.id == record.id) else {
            return Ok(false);
        };
        *slot = record.clone();
        self.replace_file(&records)?;
        Ok(true)
    }

    /// Removes every record matching the predicate; returns how many went
    pub fn remove_where(&self, predicate: impl Fn(&Record) -> bool) -> Result<usize> {
        let _writers = self.lock_writers()?;
        let mut records = self.read_all()?;
        let before = records.len();
        records.retain(|r| !predicate(r));
        let removed = before - records.len();
        if removed > 0 {
            self.replace_file(&records)?;
        }
        Ok(removed)
    }

    /// Removes a record by ID
    pub fn remove(&self, id: &RecordId) -> Result<bool> {
        Ok(self.remove_where(|r| &r.id == id)? > 0)
    }
}
