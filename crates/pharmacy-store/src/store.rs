//! # Generic Record Store
//!
//! The in-memory set plus backing-file persistence for one record type.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   open() ──► load() ──► loaded ──► add() ──► validate                  │
//! │                            ▲                    │                       │
//! │                            │                    ▼                       │
//! │                            │              push to memory                │
//! │                            │                    │                       │
//! │                            │                    ▼                       │
//! │                            └──────────── save() (whole file)            │
//! │                                                                         │
//! │  save(): write <file>.tmp ──► fsync ──► rename over <file>             │
//! │          a failed save leaves the old file in place                    │
//! │          skipped lines are written back verbatim after the records     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A line skipped under [`MalformedLinePolicy::Skip`] is never lost: it
//! stays in the [`LoadReport`] and every save appends it unchanged, so a
//! person can repair the file by hand later. Records come first, then the
//! kept lines in their original order.
//!
//! Every operation runs to completion on the calling thread. File handles
//! are scoped to the function that opens them.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use pharmacy_core::Form;
use tracing::{debug, info, warn};

use crate::config::MalformedLinePolicy;
use crate::error::{StoreError, StoreResult};
use crate::record::{self, Record};

// =============================================================================
// Identifier Enumeration
// =============================================================================

/// Read-only access to a store's identifiers.
///
/// This is the only view the order store gets of the other two stores.
pub trait IdentifierSource {
    /// Entity name ("Medicine", "Customer").
    fn entity(&self) -> &'static str;

    /// Every record's id as a string, in insertion order.
    fn identifiers(&self) -> Vec<String>;
}

// =============================================================================
// Load Report
// =============================================================================

/// A line that was skipped while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number.
    pub line: usize,
    pub content: String,
    pub reason: String,
}

/// Outcome of the most recent load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records read successfully.
    pub loaded: usize,

    /// Lines skipped under [`MalformedLinePolicy::Skip`].
    pub skipped: Vec<MalformedLine>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

// =============================================================================
// Store
// =============================================================================

/// One record type's in-memory set and backing file.
///
/// ## Usage
/// ```rust,no_run
/// use pharmacy_core::{Money, Medicine};
/// use pharmacy_store::{MalformedLinePolicy, MedicineStore};
///
/// let mut store = MedicineStore::open("data/Medicine.txt", MalformedLinePolicy::Skip)?;
/// store.add(Medicine::new(1, "Aspirin", 50, Money::from_cents(500)))?;
///
/// assert_eq!(store.identifiers(), vec!["1".to_string()]);
/// # Ok::<(), pharmacy_store::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Store<R: Record> {
    path: PathBuf,
    policy: MalformedLinePolicy,
    records: Vec<R>,
    report: LoadReport,
}

impl<R: Record> Store<R> {
    /// Creates a store and loads its backing file.
    ///
    /// A missing file is an empty store, not an error.
    pub fn open(path: impl Into<PathBuf>, policy: MalformedLinePolicy) -> StoreResult<Self> {
        let mut store = Store {
            path: path.into(),
            policy,
            records: Vec::new(),
            report: LoadReport::default(),
        };
        store.load()?;
        Ok(store)
    }

    /// Replaces the in-memory set with the backing file's contents.
    ///
    /// On error the previous in-memory set is kept.
    pub fn load(&mut self) -> StoreResult<&LoadReport> {
        let (records, report) = read_records::<R>(&self.path, self.policy)?;

        info!(
            entity = R::ENTITY,
            path = %self.path.display(),
            loaded = report.loaded,
            skipped = report.skipped.len(),
            "Loaded records"
        );

        self.records = records;
        self.report = report;
        Ok(&self.report)
    }

    /// Rewrites the whole backing file from the in-memory set, followed by
    /// any lines the last load skipped.
    pub fn save(&self) -> StoreResult<()> {
        write_records(&self.path, &self.records, &self.report.skipped)?;

        if !self.report.is_clean() {
            warn!(
                entity = R::ENTITY,
                path = %self.path.display(),
                kept = self.report.skipped.len(),
                "Unreadable lines kept in file"
            );
        }
        debug!(
            entity = R::ENTITY,
            path = %self.path.display(),
            count = self.records.len(),
            "Saved records"
        );
        Ok(())
    }

    /// Appends a record and saves.
    ///
    /// ## Returns
    /// * `Ok(record)` - Appended and on disk
    /// * `Err(StoreError::Validation)` - Rejected; nothing changed
    /// * `Err(StoreError::Persist)` - Appended in memory, possibly not on disk
    ///
    /// Ids are not checked for uniqueness.
    pub fn add(&mut self, record: R) -> StoreResult<R> {
        record.validate()?;

        debug!(entity = R::ENTITY, id = record.identifier(), "Adding record");
        self.records.push(record.clone());

        if let Err(e) = self.save() {
            warn!(
                entity = R::ENTITY,
                id = record.identifier(),
                error = %e,
                "Record added in memory but not saved"
            );
            return Err(e);
        }

        Ok(record)
    }

    /// Parses raw form text and appends the result.
    ///
    /// A parse failure leaves the store untouched and writes nothing.
    pub fn add_form<F>(&mut self, form: &F) -> StoreResult<R>
    where
        F: Form<Output = R>,
    {
        let record = form.parse()?;
        self.add(record)
    }

    /// Every record, in insertion order.
    pub fn list(&self) -> &[R] {
        &self.records
    }

    /// Every record's id as a string, in insertion order.
    pub fn identifiers(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.identifier().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Report from the most recent successful load.
    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }
}

impl<R: Record> IdentifierSource for Store<R> {
    fn entity(&self) -> &'static str {
        R::ENTITY
    }

    fn identifiers(&self) -> Vec<String> {
        Store::identifiers(self)
    }
}

// =============================================================================
// File I/O
// =============================================================================

fn read_records<R: Record>(
    path: &Path,
    policy: MalformedLinePolicy,
) -> StoreResult<(Vec<R>, LoadReport)> {
    let io_error = |source: io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(
                entity = R::ENTITY,
                path = %path.display(),
                "No backing file yet, starting empty"
            );
            return Ok((Vec::new(), LoadReport::default()));
        }
        Err(e) => return Err(io_error(e)),
    };

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(io_error)?;
        let number = index + 1;

        if line.trim().is_empty() {
            continue;
        }

        match record::from_line::<R>(&line) {
            Ok(record) => records.push(record),
            Err(reason) => match policy {
                MalformedLinePolicy::Skip => {
                    warn!(
                        entity = R::ENTITY,
                        path = %path.display(),
                        line = number,
                        %reason,
                        "Skipping malformed record"
                    );
                    report.skipped.push(MalformedLine {
                        line: number,
                        content: line,
                        reason,
                    });
                }
                MalformedLinePolicy::Abort => {
                    return Err(StoreError::Malformed {
                        path: path.to_path_buf(),
                        line: number,
                        reason,
                    });
                }
            },
        }
    }

    report.loaded = records.len();
    Ok((records, report))
}

fn write_records<R: Record>(
    path: &Path,
    records: &[R],
    kept: &[MalformedLine],
) -> StoreResult<()> {
    let persist = |source: io::Error| StoreError::Persist {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(persist)?;
    }

    let tmp = temp_path(path);
    let result = write_file(&tmp, records, kept).and_then(|()| fs::rename(&tmp, path));

    if let Err(source) = result {
        // The target still holds the previous save
        let _ = fs::remove_file(&tmp);
        return Err(persist(source));
    }

    Ok(())
}

fn write_file<R: Record>(path: &Path, records: &[R], kept: &[MalformedLine]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    for record in records {
        writeln!(writer, "{}", record::to_line(record))?;
    }
    for line in kept {
        writeln!(writer, "{}", line.content)?;
    }

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("records"));
    name.push(".tmp");
    path.with_file_name(name)
}

// =============================================================================
// Unit Tests
// =============================================================================
