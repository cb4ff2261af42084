use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use sha2::{Digest, Sha256};

use provgen_core::ProvDocument;

use super::OutputError;
use crate::model::GenerationReport;

const INDENT: &[u8] = b"    ";

/// Write `document` as pretty JSON, replacing `path` atomically.
///
/// Returns the number of bytes written.
pub fn write_document(path: &Path, document: &ProvDocument) -> Result<u64, OutputError> {
    let data = encode_pretty(document)?;
    write_bytes_atomic(path, &data)?;
    Ok(data.len() as u64)
}

/// Load a document previously written by [`write_document`].
pub fn read_document(path: &Path) -> Result<ProvDocument, OutputError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn write_report(path: &Path, report: &GenerationReport) -> Result<(), OutputError> {
    let data = encode_pretty(report)?;
    write_bytes_atomic(path, &data)
}

/// SHA-256 of the compact JSON encoding, hex encoded.
pub fn document_fingerprint(document: &ProvDocument) -> Result<String, serde_json::Error> {
    let data = serde_json::to_vec(document)?;
    Ok(hex::encode(Sha256::digest(&data)))
}

fn encode_pretty<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut data = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut data, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(data)
}

fn write_bytes_atomic(path: &Path, data: &[u8]) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            sync_dir(parent)?;
        }
    }

    std::fs::rename(&tmp_path, path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            sync_dir(parent)?;
        }
    }

    Ok(())
}

fn sync_dir(path: &Path) -> std::io::Result<()> {
    let dir = OpenOptions::new().read(true).open(path)?;
    dir.sync_all()
}

fn temp_path(path: &Path) -> Result<PathBuf, OutputError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| OutputError::InvalidPath(path.display().to_string()))?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}
