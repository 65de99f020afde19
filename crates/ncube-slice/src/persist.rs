//! Flat binary set files, halfspace text dumps and JSON manifests.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use ncube_core::{check_width, is_sorted, Cube, ErrorInfo, Halfspace, NcubeError, SliceableSet};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::low_weight::HalfspaceRecord;

fn ensure_parent(path: &Path) -> Result<(), NcubeError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|err| NcubeError::io("create-dir", parent, err))
        }
        _ => Ok(()),
    }
}

fn encode_records(sets: &[SliceableSet]) -> Vec<u8> {
    let mut bytes = Vec::new();
    for set in sets {
        bytes.extend_from_slice(&set.to_bytes());
    }
    bytes
}

/// Writes `sets` as consecutive packed records, creating parent directories.
pub fn write_sets(path: &Path, sets: &[SliceableSet]) -> Result<(), NcubeError> {
    if let Some(first) = sets.first() {
        check_width(sets, first.len(), "write_sets")?;
    }
    ensure_parent(path)?;
    let file = File::create(path).map_err(|err| NcubeError::io("create-file", path, err))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&encode_records(sets))
        .and_then(|_| writer.flush())
        .map_err(|err| NcubeError::io("write-file", path, err))
}

/// Reads the whole file at `path`, reporting allocation failure as a read error.
pub fn read_records(path: &Path) -> Result<Vec<u8>, NcubeError> {
    let mut file = File::open(path).map_err(|err| NcubeError::io("open-file", path, err))?;
    let size = file
        .metadata()
        .map_err(|err| NcubeError::io("stat-file", path, err))?
        .len();
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(size as usize)
        .map_err(|err| NcubeError::io("read-alloc", path, err))?;
    file.read_to_end(&mut bytes)
        .map_err(|err| NcubeError::io("read-file", path, err))?;
    Ok(bytes)
}

/// Decodes a buffer of packed `bits`-wide records.
pub fn decode_records(bytes: &[u8], bits: usize) -> Result<Vec<SliceableSet>, NcubeError> {
    let record_len = SliceableSet::record_len(bits);
    if record_len == 0 || bytes.len() % record_len != 0 {
        let info = ErrorInfo::new("record-length", "file size is not a multiple of the record length")
            .with_context("bytes", bytes.len().to_string())
            .with_context("record_len", record_len.to_string());
        return Err(NcubeError::InvalidInput(info));
    }
    let mut sets = Vec::new();
    sets.try_reserve_exact(bytes.len() / record_len).map_err(|err| {
        NcubeError::Io(ErrorInfo::new("read-alloc", err.to_string()))
    })?;
    for chunk in bytes.chunks_exact(record_len) {
        sets.push(SliceableSet::from_bytes(chunk, bits)?);
    }
    Ok(sets)
}

/// Reads a file written by [`write_sets`]; records keep their on-disk order.
pub fn read_sets(path: &Path, bits: usize) -> Result<Vec<SliceableSet>, NcubeError> {
    decode_records(&read_records(path)?, bits).map_err(|err| match err {
        NcubeError::InvalidInput(info) => {
            NcubeError::InvalidInput(info.with_context("path", path.display().to_string()))
        }
        other => other,
    })
}

/// Writes one line per record, lines sorted, newline terminated.
pub fn write_text_dump(path: &Path, records: &[HalfspaceRecord]) -> Result<(), NcubeError> {
    let mut lines: Vec<String> = records.iter().map(ToString::to_string).collect();
    lines.sort_unstable();
    ensure_parent(path)?;
    let file = File::create(path).map_err(|err| NcubeError::io("create-file", path, err))?;
    let mut writer = BufWriter::new(file);
    for line in &lines {
        writeln!(writer, "{line}").map_err(|err| NcubeError::io("write-file", path, err))?;
    }
    writer.flush().map_err(|err| NcubeError::io("write-file", path, err))
}

fn parse_dump_line(line: &str, number: usize) -> Result<HalfspaceRecord, NcubeError> {
    let malformed = |reason: &str| {
        NcubeError::InvalidInput(
            ErrorInfo::new("dump-line", reason)
                .with_context("line", number.to_string())
                .with_context("text", line),
        )
    };
    let (bits, rest) = line
        .split_once(' ')
        .ok_or_else(|| malformed("missing normal vector"))?;
    let set = SliceableSet::from_bitstring(bits)?;
    let rest = rest
        .trim_start()
        .strip_prefix('[')
        .ok_or_else(|| malformed("normal vector must start with '['"))?;
    let (normal, threshold) = rest
        .split_once(']')
        .ok_or_else(|| malformed("normal vector must end with ']'"))?;
    let normal = normal
        .split_whitespace()
        .map(str::parse::<i32>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| malformed("normal entries must be integers"))?;
    let threshold = threshold
        .trim()
        .parse::<i32>()
        .map_err(|_| malformed("threshold must be an integer"))?;
    Ok(HalfspaceRecord {
        set,
        halfspace: Halfspace { normal, threshold },
    })
}

/// Parses a dump written by [`write_text_dump`].
pub fn read_text_dump(path: &Path) -> Result<Vec<HalfspaceRecord>, NcubeError> {
    let text = fs::read_to_string(path).map_err(|err| NcubeError::io("read-file", path, err))?;
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_dump_line(line, index + 1))
        .collect()
}

/// Sidecar describing a binary set file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Cube dimension.
    pub dimension: usize,
    /// Number of edges, which is the set width in bits.
    pub edge_count: usize,
    /// Bytes per record.
    pub record_len: usize,
    /// Number of records.
    pub record_count: usize,
    /// Whether the records are sorted ascending.
    pub sorted: bool,
    /// Lowercase hex SHA-256 of the record bytes.
    pub sha256: String,
}

/// Location of the manifest for `path`: the same name with `.json` appended.
pub fn manifest_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".json");
    PathBuf::from(name)
}

fn digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Writes `sets` to `path` and its manifest next to it.
pub fn write_sets_with_manifest(
    path: &Path,
    cube: Cube,
    sets: &[SliceableSet],
) -> Result<Manifest, NcubeError> {
    check_width(sets, cube.edge_count(), "write_sets_with_manifest")?;
    write_sets(path, sets)?;
    let manifest = Manifest {
        dimension: cube.dimension(),
        edge_count: cube.edge_count(),
        record_len: SliceableSet::record_len(cube.edge_count()),
        record_count: sets.len(),
        sorted: is_sorted(sets),
        sha256: digest(&encode_records(sets)),
    };
    let json = serde_json::to_vec_pretty(&manifest)
        .map_err(|err| NcubeError::Serde(ErrorInfo::new("manifest-serialize", err.to_string())))?;
    let target = manifest_path(path);
    fs::write(&target, json).map_err(|err| NcubeError::io("write-manifest", &target, err))?;
    Ok(manifest)
}

/// Loads the manifest of `path` and checks the file against it.
pub fn verify_manifest(path: &Path) -> Result<Manifest, NcubeError> {
    let source = manifest_path(path);
    let json = fs::read(&source).map_err(|err| NcubeError::io("read-manifest", &source, err))?;
    let manifest: Manifest = serde_json::from_slice(&json).map_err(|err| {
        NcubeError::Serde(
            ErrorInfo::new("manifest-deserialize", err.to_string())
                .with_context("path", source.display().to_string()),
        )
    })?;
    let bytes = read_records(path)?;
    let expected_len = manifest.record_len * manifest.record_count;
    if bytes.len() != expected_len {
        let info = ErrorInfo::new("manifest-size", "file size does not match its manifest")
            .with_context("path", path.display().to_string())
            .with_context("expected", expected_len.to_string())
            .with_context("found", bytes.len().to_string());
        return Err(NcubeError::InvalidInput(info));
    }
    let actual = digest(&bytes);
    if actual != manifest.sha256 {
        let info = ErrorInfo::new("manifest-digest", "file digest does not match its manifest")
            .with_context("path", path.display().to_string())
            .with_context("expected", manifest.sha256.clone())
            .with_context("found", actual);
        return Err(NcubeError::InvalidInput(info));
    }
    Ok(manifest)
}
