use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::{
    collections::BTreeMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Last-used timestamps live next to the profiles under this name
pub const USAGE_STATE_FILE: &str = ".codex-auth-last-used.json";
const AUTHS_SUBDIR: &str = "auths";
const INSTALLED_FILE_NAME: &str = "auth.json";
const LAST_USED_FORMAT: &str = "%a, %d %b %Y %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthFile {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

/// What `install` copied and where
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyResult {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes: u64,
}

/// Regular files in `root`, sorted by name. The usage state file is skipped.
pub fn list_files(root: &Path) -> Result<Vec<AuthFile>> {
    let read_dir =
        fs::read_dir(root).with_context(|| format!("Failed to read {}", root.display()))?;
    let mut files = Vec::new();
    for entry in read_dir {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if metadata.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == USAGE_STATE_FILE {
            continue;
        }
        files.push(AuthFile {
            name,
            path: entry.path(),
            size: metadata.len(),
        });
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// Resolve the folder that actually stores the profiles.
///
/// An `auths/` subdirectory holding files wins over `path` itself.
pub fn validate_root(path: &Path) -> Result<PathBuf> {
    let root = dunce::canonicalize(path)
        .with_context(|| format!("Cannot access auths path {}", path.display()))?;
    if !root.is_dir() {
        bail!("{} is not a directory", root.display());
    }

    let mut candidates = vec![root.clone()];
    if root.file_name().is_none_or(|name| name != AUTHS_SUBDIR) {
        candidates.insert(0, root.join(AUTHS_SUBDIR));
    }
    for candidate in candidates {
        if candidate.is_dir() && dir_has_files(&candidate)? {
            log::debug!("using auth folder {}", candidate.display());
            return Ok(candidate);
        }
    }
    bail!("No auth files found inside {}", root.display())
}

fn dir_has_files(dir: &Path) -> Result<bool> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() || entry.file_name() == USAGE_STATE_FILE {
            continue;
        }
        return Ok(true);
    }
    Ok(false)
}

/// `~/.codex/auth.json`, where the Codex CLI reads its credentials
pub fn default_destination() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".codex").join(INSTALLED_FILE_NAME))
        .context("Unable to find home directory")
}

/// Copy `src` over `destination` atomically, readable only by the owner.
pub fn install(src: &Path, destination: &Path) -> Result<CopyResult> {
    let bytes = fs::metadata(src)
        .with_context(|| format!("Cannot read {}", src.display()))?
        .len();
    let contents = fs::read(src).with_context(|| format!("Cannot read {}", src.display()))?;
    write_private(destination, &contents)
        .with_context(|| format!("Failed to write {}", destination.display()))?;
    log::info!("installed {} -> {}", src.display(), destination.display());
    Ok(CopyResult {
        source: src.to_path_buf(),
        destination: destination.to_path_buf(),
        bytes,
    })
}

/// Write through a randomly named sibling temp file (created 0600) and
/// rename it into place. Missing parent directories are created 0700.
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    create_private_dir(dir)?;

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Last-used timestamps for the profiles in one folder.
#[derive(Debug, Clone)]
pub struct UsageTracker {
    path: PathBuf,
    data: BTreeMap<String, DateTime<Utc>>,
}

impl UsageTracker {
    /// Read the state file in `dir`. A missing file is an empty tracker;
    /// entries whose timestamp does not parse are dropped.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(USAGE_STATE_FILE);
        let mut data = BTreeMap::new();
        match fs::read_to_string(&path) {
            Ok(raw) => {
                let payload: BTreeMap<String, String> = serde_json::from_str(&raw)
                    .with_context(|| format!("Failed to parse {}", path.display()))?;
                for (name, value) in payload {
                    match DateTime::parse_from_rfc3339(&value) {
                        Ok(ts) => {
                            data.insert(name, ts.with_timezone(&Utc));
                        }
                        Err(e) => log::warn!("ignoring bad timestamp for {name}: {e}"),
                    }
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        }
        Ok(Self { path, data })
    }

    pub fn last_used(&self, name: &str) -> Option<DateTime<Utc>> {
        self.data.get(name).copied()
    }

    /// Record `ts` for `name` and persist the whole table.
    pub fn touch(&mut self, name: &str, ts: DateTime<Utc>) -> Result<()> {
        self.data.insert(name.to_string(), ts);
        self.save()
    }

    fn save(&self) -> Result<()> {
        let encoded: BTreeMap<&str, String> = self
            .data
            .iter()
            .map(|(name, ts)| {
                (
                    name.as_str(),
                    ts.to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
                )
            })
            .collect();
        let mut json = serde_json::to_vec(&encoded)?;
        json.push(b'\n');
        write_private(&self.path, &json)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

/// Never-used profiles first (by name), then least recently used first.
pub fn sort_by_last_used(files: &mut [AuthFile], tracker: &UsageTracker) {
    files.sort_by(|a, b| {
        (tracker.last_used(&a.name), &a.name).cmp(&(tracker.last_used(&b.name), &b.name))
    });
}

/// "Last used Mon, 02 Jan 2006 15:04" in local time, or "never used"
pub fn describe_last_used(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => format!(
            "Last used {}",
            ts.with_timezone(&Local).format(LAST_USED_FORMAT)
        ),
        None => "never used".to_string(),
    }
}
