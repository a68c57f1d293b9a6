use crate::core::{LedgerError, LedgerResult};
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

pub type SeedMapping = BTreeMap<String, String>;

/// Instrument identifier to ticker symbol, seeded from disk and written back
/// wholesale at the end of a run.
#[derive(Debug, Default, Clone)]
pub struct InstrumentDirectory {
    symbols: BTreeMap<String, String>,
    duplicate_symbols: usize,
}

impl InstrumentDirectory {
    pub fn initialize(seed: SeedMapping) -> Self {
        let mut symbols = BTreeMap::new();
        let mut seen: HashMap<String, String> = HashMap::new();
        let mut duplicate_symbols = 0;
        for (identifier, symbol) in seed {
            if identifier.is_empty() || symbol.is_empty() {
                continue;
            }
            if let Some(previous) = seen.get(&symbol) {
                warn!(
                    "symbol {} already present under {}, also mapped by {}",
                    symbol, previous, identifier
                );
                duplicate_symbols += 1;
            }
            seen.insert(symbol.clone(), identifier.clone());
            symbols.insert(identifier, symbol);
        }
        InstrumentDirectory {
            symbols,
            duplicate_symbols,
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| LedgerError::SnapshotRead {
            path: path.display().to_string(),
            source,
        })?;
        let seed: SeedMapping =
            serde_json::from_str(&raw).map_err(|source| LedgerError::SnapshotParse {
                path: path.display().to_string(),
                source,
            })?;
        let directory = Self::initialize(seed);
        info!(
            "Loaded {} instruments from {} ({} duplicate symbols)",
            directory.len(),
            path.display(),
            directory.duplicate_symbols()
        );
        Ok(directory)
    }

    pub fn lookup(&self, identifier: &str) -> Option<&str> {
        self.symbols.get(identifier).map(String::as_str)
    }

    pub fn record(&mut self, identifier: &str, symbol: &str) -> Option<String> {
        self.symbols.insert(identifier.to_string(), symbol.to_string())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Seed entries that repeated a symbol already seen under another identifier.
    pub fn duplicate_symbols(&self) -> usize {
        self.duplicate_symbols
    }

    /// Overwrites `path` with the full mapping as a compact JSON object.
    pub fn persist<P: AsRef<Path>>(&self, path: P) -> LedgerResult<()> {
        let path = path.as_ref();
        let to_err = |source: std::io::Error| LedgerError::SnapshotWrite {
            path: path.display().to_string(),
            source,
        };
        let file = File::create(path).map_err(to_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &self.symbols).map_err(|e| to_err(e.into()))?;
        writer.write_all(b"\n").map_err(to_err)?;
        writer.flush().map_err(to_err)?;
        Ok(())
    }
}

/// Owns the directory for the duration of a run and flushes it to `path`
/// when dropped, including while an error unwinds the caller.
pub struct DirectoryGuard {
    directory: InstrumentDirectory,
    path: PathBuf,
}

impl DirectoryGuard {
    pub fn new<P: Into<PathBuf>>(directory: InstrumentDirectory, path: P) -> Self {
        DirectoryGuard {
            directory,
            path: path.into(),
        }
    }
}

impl Deref for DirectoryGuard {
    type Target = InstrumentDirectory;

    fn deref(&self) -> &Self::Target {
        &self.directory
    }
}

impl DerefMut for DirectoryGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.directory
    }
}

impl Drop for DirectoryGuard {
    fn drop(&mut self) {
        match self.directory.persist(&self.path) {
            Ok(_) => info!(
                "Persisted {} instruments to {}",
                self.directory.len(),
                self.path.display()
            ),
            Err(err) => error!("unable to persist instruments: {}", err),
        }
    }
}
