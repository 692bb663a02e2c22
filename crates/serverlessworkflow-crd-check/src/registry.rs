//! Discovers CRD schema and example CR files and pairs them by resource
//! type.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use snafu::{ResultExt, Snafu, ensure};
use tracing::debug;

use crate::{
    filename::{self, Classification},
    schema::{self, CompiledSchema},
};

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to resolve root directory {path:?}"))]
    ResolveRoot {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("failed to read directory {path:?}"))]
    ReadDirectory {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("failed to read an entry of directory {path:?}"))]
    ReadDirectoryEntry {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("failed to classify file {path:?}"))]
    ClassifyFile {
        source: filename::Error,
        path: PathBuf,
    },

    #[snafu(transparent)]
    LoadSchema { source: schema::Error },

    #[snafu(display("no CRD schema or example CR files found under {path:?}"))]
    NothingDiscovered { path: PathBuf },
}

/// The files discovered for one resource type, together with the compiled
/// schema of its CRD.
///
/// A pair is created as soon as either file is seen and filled in as the
/// walk proceeds, so a half-filled pair after discovery means the deploy
/// tree is missing a file. That is reported per pair during validation, not
/// during discovery.
#[derive(Debug, Default)]
pub struct ValidationPair {
    /// Path of the `<prefix>_<type>_crd.yaml` file.
    pub schema_file: Option<PathBuf>,

    /// Path of the `<prefix>_<group>_<type>_cr.yaml` file.
    pub example_file: Option<PathBuf>,

    /// The schema compiled from [`Self::schema_file`], loaded eagerly when
    /// the file is discovered.
    pub schema: Option<CompiledSchema>,
}

/// All CRD/CR pairs discovered under one root directory, keyed by resource
/// type.
//
// An ordered map keeps iteration, and with it reporting, deterministic
// regardless of the filesystem iteration order of the walk.
#[derive(Debug, Default)]
pub struct Registry {
    pairs: BTreeMap<String, ValidationPair>,
}

impl Registry {
    pub fn get(&self, key: &str) -> Option<&ValidationPair> {
        self.pairs.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationPair)> {
        self.pairs.iter().map(|(key, pair)| (key.as_str(), pair))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn entry(&mut self, key: String) -> &mut ValidationPair {
        self.pairs.entry(key).or_default()
    }
}

/// Walks `root` recursively and builds the registry of CRD/CR pairs.
///
/// Every CRD schema file is compiled while walking, so a broken schema
/// surfaces here and not during validation. Any traversal error, malformed
/// file name, unloadable schema, or a walk that discovers nothing at all
/// aborts the run.
pub fn discover(root: impl AsRef<Path>) -> Result<Registry> {
    let root = root.as_ref();
    let root = root.canonicalize().context(ResolveRootSnafu { path: root })?;

    let mut registry = Registry::default();
    walk(&root, &mut registry)?;

    ensure!(!registry.is_empty(), NothingDiscoveredSnafu { path: root });

    debug!(
        root = %root.display(),
        resource_types = registry.len(),
        "discovered CRD/CR pairs"
    );
    Ok(registry)
}

fn walk(dir: &Path, registry: &mut Registry) -> Result<()> {
    for entry in std::fs::read_dir(dir).context(ReadDirectorySnafu { path: dir })? {
        let entry = entry.context(ReadDirectoryEntrySnafu { path: dir })?;
        let file_type = entry
            .file_type()
            .context(ReadDirectoryEntrySnafu { path: dir })?;
        let path = entry.path();

        if file_type.is_dir() {
            walk(&path, registry)?;
            continue;
        }

        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();

        match filename::classify(&file_name).context(ClassifyFileSnafu { path: &path })? {
            Classification::Schema { key } => {
                let schema = CompiledSchema::from_file(&path)?;
                let pair = registry.entry(key);
                pair.schema = Some(schema);
                pair.schema_file = Some(path);
            }
            Classification::Example { key } => {
                registry.entry(key).example_file = Some(path);
            }
            Classification::Unrecognized => {
                debug!(path = %path.display(), "skipping file without CRD or CR suffix");
            }
        }
    }

    Ok(())
}
