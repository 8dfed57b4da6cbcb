use crate::model::{Collection, DocumentId};
use anyhow::{bail, Context};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Champ portant l'identifiant d'un document stocké.
pub const ID_FIELD: &str = "_id";

/// Base documentaire minimale vue par le seed.
pub trait DocumentStore {
    /// Supprime tous les documents d'une collection ; renvoie le nombre supprimé.
    fn delete_all(&mut self, collection: Collection) -> anyhow::Result<u64>;
    /// Insère en bloc ; les ids sont renvoyés dans l'ordre des documents.
    fn insert_many(
        &mut self,
        collection: Collection,
        docs: Vec<Value>,
    ) -> anyhow::Result<Vec<DocumentId>>;
    fn find_all(&self, collection: Collection) -> anyhow::Result<Vec<Value>>;
}

fn with_id(doc: Value, id: &DocumentId) -> anyhow::Result<Value> {
    let Value::Object(mut map) = doc else {
        bail!("document must be a JSON object");
    };
    map.insert(ID_FIELD.to_string(), Value::String(id.as_str().to_string()));
    Ok(Value::Object(map))
}

/// Store fichiers : un tableau JSON par collection dans `dir`.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn open<P: AsRef<Path>>(dir: P) -> anyhow::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).with_context(|| format!("creating store {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn collection_path(&self, collection: Collection) -> PathBuf {
        self.dir.join(format!("{}.json", collection.name()))
    }

    fn load(&self, collection: Collection) -> anyhow::Result<Vec<Value>> {
        let path = self.collection_path(collection);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
        let docs: Vec<Value> = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(docs)
    }

    /// Sauvegarde atomique (fichier temporaire + rename).
    fn save(&self, collection: Collection, docs: &[Value]) -> anyhow::Result<()> {
        let path = self.collection_path(collection);
        let json = serde_json::to_vec_pretty(docs)?;
        let mut tmp = NamedTempFile::new_in(&self.dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).with_context(|| "atomic rename")?;
        Ok(())
    }
}

impl DocumentStore for JsonStore {
    fn delete_all(&mut self, collection: Collection) -> anyhow::Result<u64> {
        let removed = self.load(collection)?.len() as u64;
        self.save(collection, &[])?;
        debug!(%collection, removed, "collection cleared");
        Ok(removed)
    }

    fn insert_many(
        &mut self,
        collection: Collection,
        docs: Vec<Value>,
    ) -> anyhow::Result<Vec<DocumentId>> {
        let mut existing = self.load(collection)?;
        let mut ids = Vec::with_capacity(docs.len());
        for doc in docs {
            let id = DocumentId::random();
            existing.push(with_id(doc, &id)?);
            ids.push(id);
        }
        self.save(collection, &existing)?;
        debug!(%collection, inserted = ids.len(), "documents inserted");
        Ok(ids)
    }

    fn find_all(&self, collection: Collection) -> anyhow::Result<Vec<Value>> {
        self.load(collection)
    }
}

/// Store en mémoire (dry-run, tests).
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: HashMap<Collection, Vec<Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self, collection: Collection) -> usize {
        self.collections.get(&collection).map_or(0, Vec::len)
    }
}

impl DocumentStore for MemoryStore {
    fn delete_all(&mut self, collection: Collection) -> anyhow::Result<u64> {
        let removed = self
            .collections
            .remove(&collection)
            .map_or(0, |docs| docs.len() as u64);
        Ok(removed)
    }

    fn insert_many(
        &mut self,
        collection: Collection,
        docs: Vec<Value>,
    ) -> anyhow::Result<Vec<DocumentId>> {
        let target = self.collections.entry(collection).or_default();
        let mut ids = Vec::with_capacity(docs.len());
        for doc in docs {
            let id = DocumentId::random();
            target.push(with_id(doc, &id)?);
            ids.push(id);
        }
        Ok(ids)
    }

    fn find_all(&self, collection: Collection) -> anyhow::Result<Vec<Value>> {
        Ok(self.collections.get(&collection).cloned().unwrap_or_default())
    }
}
