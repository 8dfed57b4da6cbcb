//! Backend MongoDB (feature `mongo`), via l'API synchrone du driver.

use crate::model::{Collection, DocumentId};
use crate::storage::DocumentStore;
use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use mongodb::bson::{self, doc, oid::ObjectId, Bson, Document};
use mongodb::sync::{Client, Database};
use serde_json::Value;
use tracing::debug;

/// URI par défaut quand `MONGODB_URI` n'est pas défini.
pub const DEFAULT_URI: &str = "mongodb://localhost:27017/security_shifts";

/// Base utilisée quand l'URI n'en précise pas.
pub const DEFAULT_DATABASE: &str = "security_shifts";

/// Champs portant l'id d'un autre document.
const REFERENCE_FIELDS: [&str; 2] = ["guard_id", "created_by"];
const DATE_FIELD: &str = "date";

/// Convertit un document JSON en BSON : références en `ObjectId`, `date` en
/// `DateTime` BSON (minuit UTC pour une date seule).
pub fn to_bson_document(value: &Value) -> anyhow::Result<Document> {
    let mut doc = bson::to_document(value).context("converting document to BSON")?;
    for field in REFERENCE_FIELDS {
        let oid = match doc.get(field) {
            Some(Bson::String(raw)) => ObjectId::parse_str(raw).ok(),
            _ => None,
        };
        if let Some(oid) = oid {
            doc.insert(field, Bson::ObjectId(oid));
        }
    }
    let at = match doc.get(DATE_FIELD) {
        Some(Bson::String(raw)) => parse_date(raw),
        _ => None,
    };
    if let Some(at) = at {
        let stamp = bson::DateTime::from_millis(at.timestamp_millis());
        doc.insert(DATE_FIELD, Bson::DateTime(stamp));
    }
    Ok(doc)
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = raw.parse::<DateTime<Utc>>() {
        return Some(at);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn connect(uri: &str) -> anyhow::Result<Self> {
        let client =
            Client::with_uri_str(uri).with_context(|| format!("connecting to {uri}"))?;
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));
        debug!(database = db.name(), "connected to MongoDB");
        Ok(Self { db })
    }

    fn collection(&self, collection: Collection) -> mongodb::sync::Collection<Document> {
        self.db.collection::<Document>(collection.name())
    }
}

impl DocumentStore for MongoStore {
    fn delete_all(&mut self, collection: Collection) -> anyhow::Result<u64> {
        let res = self.collection(collection).delete_many(doc! {}, None)?;
        Ok(res.deleted_count)
    }

    fn insert_many(
        &mut self,
        collection: Collection,
        docs: Vec<Value>,
    ) -> anyhow::Result<Vec<DocumentId>> {
        // le driver refuse un insert_many vide
        if docs.is_empty() {
            return Ok(Vec::new());
        }
        let docs = docs
            .iter()
            .map(to_bson_document)
            .collect::<anyhow::Result<Vec<_>>>()?;
        let res = self.collection(collection).insert_many(docs, None)?;

        let mut ids: Vec<(usize, Bson)> = res.inserted_ids.into_iter().collect();
        ids.sort_by_key(|(idx, _)| *idx);
        Ok(ids
            .into_iter()
            .map(|(_, id)| match id {
                Bson::ObjectId(oid) => DocumentId::new(oid.to_hex()),
                other => DocumentId::new(other.to_string()),
            })
            .collect())
    }

    fn find_all(&self, collection: Collection) -> anyhow::Result<Vec<Value>> {
        let cursor = self.collection(collection).find(None, None)?;
        cursor
            .map(|doc| Ok(Bson::Document(doc?).into_relaxed_extjson()))
            .collect()
    }
}
