use crate::error::SeedError;
use crate::fixtures::{self, ADMIN_EMAIL, ADMIN_PASSWORD, GUARD_PASSWORD};
use crate::generator::generate_shifts;
use crate::model::{Collection, DocumentId, ShiftAssignment, User};
use crate::password::SEED_COST;
use crate::storage::DocumentStore;
use chrono::{DateTime, Local, NaiveDate, Utc};
use rand::Rng;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

/// Paramètres d'une exécution du seed.
#[derive(Debug, Clone, Copy)]
pub struct SeedOptions {
    /// Mois pour lequel les gardes sont générées.
    pub reference_date: NaiveDate,
    /// Origine des dates d'événements.
    pub now: DateTime<Utc>,
    pub bcrypt_cost: u32,
}

impl SeedOptions {
    /// Mois courant pris en heure locale, comme l'affiche l'application.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            reference_date: now.with_timezone(&Local).date_naive(),
            now,
            bcrypt_cost: SEED_COST,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeedReport {
    pub cleared: u64,
    pub admin_id: DocumentId,
    pub guards: Vec<(DocumentId, User)>,
    pub shifts: Vec<ShiftAssignment>,
    pub events: usize,
}

impl SeedReport {
    pub fn users(&self) -> usize {
        self.guards.len() + 1
    }

    pub fn guard_ids(&self) -> Vec<DocumentId> {
        self.guards.iter().map(|(id, _)| id.clone()).collect()
    }

    pub fn credentials_summary(&self) -> String {
        format!(
            "Credentials:\n  Admin: {ADMIN_EMAIL} / {ADMIN_PASSWORD}\n  Guards: <name>@security.com / {GUARD_PASSWORD}\n"
        )
    }
}

/// Enchaîne vidage, utilisateurs, gardes puis événements.
#[derive(Debug, Clone)]
pub struct Seeder {
    opts: SeedOptions,
}

impl Seeder {
    pub fn new(opts: SeedOptions) -> Self {
        Self { opts }
    }

    pub fn run<S, R>(&self, store: &mut S, rng: &mut R) -> Result<SeedReport, SeedError>
    where
        S: DocumentStore + ?Sized,
        R: Rng + ?Sized,
    {
        let cleared = clear(store)?;

        let users = fixtures::demo_users(self.opts.bcrypt_cost)?;
        let admin_id = insert(store, Collection::Users, std::slice::from_ref(&users.admin))?
            .pop()
            .ok_or(SeedError::IdCount {
                collection: Collection::Users,
                expected: 1,
                got: 0,
            })?;
        let guard_ids = insert(store, Collection::Users, &users.guards)?;
        info!(admin = %admin_id, guards = guard_ids.len(), "users created");

        let shifts = generate_shifts(&guard_ids, self.opts.reference_date, rng)?;
        insert(store, Collection::Shifts, &shifts)?;
        info!(
            count = shifts.len(),
            month = %self.opts.reference_date.format("%Y-%m"),
            "shifts created"
        );

        let events = fixtures::demo_events(&admin_id, self.opts.now);
        insert(store, Collection::Events, &events)?;
        info!(count = events.len(), "events created");

        Ok(SeedReport {
            cleared,
            admin_id,
            guards: guard_ids.into_iter().zip(users.guards).collect(),
            shifts,
            events: events.len(),
        })
    }
}

/// Vide les trois collections ; renvoie le total supprimé.
pub fn clear<S: DocumentStore + ?Sized>(store: &mut S) -> Result<u64, SeedError> {
    let mut removed = 0;
    for collection in Collection::ALL {
        removed += store
            .delete_all(collection)
            .map_err(|e| SeedError::store(collection, e))?;
    }
    info!(removed, "database cleared");
    Ok(removed)
}

fn insert<S, T>(store: &mut S, collection: Collection, items: &[T]) -> Result<Vec<DocumentId>, SeedError>
where
    S: DocumentStore + ?Sized,
    T: Serialize,
{
    let docs = items
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<Value>, _>>()?;
    let ids = store
        .insert_many(collection, docs)
        .map_err(|e| SeedError::store(collection, e))?;
    if ids.len() != items.len() {
        return Err(SeedError::IdCount {
            collection,
            expected: items.len(),
            got: ids.len(),
        });
    }
    Ok(ids)
}
