#![forbid(unsafe_code)]
//! Gardiennage — seed d'une base de démonstration de planning de gardes.
//!
//! - Comptes fixes (admin + gardes), mots de passe bcrypt.
//! - Une affectation par garde et par jour du mois courant (~70 % travaillés).
//! - Événements de calendrier à J+7, J+14, J+21.
//! - Store documentaire abstrait (fichiers JSON, mémoire, MongoDB en option).

pub mod error;
pub mod fixtures;
pub mod generator;
pub mod io;
#[cfg(feature = "mongo")]
pub mod mongo;
pub mod model;
pub mod password;
pub mod seed;
pub mod storage;

pub use error::SeedError;
pub use generator::{generate_shifts, parse_reference_date};
pub use model::{Collection, DocumentId, Event, Post, Role, ShiftAssignment, TimeSlot, User};
pub use seed::{clear, SeedOptions, SeedReport, Seeder};
pub use storage::{DocumentStore, JsonStore, MemoryStore};
