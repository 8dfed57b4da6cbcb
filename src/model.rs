use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifiant attribué par le store à l'insertion d'un document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Collections peuplées par le seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Shifts,
    Events,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Users, Collection::Shifts, Collection::Events];

    pub fn name(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Shifts => "shifts",
            Collection::Events => "events",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Guard,
}

/// Utilisateur de l'application (mot de passe déjà haché).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Événement de calendrier créé par un administrateur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub created_by: DocumentId,
}

/// Poste physique d'affectation. `Free` = pas de garde ce jour-là.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Post {
    #[serde(rename = "REGISTRO")]
    Registro,
    #[serde(rename = "ENTRADA PRINCIPAL")]
    EntradaPrincipal,
    #[serde(rename = "SOTANO")]
    Sotano,
    #[serde(rename = "HALL BANCARIO")]
    HallBancario,
    #[serde(rename = "CUBICULO")]
    Cubiculo,
    #[serde(rename = "ESCLUSA")]
    Esclusa,
    #[serde(rename = "CCTV")]
    Cctv,
    #[serde(rename = "FREE")]
    Free,
}

impl Post {
    /// Postes réels, dans l'ordre de tirage.
    pub const ASSIGNABLE: [Post; 7] = [
        Post::Registro,
        Post::EntradaPrincipal,
        Post::Sotano,
        Post::HallBancario,
        Post::Cubiculo,
        Post::Esclusa,
        Post::Cctv,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Post::Registro => "REGISTRO",
            Post::EntradaPrincipal => "ENTRADA PRINCIPAL",
            Post::Sotano => "SOTANO",
            Post::HallBancario => "HALL BANCARIO",
            Post::Cubiculo => "CUBICULO",
            Post::Esclusa => "ESCLUSA",
            Post::Cctv => "CCTV",
            Post::Free => "FREE",
        }
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Créneau de 8h, ou `Free` associé à `Post::Free`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "00:00-08:00")]
    Night,
    #[serde(rename = "08:00-16:00")]
    Morning,
    #[serde(rename = "16:00-24:00")]
    Evening,
    #[serde(rename = "Free")]
    Free,
}

impl TimeSlot {
    pub const ASSIGNABLE: [TimeSlot; 3] = [TimeSlot::Night, TimeSlot::Morning, TimeSlot::Evening];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeSlot::Night => "00:00-08:00",
            TimeSlot::Morning => "08:00-16:00",
            TimeSlot::Evening => "16:00-24:00",
            TimeSlot::Free => "Free",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Affectation d'un garde pour un jour donné.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    pub guard_id: DocumentId,
    pub date: NaiveDate,
    pub day_of_week: String,
    pub post: Post,
    pub time_slot: TimeSlot,
}

impl ShiftAssignment {
    /// Jour travaillé sur un poste réel.
    pub fn on_duty(
        guard_id: DocumentId,
        date: NaiveDate,
        day_of_week: &str,
        post: Post,
        time_slot: TimeSlot,
    ) -> Self {
        debug_assert!(post != Post::Free && time_slot != TimeSlot::Free);
        Self {
            guard_id,
            date,
            day_of_week: day_of_week.to_owned(),
            post,
            time_slot,
        }
    }

    /// Jour de repos.
    pub fn free(guard_id: DocumentId, date: NaiveDate, day_of_week: &str) -> Self {
        Self {
            guard_id,
            date,
            day_of_week: day_of_week.to_owned(),
            post: Post::Free,
            time_slot: TimeSlot::Free,
        }
    }

    pub fn is_free(&self) -> bool {
        self.post == Post::Free
    }

    /// `FREE` si et seulement si `Free`.
    pub fn is_consistent(&self) -> bool {
        (self.post == Post::Free) == (self.time_slot == TimeSlot::Free)
    }
}
