//! Données de démonstration fixes : comptes et événements.
//!
//! Les mots de passe sont volontairement faibles ; ces données ne servent
//! qu'aux démos et aux tests.

use crate::error::SeedError;
use crate::model::{DocumentId, Event, Role, User};
use crate::password::hash_password;
use chrono::{DateTime, Duration, Utc};

pub const ADMIN_EMAIL: &str = "admin@security.com";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const GUARD_PASSWORD: &str = "guard123";

const ADMIN_NAME: &str = "Administrador del Sistema";

const GUARDS: [(&str, &str); 5] = [
    ("Juan Pérez", "juan.perez@security.com"),
    ("María López", "maria.lopez@security.com"),
    ("Carlos García", "carlos.garcia@security.com"),
    ("Ana Fernández", "ana.fernandez@security.com"),
    ("Luis Rodríguez", "luis.rodriguez@security.com"),
];

/// (titre, décalage en jours, description)
const EVENTS: [(&str, i64, &str); 3] = [
    (
        "Capacitación en Seguridad",
        7,
        "Capacitación mensual obligatoria para todo el personal de seguridad",
    ),
    (
        "Simulacro de Emergencia",
        14,
        "Simulacro de evacuación y procedimientos de emergencia",
    ),
    (
        "Reunión Mensual",
        21,
        "Reunión mensual de coordinación y revisión de procedimientos",
    ),
];

#[derive(Debug, Clone)]
pub struct DemoUsers {
    pub admin: User,
    pub guards: Vec<User>,
}

pub fn demo_users(cost: u32) -> Result<DemoUsers, SeedError> {
    let admin = User {
        name: ADMIN_NAME.to_string(),
        email: ADMIN_EMAIL.to_string(),
        password: hash_password(ADMIN_PASSWORD, cost)?,
        role: Role::Admin,
    };
    let guards = GUARDS
        .iter()
        .map(|(name, email)| {
            Ok(User {
                name: (*name).to_string(),
                email: (*email).to_string(),
                password: hash_password(GUARD_PASSWORD, cost)?,
                role: Role::Guard,
            })
        })
        .collect::<Result<Vec<_>, SeedError>>()?;
    Ok(DemoUsers { admin, guards })
}

/// Noms des gardes de démonstration, dans l'ordre d'insertion.
pub fn guard_names() -> impl Iterator<Item = &'static str> {
    GUARDS.iter().map(|(name, _)| *name)
}

pub fn demo_events(created_by: &DocumentId, now: DateTime<Utc>) -> Vec<Event> {
    EVENTS
        .iter()
        .map(|(title, days, description)| Event {
            title: (*title).to_string(),
            date: now + Duration::days(*days),
            description: (*description).to_string(),
            created_by: created_by.clone(),
        })
        .collect()
}
