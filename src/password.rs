use crate::error::SeedError;
use bcrypt::{hash, verify};

/// Coût bcrypt utilisé pour les comptes de démonstration.
pub const SEED_COST: u32 = 10;

pub fn hash_password(password: &str, cost: u32) -> Result<String, SeedError> {
    Ok(hash(password, cost)?)
}

pub fn verify_password(password: &str, hashed: &str) -> Result<bool, SeedError> {
    Ok(verify(password, hashed)?)
}
