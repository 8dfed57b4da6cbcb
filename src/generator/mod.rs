mod calendar;

pub use calendar::{day_of_week, month_bounds, parse_reference_date, WEEKDAY_NAMES};

use crate::error::SeedError;
use crate::model::{DocumentId, Post, ShiftAssignment, TimeSlot};
use chrono::NaiveDate;
use rand::Rng;
use tracing::debug;

/// Un tirage strictement supérieur à ce seuil donne un jour travaillé (~70 %).
pub const FREE_DAY_THRESHOLD: f64 = 0.3;

/// Génère une affectation par garde et par jour du mois de `reference`.
///
/// Ordre de sortie : jours croissants, puis gardes dans l'ordre fourni.
/// Poste et créneau sont tirés indépendamment, uniformément.
pub fn generate_shifts<R: Rng + ?Sized>(
    guards: &[DocumentId],
    reference: NaiveDate,
    rng: &mut R,
) -> Result<Vec<ShiftAssignment>, SeedError> {
    let (first, last) = month_bounds(reference)?;
    let days = (last - first).num_days() as usize + 1;
    let mut out = Vec::with_capacity(days * guards.len());

    for date in first.iter_days().take(days) {
        let weekday = day_of_week(date);
        for guard in guards {
            out.push(draw_assignment(guard, date, weekday, rng));
        }
    }

    debug!(
        guards = guards.len(),
        days,
        total = out.len(),
        month = %first.format("%Y-%m"),
        "shifts generated"
    );
    Ok(out)
}

fn draw_assignment<R: Rng + ?Sized>(
    guard: &DocumentId,
    date: NaiveDate,
    weekday: &str,
    rng: &mut R,
) -> ShiftAssignment {
    let has_shift = rng.random::<f64>() > FREE_DAY_THRESHOLD;
    if !has_shift {
        return ShiftAssignment::free(guard.clone(), date, weekday);
    }
    let post = Post::ASSIGNABLE[rng.random_range(0..Post::ASSIGNABLE.len())];
    let slot = TimeSlot::ASSIGNABLE[rng.random_range(0..TimeSlot::ASSIGNABLE.len())];
    ShiftAssignment::on_duty(guard.clone(), date, weekday, post, slot)
}
