use crate::model::{DocumentId, ShiftAssignment};
use csv::WriterBuilder;
use std::collections::HashMap;
use std::path::Path;

/// Export CSV des gardes : header `date,day_of_week,guard,post,time_slot`.
///
/// `names` résout l'id du garde en nom affiché ; à défaut l'id est écrit.
pub fn export_shifts_csv<P: AsRef<Path>>(
    path: P,
    shifts: &[ShiftAssignment],
    names: &HashMap<DocumentId, String>,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["date", "day_of_week", "guard", "post", "time_slot"])?;
    for s in shifts {
        let date = s.date.format("%Y-%m-%d").to_string();
        w.write_record([
            date.as_str(),
            s.day_of_week.as_str(),
            guard_label(&s.guard_id, names),
            s.post.as_str(),
            s.time_slot.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Ligne compacte pour l'affichage console.
pub fn shift_line(shift: &ShiftAssignment, names: &HashMap<DocumentId, String>) -> String {
    format!(
        "{} {:<9} | {:<16} | {:<17} | {}",
        shift.date,
        shift.day_of_week,
        guard_label(&shift.guard_id, names),
        shift.post,
        shift.time_slot
    )
}

fn guard_label<'a>(id: &'a DocumentId, names: &'a HashMap<DocumentId, String>) -> &'a str {
    names.get(id).map(String::as_str).unwrap_or(id.as_str())
}
