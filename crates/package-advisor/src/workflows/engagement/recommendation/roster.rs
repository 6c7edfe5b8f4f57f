use std::io::Read;

use serde::Deserialize;

use super::validation::EscalationContact;

/// Errors raised while loading a contact roster override.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to parse contact roster: {0}")]
    Csv(#[from] csv::Error),
    #[error("contact roster has no usable rows")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Region")]
    region: String,
    #[serde(rename = "Name")]
    name: String,
}

/// Parse an escalation roster from a `Region,Name` CSV export.
///
/// Rows missing either field are skipped; a roster with no usable rows is
/// rejected so a bad export cannot silently erase the contact list.
pub fn contacts_from_reader<R: Read>(reader: R) -> Result<Vec<EscalationContact>, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut contacts = Vec::new();
    for row in csv_reader.deserialize::<RosterRow>() {
        let row = row?;
        if row.region.is_empty() || row.name.is_empty() {
            continue;
        }
        contacts.push(EscalationContact {
            region: row.region,
            name: row.name,
        });
    }

    if contacts.is_empty() {
        return Err(RosterError::Empty);
    }
    Ok(contacts)
}
