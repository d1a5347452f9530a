use rust_decimal::Decimal;

pub const MAX_PARTICIPANTS: usize = 5;
pub const MAX_PARTS: i64 = 5;

#[derive(Debug, Clone)]
pub struct ParticipantEntry {
    pub name: String,
    pub parts: i64,
}

#[derive(Debug, Clone)]
pub struct ParticipantShare {
    pub name: String,
    pub parts: i64,
    pub amount_owed: Decimal,
}

/// Parses "Alice:2, Bob" into participant entries. Parts default to 1.
pub fn parse_participants(input: &str) -> Result<Vec<ParticipantEntry>, String> {
    let mut entries = Vec::new();

    for raw in input.split(',') {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        let (name, parts) = match raw.split_once(':') {
            Some((name, parts_str)) => {
                let parts = parts_str.trim().parse::<i64>().map_err(|_| {
                    format!(
                        "Invalid parts '{}' for participant '{}'. Must be a whole number",
                        parts_str.trim(),
                        name.trim()
                    )
                })?;
                (name.trim(), parts)
            }
            None => (raw, 1),
        };

        if name.is_empty() {
            return Err("Participant name cannot be empty".to_string());
        }
        if parts < 1 || parts > MAX_PARTS {
            return Err(format!(
                "Parts for participant '{}' must be between 1 and {}",
                name, MAX_PARTS
            ));
        }

        entries.push(ParticipantEntry {
            name: name.to_string(),
            parts,
        });
    }

    if entries.is_empty() {
        return Err("At least one participant is required".to_string());
    }
    if entries.len() > MAX_PARTICIPANTS {
        return Err(format!(
            "At most {} participants are supported",
            MAX_PARTICIPANTS
        ));
    }

    Ok(entries)
}

pub fn total_parts(participants: &[ParticipantEntry]) -> i64 {
    participants.iter().map(|p| p.parts).sum()
}

/// Weighted split: each share is total * parts / sum(parts). The shares are
/// not reconciled against the total, so repeating decimals leave a sub-cent
/// gap (100 over three equal parts sums to 99.99...).
pub fn split_amount(
    total: Decimal,
    participants: &[ParticipantEntry],
) -> Result<Vec<ParticipantShare>, String> {
    let parts_sum = total_parts(participants);
    if parts_sum < 1 {
        return Err("At least one participant is required".to_string());
    }

    let shares = participants
        .iter()
        .map(|p| ParticipantShare {
            name: p.name.clone(),
            parts: p.parts,
            amount_owed: total * Decimal::from(p.parts) / Decimal::from(parts_sum),
        })
        .collect();

    Ok(shares)
}
