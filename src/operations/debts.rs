use crate::db::debt_repository;
use crate::models::debt::{Debt, DebtParticipant};
use crate::operations::split;
use chrono::{NaiveDate, Utc};
use rusqlite::Connection;
use rust_decimal::Decimal;
use uuid::Uuid;

fn parse_debt_details(
    details: &str,
) -> Result<(String, Decimal, Decimal, Option<NaiveDate>), String> {
    let detail_parts: Vec<&str> = details.split(',').map(|s| s.trim()).collect();
    if detail_parts.len() < 3 || detail_parts.len() > 4 {
        return Err(format!(
            "Invalid number of details provided. Expected 3 or 4 details separated by commas but got {}",
            detail_parts.len()
        ));
    }

    let name = detail_parts[0].to_string();
    if name.is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.len() > 100 {
        return Err("Name too long".to_string());
    }

    let total_amount = detail_parts[1].parse::<Decimal>().map_err(|_| {
        format!(
            "Invalid total amount format {}. Please provide a valid decimal number.",
            detail_parts[1]
        )
    })?;
    if total_amount <= Decimal::ZERO {
        return Err("Total amount must be greater than zero".to_string());
    }

    let paid_amount = detail_parts[2].parse::<Decimal>().map_err(|_| {
        format!(
            "Invalid paid amount format {}. Please provide a valid decimal number.",
            detail_parts[2]
        )
    })?;
    if paid_amount < Decimal::ZERO {
        return Err("Paid amount cannot be negative".to_string());
    }
    if paid_amount > total_amount {
        return Err("Paid amount cannot exceed total amount".to_string());
    }

    // The due date is optional; "-" or omission leaves it unset.
    let due_date = match detail_parts.get(3) {
        Some(raw) if !raw.is_empty() && *raw != "-" => Some(
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| "Invalid date format. Please use YYYY-MM-DD.".to_string())?,
        ),
        _ => None,
    };

    Ok((name, total_amount, paid_amount, due_date))
}

/// Stores a new debt from "name, total, paid[, due date]"; a non-empty
/// participants line splits the total across them.
pub fn add_debt_db(
    conn: &Connection,
    user_id: &str,
    details: &str,
    participants_input: &str,
) -> Result<Debt, String> {
    let (name, total_amount, paid_amount, due_date) = parse_debt_details(details)?;
    let now = Utc::now().to_rfc3339();

    let mut debt = Debt {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        name,
        total_amount,
        paid_amount,
        due_date,
        is_split: false,
        split_parts: 1,
        is_paid: paid_amount >= total_amount,
        created_at: now.clone(),
        updated_at: now,
    };

    let participants_input = participants_input.trim();
    if participants_input.is_empty() {
        debt_repository::add_debt(conn, &debt)?;
        return Ok(debt);
    }

    let entries = split::parse_participants(participants_input)?;
    let shares = split::split_amount(debt.total_amount, &entries)?;
    debt.is_split = true;
    debt.split_parts = split::total_parts(&entries);

    debt_repository::add_debt(conn, &debt)?;
    for share in shares {
        let participant = DebtParticipant {
            id: Uuid::new_v4().to_string(),
            debt_id: debt.id.clone(),
            name: share.name,
            parts: share.parts,
            amount_owed: share.amount_owed,
            is_paid: false,
            created_at: Utc::now().to_rfc3339(),
        };
        debt_repository::add_debt_participant(conn, &participant)?;
    }

    Ok(debt)
}

pub fn edit_debt_db(conn: &Connection, id: &str, details: &str) -> Result<(), String> {
    let id = id.trim();
    if id.is_empty() {
        return Err("Debt ID cannot be empty".to_string());
    }

    let (name, total_amount, paid_amount, due_date) = parse_debt_details(details)?;
    debt_repository::update_debt(
        conn,
        id,
        &name,
        total_amount,
        paid_amount,
        due_date,
        paid_amount >= total_amount,
        &Utc::now().to_rfc3339(),
    )
}

pub fn remove_debt_db(conn: &Connection, id: &str) -> Result<(), String> {
    let id = id.trim();
    if id.is_empty() {
        return Err("Debt ID cannot be empty".to_string());
    }
    debt_repository::remove_debt(conn, id)
}

/// Flips a participant's settled flag; returns the new state.
pub fn toggle_debt_share_db(
    conn: &Connection,
    debt_id: &str,
    participant_name: &str,
) -> Result<bool, String> {
    let debt_id = debt_id.trim();
    if debt_id.is_empty() {
        return Err("Debt ID cannot be empty".to_string());
    }

    let participants = debt_repository::get_participants_for_debt(conn, debt_id)?;
    let participant = participants
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(participant_name.trim()))
        .ok_or_else(|| {
            format!(
                "Participant '{}' not found for debt {}",
                participant_name.trim(),
                debt_id
            )
        })?;

    let new_state = !participant.is_paid;
    debt_repository::set_debt_participant_paid(conn, &participant.id, new_state)?;
    Ok(new_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::establish_test_connection;
    use std::str::FromStr;

    #[test]
    fn test_add_debt_simple() {
        let conn = establish_test_connection().unwrap();

        let debt = add_debt_db(&conn, "local", "Car loan, 5000, 1200, 2025-12-01", "").unwrap();
        assert!(!debt.is_paid);
        assert_eq!(debt.due_date, Some(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()));

        let debts = debt_repository::get_all_debts(&conn, "local").unwrap();
        assert_eq!(debts.len(), 1);
        assert_eq!(debts[0].total_amount, Decimal::from_str("5000").unwrap());
    }

    #[test]
    fn test_add_debt_without_due_date() {
        let conn = establish_test_connection().unwrap();

        let with_dash = add_debt_db(&conn, "local", "Loan A, 100, 0, -", "").unwrap();
        let omitted = add_debt_db(&conn, "local", "Loan B, 100, 0", "").unwrap();

        assert!(with_dash.due_date.is_none());
        assert!(omitted.due_date.is_none());
    }

    #[test]
    fn test_add_debt_fully_paid_at_creation() {
        let conn = establish_test_connection().unwrap();

        let debt = add_debt_db(&conn, "local", "Settled, 300, 300", "").unwrap();
        assert!(debt.is_paid);
    }

    #[test]
    fn test_add_debt_paid_exceeds_total() {
        let conn = establish_test_connection().unwrap();

        let result = add_debt_db(&conn, "local", "Loan, 100, 150", "");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cannot exceed total"));
    }

    #[test]
    fn test_add_debt_invalid_total() {
        let conn = establish_test_connection().unwrap();

        let result = add_debt_db(&conn, "local", "Loan, lots, 0", "");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid total amount"));
    }

    #[test]
    fn test_add_debt_split_writes_participants() {
        let conn = establish_test_connection().unwrap();

        let debt = add_debt_db(&conn, "local", "Trip, 900, 0", "Alice:1, Bob:2").unwrap();
        assert!(debt.is_split);
        assert_eq!(debt.split_parts, 3);

        let participants = debt_repository::get_participants_for_debt(&conn, &debt.id).unwrap();
        assert_eq!(participants.len(), 2);

        let alice = participants.iter().find(|p| p.name == "Alice").unwrap();
        let bob = participants.iter().find(|p| p.name == "Bob").unwrap();
        assert_eq!(alice.amount_owed, Decimal::from_str("300").unwrap());
        assert_eq!(bob.amount_owed, Decimal::from_str("600").unwrap());
    }

    #[test]
    fn test_edit_debt_recomputes_is_paid() {
        let conn = establish_test_connection().unwrap();
        let debt = add_debt_db(&conn, "local", "Car loan, 5000, 1200", "").unwrap();

        edit_debt_db(&conn, &debt.id, "Car loan, 5000, 5000").unwrap();

        let debts = debt_repository::get_all_debts(&conn, "local").unwrap();
        assert!(debts[0].is_paid);
    }

    #[test]
    fn test_edit_debt_not_found() {
        let conn = establish_test_connection().unwrap();

        let result = edit_debt_db(&conn, "missing-id", "Loan, 100, 0");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not found"));
    }

    #[test]
    fn test_remove_debt_empty_id() {
        let conn = establish_test_connection().unwrap();

        let result = remove_debt_db(&conn, "");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cannot be empty"));
    }

    #[test]
    fn test_toggle_debt_share() {
        let conn = establish_test_connection().unwrap();
        let debt = add_debt_db(&conn, "local", "Trip, 900, 0", "Alice, Bob").unwrap();

        let state = toggle_debt_share_db(&conn, &debt.id, "Bob").unwrap();
        assert!(state);

        let participants = debt_repository::get_participants_for_debt(&conn, &debt.id).unwrap();
        let bob = participants.iter().find(|p| p.name == "Bob").unwrap();
        assert!(bob.is_paid);
    }
}
