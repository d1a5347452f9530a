use crate::db::expense_repository;
use crate::models::expense::{Expense, ExpenseParticipant};
use crate::operations::split;
use chrono::{NaiveDate, Utc};
use rusqlite::Connection;
use rust_decimal::Decimal;
use uuid::Uuid;

fn parse_expense_details(details: &str) -> Result<(String, Decimal, String, NaiveDate), String> {
    let detail_parts: Vec<&str> = details.split(',').map(|s| s.trim()).collect();
    if detail_parts.len() != 4 {
        return Err(format!(
            "Invalid number of details provided. Expected 4 details separated by commas but got {}",
            detail_parts.len()
        ));
    }

    let description = detail_parts[0].to_string();
    if description.is_empty() {
        return Err("Description cannot be empty".to_string());
    }
    if description.len() > 255 {
        return Err("Description too long".to_string());
    }

    let amount = detail_parts[1].parse::<Decimal>().map_err(|_| {
        format!(
            "Invalid amount format {}. Please provide a valid decimal number.",
            detail_parts[1]
        )
    })?;
    if amount <= Decimal::ZERO {
        return Err("Amount must be greater than zero".to_string());
    }

    let category = detail_parts[2].to_string();
    if category.is_empty() {
        return Err("Category cannot be empty".to_string());
    }
    if category.len() > 50 {
        return Err("Category too long".to_string());
    }

    let date = NaiveDate::parse_from_str(detail_parts[3], "%Y-%m-%d")
        .map_err(|_| "Invalid date format. Please use YYYY-MM-DD.".to_string())?;

    Ok((description, amount, category, date))
}

/// Builds an unsplit expense from "description, amount, category, date".
pub fn create_expense(user_id: &str, details: &str) -> Result<Expense, String> {
    let (description, amount, category, date) = parse_expense_details(details)?;
    let now = Utc::now().to_rfc3339();

    Ok(Expense {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        description,
        amount,
        category,
        date,
        is_split: false,
        split_parts: 1,
        created_at: now.clone(),
        updated_at: now,
    })
}

/// Stores a new expense; a non-empty participants line ("Alice:2, Bob")
/// splits it, writing one participant row per entry after the parent.
pub fn add_expense_db(
    conn: &Connection,
    user_id: &str,
    details: &str,
    participants_input: &str,
) -> Result<Expense, String> {
    let mut expense = create_expense(user_id, details)?;

    let participants_input = participants_input.trim();
    if participants_input.is_empty() {
        expense_repository::add_expense(conn, &expense)?;
        return Ok(expense);
    }

    let entries = split::parse_participants(participants_input)?;
    let shares = split::split_amount(expense.amount, &entries)?;
    expense.is_split = true;
    expense.split_parts = split::total_parts(&entries);

    expense_repository::add_expense(conn, &expense)?;
    for share in shares {
        let participant = ExpenseParticipant {
            id: Uuid::new_v4().to_string(),
            expense_id: expense.id.clone(),
            name: share.name,
            parts: share.parts,
            amount_owed: share.amount_owed,
            is_paid: false,
            created_at: Utc::now().to_rfc3339(),
        };
        expense_repository::add_expense_participant(conn, &participant)?;
    }

    Ok(expense)
}

pub fn edit_expense_db(conn: &Connection, id: &str, details: &str) -> Result<(), String> {
    let id = id.trim();
    if id.is_empty() {
        return Err("Expense ID cannot be empty".to_string());
    }

    let (description, amount, category, date) = parse_expense_details(details)?;
    expense_repository::update_expense(
        conn,
        id,
        &description,
        amount,
        &category,
        date,
        &Utc::now().to_rfc3339(),
    )
}

pub fn remove_expense_db(conn: &Connection, id: &str) -> Result<(), String> {
    let id = id.trim();
    if id.is_empty() {
        return Err("Expense ID cannot be empty".to_string());
    }
    expense_repository::remove_expense(conn, id)
}

/// Flips a participant's settled flag; returns the new state.
pub fn toggle_expense_share_db(
    conn: &Connection,
    expense_id: &str,
    participant_name: &str,
) -> Result<bool, String> {
    let expense_id = expense_id.trim();
    if expense_id.is_empty() {
        return Err("Expense ID cannot be empty".to_string());
    }

    let participants = expense_repository::get_participants_for_expense(conn, expense_id)?;
    let participant = participants
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(participant_name.trim()))
        .ok_or_else(|| {
            format!(
                "Participant '{}' not found for expense {}",
                participant_name.trim(),
                expense_id
            )
        })?;

    let new_state = !participant.is_paid;
    expense_repository::set_expense_participant_paid(conn, &participant.id, new_state)?;
    Ok(new_state)
}
