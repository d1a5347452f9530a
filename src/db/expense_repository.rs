use crate::models::expense::{Expense, ExpenseParticipant};
use chrono::NaiveDate;
use rusqlite::{Connection, Row};
use rust_decimal::Decimal;
use std::str::FromStr;

fn map_expense_row(row: &Row) -> rusqlite::Result<Expense> {
    let amount_str: String = row.get(3)?;
    let date_str: String = row.get(5)?;

    Ok(Expense {
        id: row.get(0)?,
        user_id: row.get(1)?,
        description: row.get(2)?,
        amount: Decimal::from_str(&amount_str)
            .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
        category: row.get(4)?,
        date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
        is_split: row.get(6)?,
        split_parts: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

fn map_participant_row(row: &Row) -> rusqlite::Result<ExpenseParticipant> {
    let amount_str: String = row.get(4)?;

    Ok(ExpenseParticipant {
        id: row.get(0)?,
        expense_id: row.get(1)?,
        name: row.get(2)?,
        parts: row.get(3)?,
        amount_owed: Decimal::from_str(&amount_str)
            .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
        is_paid: row.get(5)?,
        created_at: row.get(6)?,
    })
}

pub fn add_expense(conn: &Connection, expense: &Expense) -> Result<(), String> {
    conn.execute(
        "INSERT INTO expenses (id, user_id, description, amount, category, date, is_split, split_parts, created_at, updated_at) \n             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        rusqlite::params![
            &expense.id,
            &expense.user_id,
            &expense.description,
            expense.amount.to_string(),
            &expense.category,
            expense.date.to_string(),
            expense.is_split,
            expense.split_parts,
            &expense.created_at,
            &expense.updated_at,
        ],
    )
    .map_err(|e| format!("Failed to insert expense: {}", e))?;

    Ok(())
}

pub fn get_all_expenses(conn: &Connection, user_id: &str) -> Result<Vec<Expense>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, user_id, description, amount, category, date, is_split, split_parts, created_at, updated_at \n             FROM expenses WHERE user_id = ?1 ORDER BY date DESC",
        )
        .map_err(|e| format!("Failed to prepare statement: {}", e))?;

    let expense_iter = stmt
        .query_map([user_id], map_expense_row)
        .map_err(|e| format!("Failed to query expenses: {}", e))?;

    let mut expenses = Vec::new();
    for expense in expense_iter {
        expenses.push(expense.map_err(|e| format!("Failed to parse expense: {}", e))?);
    }

    Ok(expenses)
}

pub fn update_expense(
    conn: &Connection,
    id: &str,
    description: &str,
    amount: Decimal,
    category: &str,
    date: NaiveDate,
    updated_at: &str,
) -> Result<(), String> {
    let rows_affected = conn
        .execute(
            "UPDATE expenses SET description = ?1, amount = ?2, category = ?3, date = ?4, updated_at = ?5 WHERE id = ?6",
            rusqlite::params![
                description,
                amount.to_string(),
                category,
                date.to_string(),
                updated_at,
                id,
            ],
        )
        .map_err(|e| format!("Failed to update expense: {}", e))?;

    if rows_affected == 0 {
        return Err(format!("Expense with ID {} not found", id));
    }

    Ok(())
}

pub fn remove_expense(conn: &Connection, id: &str) -> Result<(), String> {
    let rows_affected = conn
        .execute("DELETE FROM expenses WHERE id = ?1", [id])
        .map_err(|e| format!("Failed to delete expense: {}", e))?;

    if rows_affected == 0 {
        return Err(format!("Expense with ID {} not found", id));
    }

    conn.execute(
        "DELETE FROM expense_participants WHERE expense_id = ?1",
        [id],
    )
    .map_err(|e| format!("Failed to delete expense participants: {}", e))?;

    Ok(())
}

pub fn add_expense_participant(
    conn: &Connection,
    participant: &ExpenseParticipant,
) -> Result<(), String> {
    conn.execute(
        "INSERT INTO expense_participants (id, expense_id, name, parts, amount_owed, is_paid, created_at) \n             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        rusqlite::params![
            &participant.id,
            &participant.expense_id,
            &participant.name,
            participant.parts,
            participant.amount_owed.to_string(),
            participant.is_paid,
            &participant.created_at,
        ],
    )
    .map_err(|e| format!("Failed to insert expense participant: {}", e))?;

    Ok(())
}

pub fn get_participants_for_expense(
    conn: &Connection,
    expense_id: &str,
) -> Result<Vec<ExpenseParticipant>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, expense_id, name, parts, amount_owed, is_paid, created_at \n             FROM expense_participants WHERE expense_id = ?1",
        )
        .map_err(|e| format!("Failed to prepare statement: {}", e))?;

    let participant_iter = stmt
        .query_map([expense_id], map_participant_row)
        .map_err(|e| format!("Failed to query expense participants: {}", e))?;

    let mut participants = Vec::new();
    for participant in participant_iter {
        participants.push(participant.map_err(|e| format!("Failed to parse expense participant: {}", e))?);
    }

    Ok(participants)
}

pub fn set_expense_participant_paid(
    conn: &Connection,
    participant_id: &str,
    is_paid: bool,
) -> Result<(), String> {
    let rows_affected = conn
        .execute(
            "UPDATE expense_participants SET is_paid = ?1 WHERE id = ?2",
            rusqlite::params![is_paid, participant_id],
        )
        .map_err(|e| format!("Failed to update expense participant: {}", e))?;

    if rows_affected == 0 {
        return Err(format!("Participant with ID {} not found", participant_id));
    }

    Ok(())
}
