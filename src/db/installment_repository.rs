use crate::models::installment::{Installment, InstallmentParticipant, InstallmentPayment};
use chrono::NaiveDate;
use rusqlite::{Connection, Row};
use rust_decimal::Decimal;
use std::str::FromStr;

fn map_installment_row(row: &Row) -> rusqlite::Result<Installment> {
    let total_str: String = row.get(3)?;
    let value_str: String = row.get(5)?;
    let first_due_str: String = row.get(7)?;

    Ok(Installment {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        total_amount: Decimal::from_str(&total_str)
            .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
        installment_count: row.get(4)?,
        installment_value: Decimal::from_str(&value_str)
            .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
        paid_installments: row.get(6)?,
        first_due_date: NaiveDate::parse_from_str(&first_due_str, "%Y-%m-%d")
            .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
        is_split: row.get(8)?,
        split_parts: row.get(9)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}

fn map_payment_row(row: &Row) -> rusqlite::Result<InstallmentPayment> {
    let amount_str: String = row.get(3)?;
    let due_date_str: String = row.get(4)?;
    let paid_date_str: Option<String> = row.get(6)?;

    Ok(InstallmentPayment {
        id: row.get(0)?,
        installment_id: row.get(1)?,
        payment_number: row.get(2)?,
        amount: Decimal::from_str(&amount_str)
            .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
        due_date: NaiveDate::parse_from_str(&due_date_str, "%Y-%m-%d")
            .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
        is_paid: row.get(5)?,
        paid_date: match paid_date_str {
            Some(s) => Some(
                NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                    .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
            ),
            None => None,
        },
        created_at: row.get(7)?,
    })
}

fn map_participant_row(row: &Row) -> rusqlite::Result<InstallmentParticipant> {
    let amount_str: String = row.get(4)?;

    Ok(InstallmentParticipant {
        id: row.get(0)?,
        installment_id: row.get(1)?,
        name: row.get(2)?,
        parts: row.get(3)?,
        amount_owed: Decimal::from_str(&amount_str)
            .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
        created_at: row.get(5)?,
    })
}

pub fn add_installment(conn: &Connection, installment: &Installment) -> Result<(), String> {
    conn.execute(
        "INSERT INTO installments (id, user_id, name, total_amount, installment_count, installment_value, paid_installments, first_due_date, is_split, split_parts, created_at, updated_at) \n             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        rusqlite::params![
            &installment.id,
            &installment.user_id,
            &installment.name,
            installment.total_amount.to_string(),
            installment.installment_count,
            installment.installment_value.to_string(),
            installment.paid_installments,
            installment.first_due_date.to_string(),
            installment.is_split,
            installment.split_parts,
            &installment.created_at,
            &installment.updated_at,
        ],
    )
    .map_err(|e| format!("Failed to insert installment: {}", e))?;

    Ok(())
}

pub fn get_all_installments(conn: &Connection, user_id: &str) -> Result<Vec<Installment>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, user_id, name, total_amount, installment_count, installment_value, paid_installments, first_due_date, is_split, split_parts, created_at, updated_at \n             FROM installments WHERE user_id = ?1 ORDER BY created_at DESC",
        )
        .map_err(|e| format!("Failed to prepare statement: {}", e))?;

    let installment_iter = stmt
        .query_map([user_id], map_installment_row)
        .map_err(|e| format!("Failed to query installments: {}", e))?;

    let mut installments = Vec::new();
    for installment in installment_iter {
        installments.push(installment.map_err(|e| format!("Failed to parse installment: {}", e))?);
    }

    Ok(installments)
}

pub fn update_installment(
    conn: &Connection,
    id: &str,
    name: &str,
    installment_count: i64,
    installment_value: Decimal,
    total_amount: Decimal,
    updated_at: &str,
) -> Result<(), String> {
    let rows_affected = conn
        .execute(
            "UPDATE installments SET name = ?1, installment_count = ?2, installment_value = ?3, total_amount = ?4, updated_at = ?5 WHERE id = ?6",
            rusqlite::params![
                name,
                installment_count,
                installment_value.to_string(),
                total_amount.to_string(),
                updated_at,
                id,
            ],
        )
        .map_err(|e| format!("Failed to update installment: {}", e))?;

    if rows_affected == 0 {
        return Err(format!("Installment with ID {} not found", id));
    }

    Ok(())
}

pub fn set_paid_installments(
    conn: &Connection,
    id: &str,
    paid_installments: i64,
    updated_at: &str,
) -> Result<(), String> {
    let rows_affected = conn
        .execute(
            "UPDATE installments SET paid_installments = ?1, updated_at = ?2 WHERE id = ?3",
            rusqlite::params![paid_installments, updated_at, id],
        )
        .map_err(|e| format!("Failed to update installment: {}", e))?;

    if rows_affected == 0 {
        return Err(format!("Installment with ID {} not found", id));
    }

    Ok(())
}

pub fn remove_installment(conn: &Connection, id: &str) -> Result<(), String> {
    let rows_affected = conn
        .execute("DELETE FROM installments WHERE id = ?1", [id])
        .map_err(|e| format!("Failed to delete installment: {}", e))?;

    if rows_affected == 0 {
        return Err(format!("Installment with ID {} not found", id));
    }

    conn.execute(
        "DELETE FROM installment_payments WHERE installment_id = ?1",
        [id],
    )
    .map_err(|e| format!("Failed to delete installment payments: {}", e))?;

    conn.execute(
        "DELETE FROM installment_participants WHERE installment_id = ?1",
        [id],
    )
    .map_err(|e| format!("Failed to delete installment participants: {}", e))?;

    Ok(())
}

pub fn add_installment_payment(
    conn: &Connection,
    payment: &InstallmentPayment,
) -> Result<(), String> {
    conn.execute(
        "INSERT INTO installment_payments (id, installment_id, payment_number, amount, due_date, is_paid, paid_date, created_at) \n             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        rusqlite::params![
            &payment.id,
            &payment.installment_id,
            payment.payment_number,
            payment.amount.to_string(),
            payment.due_date.to_string(),
            payment.is_paid,
            payment.paid_date.map(|d| d.to_string()),
            &payment.created_at,
        ],
    )
    .map_err(|e| format!("Failed to insert installment payment: {}", e))?;

    Ok(())
}

pub fn get_payments_for_installment(
    conn: &Connection,
    installment_id: &str,
) -> Result<Vec<InstallmentPayment>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, installment_id, payment_number, amount, due_date, is_paid, paid_date, created_at \n             FROM installment_payments WHERE installment_id = ?1 ORDER BY payment_number ASC",
        )
        .map_err(|e| format!("Failed to prepare statement: {}", e))?;

    let payment_iter = stmt
        .query_map([installment_id], map_payment_row)
        .map_err(|e| format!("Failed to query installment payments: {}", e))?;

    let mut payments = Vec::new();
    for payment in payment_iter {
        payments.push(payment.map_err(|e| format!("Failed to parse installment payment: {}", e))?);
    }

    Ok(payments)
}

pub fn set_payment_paid(
    conn: &Connection,
    payment_id: &str,
    is_paid: bool,
    paid_date: Option<NaiveDate>,
) -> Result<(), String> {
    let rows_affected = conn
        .execute(
            "UPDATE installment_payments SET is_paid = ?1, paid_date = ?2 WHERE id = ?3",
            rusqlite::params![is_paid, paid_date.map(|d| d.to_string()), payment_id],
        )
        .map_err(|e| format!("Failed to update installment payment: {}", e))?;

    if rows_affected == 0 {
        return Err(format!("Payment with ID {} not found", payment_id));
    }

    Ok(())
}

pub fn add_installment_participant(
    conn: &Connection,
    participant: &InstallmentParticipant,
) -> Result<(), String> {
    conn.execute(
        "INSERT INTO installment_participants (id, installment_id, name, parts, amount_owed, created_at) \n             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        rusqlite::params![
            &participant.id,
            &participant.installment_id,
            &participant.name,
            participant.parts,
            participant.amount_owed.to_string(),
            &participant.created_at,
        ],
    )
    .map_err(|e| format!("Failed to insert installment participant: {}", e))?;

    Ok(())
}

pub fn get_participants_for_installment(
    conn: &Connection,
    installment_id: &str,
) -> Result<Vec<InstallmentParticipant>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, installment_id, name, parts, amount_owed, created_at \n             FROM installment_participants WHERE installment_id = ?1",
        )
        .map_err(|e| format!("Failed to prepare statement: {}", e))?;

    let participant_iter = stmt
        .query_map([installment_id], map_participant_row)
        .map_err(|e| format!("Failed to query installment participants: {}", e))?;

    let mut participants = Vec::new();
    for participant in participant_iter {
        participants.push(
            participant.map_err(|e| format!("Failed to parse installment participant: {}", e))?,
        );
    }

    Ok(participants)
}
