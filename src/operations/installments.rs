use crate::db::installment_repository;
use crate::models::installment::{Installment, InstallmentParticipant, InstallmentPayment};
use crate::operations::schedule;
use crate::operations::split;
use chrono::{NaiveDate, Utc};
use rusqlite::Connection;
use rust_decimal::Decimal;
use uuid::Uuid;

fn parse_name_count_value(
    name_raw: &str,
    count_raw: &str,
    value_raw: &str,
) -> Result<(String, i64, Decimal), String> {
    let name = name_raw.to_string();
    if name.is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.len() > 100 {
        return Err("Name too long".to_string());
    }

    let count = count_raw.parse::<i64>().map_err(|_| {
        format!(
            "Invalid installment count {}. Please provide a whole number.",
            count_raw
        )
    })?;
    if count < 1 {
        return Err("Installment count must be at least 1".to_string());
    }

    let value = value_raw.parse::<Decimal>().map_err(|_| {
        format!(
            "Invalid installment value format {}. Please provide a valid decimal number.",
            value_raw
        )
    })?;
    if value <= Decimal::ZERO {
        return Err("Installment value must be greater than zero".to_string());
    }

    Ok((name, count, value))
}

/// Stores a new plan from "name, count, value, first due date", generating
/// one payment row per installment. Participants split the per-installment
/// value, not the grand total.
pub fn add_installment_db(
    conn: &Connection,
    user_id: &str,
    details: &str,
    participants_input: &str,
) -> Result<Installment, String> {
    let detail_parts: Vec<&str> = details.split(',').map(|s| s.trim()).collect();
    if detail_parts.len() != 4 {
        return Err(format!(
            "Invalid number of details provided. Expected 4 details separated by commas but got {}",
            detail_parts.len()
        ));
    }

    let (name, count, value) =
        parse_name_count_value(detail_parts[0], detail_parts[1], detail_parts[2])?;
    let first_due = NaiveDate::parse_from_str(detail_parts[3], "%Y-%m-%d")
        .map_err(|_| "Invalid date format. Please use YYYY-MM-DD.".to_string())?;

    let payments = schedule::payment_schedule(first_due, count, value)?;
    let now = Utc::now().to_rfc3339();

    let mut installment = Installment {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        name,
        total_amount: value * Decimal::from(count),
        installment_count: count,
        installment_value: value,
        paid_installments: 0,
        first_due_date: first_due,
        is_split: false,
        split_parts: 1,
        created_at: now.clone(),
        updated_at: now,
    };

    let participants_input = participants_input.trim();
    let shares = if participants_input.is_empty() {
        Vec::new()
    } else {
        let entries = split::parse_participants(participants_input)?;
        let shares = split::split_amount(installment.installment_value, &entries)?;
        installment.is_split = true;
        installment.split_parts = split::total_parts(&entries);
        shares
    };

    installment_repository::add_installment(conn, &installment)?;
    for scheduled in payments {
        let payment = InstallmentPayment {
            id: Uuid::new_v4().to_string(),
            installment_id: installment.id.clone(),
            payment_number: scheduled.payment_number,
            amount: scheduled.amount,
            due_date: scheduled.due_date,
            is_paid: false,
            paid_date: None,
            created_at: Utc::now().to_rfc3339(),
        };
        installment_repository::add_installment_payment(conn, &payment)?;
    }
    for share in shares {
        let participant = InstallmentParticipant {
            id: Uuid::new_v4().to_string(),
            installment_id: installment.id.clone(),
            name: share.name,
            parts: share.parts,
            amount_owed: share.amount_owed,
            created_at: Utc::now().to_rfc3339(),
        };
        installment_repository::add_installment_participant(conn, &participant)?;
    }

    Ok(installment)
}

/// Edits "name, count, value" and recomputes the total. The existing payment
/// schedule is left as it was written at creation.
pub fn edit_installment_db(conn: &Connection, id: &str, details: &str) -> Result<(), String> {
    let id = id.trim();
    if id.is_empty() {
        return Err("Installment ID cannot be empty".to_string());
    }

    let detail_parts: Vec<&str> = details.split(',').map(|s| s.trim()).collect();
    if detail_parts.len() != 3 {
        return Err(format!(
            "Invalid number of details provided. Expected 3 details separated by commas but got {}",
            detail_parts.len()
        ));
    }

    let (name, count, value) =
        parse_name_count_value(detail_parts[0], detail_parts[1], detail_parts[2])?;

    installment_repository::update_installment(
        conn,
        id,
        &name,
        count,
        value,
        value * Decimal::from(count),
        &Utc::now().to_rfc3339(),
    )
}

pub fn remove_installment_db(conn: &Connection, id: &str) -> Result<(), String> {
    let id = id.trim();
    if id.is_empty() {
        return Err("Installment ID cannot be empty".to_string());
    }
    installment_repository::remove_installment(conn, id)
}

/// Lowest-numbered payment still owed.
pub fn next_unpaid_payment(payments: &[InstallmentPayment]) -> Option<&InstallmentPayment> {
    payments.iter().find(|p| !p.is_paid)
}

/// Marks the next unpaid payment as paid today and advances the plan's
/// paid counter.
pub fn pay_installment_db(conn: &Connection, id: &str) -> Result<InstallmentPayment, String> {
    let id = id.trim();
    if id.is_empty() {
        return Err("Installment ID cannot be empty".to_string());
    }

    let payments = installment_repository::get_payments_for_installment(conn, id)?;
    if payments.is_empty() {
        return Err(format!("Installment with ID {} not found", id));
    }

    let next = match next_unpaid_payment(&payments) {
        Some(payment) => payment,
        None => return Err("All installments are already paid".to_string()),
    };

    let today = Utc::now().date_naive();
    installment_repository::set_payment_paid(conn, &next.id, true, Some(today))?;

    let paid_count = payments.iter().filter(|p| p.is_paid).count() as i64 + 1;
    installment_repository::set_paid_installments(conn, id, paid_count, &Utc::now().to_rfc3339())?;

    let mut paid = next.clone();
    paid.is_paid = true;
    paid.paid_date = Some(today);
    Ok(paid)
}
