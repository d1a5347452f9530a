use crate::models::debt::{Debt, DebtParticipant};
use chrono::NaiveDate;
use rusqlite::{Connection, Row};
use rust_decimal::Decimal;
use std::str::FromStr;

fn map_debt_row(row: &Row) -> rusqlite::Result<Debt> {
    let total_str: String = row.get(3)?;
    let paid_str: String = row.get(4)?;
    let due_date_str: Option<String> = row.get(5)?;

    Ok(Debt {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        total_amount: Decimal::from_str(&total_str)
            .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
        paid_amount: Decimal::from_str(&paid_str)
            .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
        due_date: match due_date_str {
            Some(s) => Some(
                NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                    .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
            ),
            None => None,
        },
        is_split: row.get(6)?,
        split_parts: row.get(7)?,
        is_paid: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}

fn map_participant_row(row: &Row) -> rusqlite::Result<DebtParticipant> {
    let amount_str: String = row.get(4)?;

    Ok(DebtParticipant {
        id: row.get(0)?,
        debt_id: row.get(1)?,
        name: row.get(2)?,
        parts: row.get(3)?,
        amount_owed: Decimal::from_str(&amount_str)
            .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
        is_paid: row.get(5)?,
        created_at: row.get(6)?,
    })
}

pub fn add_debt(conn: &Connection, debt: &Debt) -> Result<(), String> {
    conn.execute(
        "INSERT INTO debts (id, user_id, name, total_amount, paid_amount, due_date, is_split, split_parts, is_paid, created_at, updated_at) \n             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        rusqlite::params![
            &debt.id,
            &debt.user_id,
            &debt.name,
            debt.total_amount.to_string(),
            debt.paid_amount.to_string(),
            debt.due_date.map(|d| d.to_string()),
            debt.is_split,
            debt.split_parts,
            debt.is_paid,
            &debt.created_at,
            &debt.updated_at,
        ],
    )
    .map_err(|e| format!("Failed to insert debt: {}", e))?;

    Ok(())
}

pub fn get_all_debts(conn: &Connection, user_id: &str) -> Result<Vec<Debt>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, user_id, name, total_amount, paid_amount, due_date, is_split, split_parts, is_paid, created_at, updated_at \n             FROM debts WHERE user_id = ?1 ORDER BY created_at DESC",
        )
        .map_err(|e| format!("Failed to prepare statement: {}", e))?;

    let debt_iter = stmt
        .query_map([user_id], map_debt_row)
        .map_err(|e| format!("Failed to query debts: {}", e))?;

    let mut debts = Vec::new();
    for debt in debt_iter {
        debts.push(debt.map_err(|e| format!("Failed to parse debt: {}", e))?);
    }

    Ok(debts)
}

pub fn update_debt(
    conn: &Connection,
    id: &str,
    name: &str,
    total_amount: Decimal,
    paid_amount: Decimal,
    due_date: Option<NaiveDate>,
    is_paid: bool,
    updated_at: &str,
) -> Result<(), String> {
    let rows_affected = conn
        .execute(
            "UPDATE debts SET name = ?1, total_amount = ?2, paid_amount = ?3, due_date = ?4, is_paid = ?5, updated_at = ?6 WHERE id = ?7",
            rusqlite::params![
                name,
                total_amount.to_string(),
                paid_amount.to_string(),
                due_date.map(|d| d.to_string()),
                is_paid,
                updated_at,
                id,
            ],
        )
        .map_err(|e| format!("Failed to update debt: {}", e))?;

    if rows_affected == 0 {
        return Err(format!("Debt with ID {} not found", id));
    }

    Ok(())
}

pub fn remove_debt(conn: &Connection, id: &str) -> Result<(), String> {
    let rows_affected = conn
        .execute("DELETE FROM debts WHERE id = ?1", [id])
        .map_err(|e| format!("Failed to delete debt: {}", e))?;

    if rows_affected == 0 {
        return Err(format!("Debt with ID {} not found", id));
    }

    conn.execute("DELETE FROM debt_participants WHERE debt_id = ?1", [id])
        .map_err(|e| format!("Failed to delete debt participants: {}", e))?;

    Ok(())
}

pub fn add_debt_participant(conn: &Connection, participant: &DebtParticipant) -> Result<(), String> {
    conn.execute(
        "INSERT INTO debt_participants (id, debt_id, name, parts, amount_owed, is_paid, created_at) \n             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        rusqlite::params![
            &participant.id,
            &participant.debt_id,
            &participant.name,
            participant.parts,
            participant.amount_owed.to_string(),
            participant.is_paid,
            &participant.created_at,
        ],
    )
    .map_err(|e| format!("Failed to insert debt participant: {}", e))?;

    Ok(())
}

pub fn get_participants_for_debt(
    conn: &Connection,
    debt_id: &str,
) -> Result<Vec<DebtParticipant>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, debt_id, name, parts, amount_owed, is_paid, created_at \n             FROM debt_participants WHERE debt_id = ?1",
        )
        .map_err(|e| format!("Failed to prepare statement: {}", e))?;

    let participant_iter = stmt
        .query_map([debt_id], map_participant_row)
        .map_err(|e| format!("Failed to query debt participants: {}", e))?;

    let mut participants = Vec::new();
    for participant in participant_iter {
        participants.push(participant.map_err(|e| format!("Failed to parse debt participant: {}", e))?);
    }

    Ok(participants)
}

pub fn set_debt_participant_paid(
    conn: &Connection,
    participant_id: &str,
    is_paid: bool,
) -> Result<(), String> {
    let rows_affected = conn
        .execute(
            "UPDATE debt_participants SET is_paid = ?1 WHERE id = ?2",
            rusqlite::params![is_paid, participant_id],
        )
        .map_err(|e| format!("Failed to update debt participant: {}", e))?;

    if rows_affected == 0 {
        return Err(format!("Participant with ID {} not found", participant_id));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::establish_test_connection;
    use chrono::Utc;
    use uuid::Uuid;

    fn create_test_debt(id: &str, user_id: &str, created_at: &str) -> Debt {
        Debt {
            id: id.to_string(),
            user_id: user_id.to_string(),
            name: "Car loan".to_string(),
            total_amount: Decimal::new(500000, 2),
            paid_amount: Decimal::new(120000, 2),
            due_date: Some(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()),
            is_split: false,
            split_parts: 1,
            is_paid: false,
            created_at: created_at.to_string(),
            updated_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_add_debt_success() {
        let conn = establish_test_connection().unwrap();
        let debt = create_test_debt(&Uuid::new_v4().to_string(), "local", &Utc::now().to_rfc3339());

        let result = add_debt(&conn, &debt);
        assert!(result.is_ok());
    }

    #[test]
    fn test_add_debt_without_due_date() {
        let conn = establish_test_connection().unwrap();
        let mut debt = create_test_debt(&Uuid::new_v4().to_string(), "local", &Utc::now().to_rfc3339());
        debt.due_date = None;

        add_debt(&conn, &debt).unwrap();

        let debts = get_all_debts(&conn, "local").unwrap();
        assert_eq!(debts.len(), 1);
        assert!(debts[0].due_date.is_none());
    }

    #[test]
    fn test_get_all_debts_sorted_by_created_at_desc() {
        let conn = establish_test_connection().unwrap();

        let older = create_test_debt(&Uuid::new_v4().to_string(), "local", "2025-01-01T08:00:00+00:00");
        let newer = create_test_debt(&Uuid::new_v4().to_string(), "local", "2025-02-01T08:00:00+00:00");

        add_debt(&conn, &older).unwrap();
        add_debt(&conn, &newer).unwrap();

        let debts = get_all_debts(&conn, "local").unwrap();
        assert_eq!(debts.len(), 2);
        assert_eq!(debts[0].id, newer.id);
        assert_eq!(debts[1].id, older.id);
    }

    #[test]
    fn test_get_all_debts_scoped_to_user() {
        let conn = establish_test_connection().unwrap();

        let mine = create_test_debt(&Uuid::new_v4().to_string(), "local", &Utc::now().to_rfc3339());
        let theirs = create_test_debt(&Uuid::new_v4().to_string(), "someone-else", &Utc::now().to_rfc3339());

        add_debt(&conn, &mine).unwrap();
        add_debt(&conn, &theirs).unwrap();

        let debts = get_all_debts(&conn, "local").unwrap();
        assert_eq!(debts.len(), 1);
        assert_eq!(debts[0].id, mine.id);
    }

    #[test]
    fn test_update_debt_success() {
        let conn = establish_test_connection().unwrap();
        let id = Uuid::new_v4().to_string();
        let debt = create_test_debt(&id, "local", &Utc::now().to_rfc3339());
        add_debt(&conn, &debt).unwrap();

        let result = update_debt(
            &conn,
            &id,
            "Car loan",
            Decimal::new(500000, 2),
            Decimal::new(500000, 2),
            None,
            true,
            &Utc::now().to_rfc3339(),
        );
        assert!(result.is_ok());

        let debts = get_all_debts(&conn, "local").unwrap();
        assert!(debts[0].is_paid);
        assert_eq!(debts[0].paid_amount, Decimal::new(500000, 2));
        assert!(debts[0].due_date.is_none());
    }

    #[test]
    fn test_update_debt_not_found() {
        let conn = establish_test_connection().unwrap();

        let result = update_debt(
            &conn,
            &Uuid::new_v4().to_string(),
            "Missing",
            Decimal::new(100, 2),
            Decimal::ZERO,
            None,
            false,
            &Utc::now().to_rfc3339(),
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not found"));
    }

    #[test]
    fn test_remove_debt_deletes_participants() {
        let conn = establish_test_connection().unwrap();
        let id = Uuid::new_v4().to_string();
        let debt = create_test_debt(&id, "local", &Utc::now().to_rfc3339());
        add_debt(&conn, &debt).unwrap();

        let participant = DebtParticipant {
            id: Uuid::new_v4().to_string(),
            debt_id: id.clone(),
            name: "Bob".to_string(),
            parts: 2,
            amount_owed: Decimal::new(250000, 2),
            is_paid: false,
            created_at: Utc::now().to_rfc3339(),
        };
        add_debt_participant(&conn, &participant).unwrap();

        let result = remove_debt(&conn, &id);
        assert!(result.is_ok());

        assert_eq!(get_all_debts(&conn, "local").unwrap().len(), 0);
        assert_eq!(get_participants_for_debt(&conn, &id).unwrap().len(), 0);
    }

    #[test]
    fn test_remove_debt_not_found() {
        let conn = establish_test_connection().unwrap();

        let result = remove_debt(&conn, &Uuid::new_v4().to_string());
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not found"));
    }

    #[test]
    fn test_set_debt_participant_paid() {
        let conn = establish_test_connection().unwrap();
        let debt_id = Uuid::new_v4().to_string();
        let debt = create_test_debt(&debt_id, "local", &Utc::now().to_rfc3339());
        add_debt(&conn, &debt).unwrap();

        let participant_id = Uuid::new_v4().to_string();
        let participant = DebtParticipant {
            id: participant_id.clone(),
            debt_id: debt_id.clone(),
            name: "Bob".to_string(),
            parts: 1,
            amount_owed: Decimal::new(250000, 2),
            is_paid: false,
            created_at: Utc::now().to_rfc3339(),
        };
        add_debt_participant(&conn, &participant).unwrap();

        set_debt_participant_paid(&conn, &participant_id, true).unwrap();

        let participants = get_participants_for_debt(&conn, &debt_id).unwrap();
        assert!(participants[0].is_paid);
    }
}
