use crate::models::income::Income;
use chrono::NaiveDate;
use rusqlite::{Connection, Row};
use rust_decimal::Decimal;
use std::str::FromStr;

fn map_income_row(row: &Row) -> rusqlite::Result<Income> {
    let amount_str: String = row.get(3)?;
    let date_str: String = row.get(4)?;

    Ok(Income {
        id: row.get(0)?,
        user_id: row.get(1)?,
        source: row.get(2)?,
        amount: Decimal::from_str(&amount_str)
            .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
        date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|e| rusqlite::Error::InvalidParameterName(e.to_string()))?,
        is_recurring: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

pub fn add_income(conn: &Connection, income: &Income) -> Result<(), String> {
    conn.execute(
        "INSERT INTO incomes (id, user_id, source, amount, date, is_recurring, created_at, updated_at) \n             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        rusqlite::params![
            &income.id,
            &income.user_id,
            &income.source,
            income.amount.to_string(),
            income.date.to_string(),
            income.is_recurring,
            &income.created_at,
            &income.updated_at,
        ],
    )
    .map_err(|e| format!("Failed to insert income: {}", e))?;

    Ok(())
}

pub fn get_all_incomes(conn: &Connection, user_id: &str) -> Result<Vec<Income>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, user_id, source, amount, date, is_recurring, created_at, updated_at \n             FROM incomes WHERE user_id = ?1 ORDER BY date DESC",
        )
        .map_err(|e| format!("Failed to prepare statement: {}", e))?;

    let income_iter = stmt
        .query_map([user_id], map_income_row)
        .map_err(|e| format!("Failed to query incomes: {}", e))?;

    let mut incomes = Vec::new();
    for income in income_iter {
        incomes.push(income.map_err(|e| format!("Failed to parse income: {}", e))?);
    }

    Ok(incomes)
}

pub fn update_income(
    conn: &Connection,
    id: &str,
    source: &str,
    amount: Decimal,
    date: NaiveDate,
    is_recurring: bool,
    updated_at: &str,
) -> Result<(), String> {
    let rows_affected = conn
        .execute(
            "UPDATE incomes SET source = ?1, amount = ?2, date = ?3, is_recurring = ?4, updated_at = ?5 WHERE id = ?6",
            rusqlite::params![
                source,
                amount.to_string(),
                date.to_string(),
                is_recurring,
                updated_at,
                id,
            ],
        )
        .map_err(|e| format!("Failed to update income: {}", e))?;

    if rows_affected == 0 {
        return Err(format!("Income with ID {} not found", id));
    }

    Ok(())
}

pub fn remove_income(conn: &Connection, id: &str) -> Result<(), String> {
    let rows_affected = conn
        .execute("DELETE FROM incomes WHERE id = ?1", [id])
        .map_err(|e| format!("Failed to delete income: {}", e))?;

    if rows_affected == 0 {
        return Err(format!("Income with ID {} not found", id));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::establish_test_connection;
    use chrono::Utc;
    use uuid::Uuid;

    fn create_test_income(id: &str, user_id: &str, date: NaiveDate, recurring: bool) -> Income {
        Income {
            id: id.to_string(),
            user_id: user_id.to_string(),
            source: "Salary".to_string(),
            amount: Decimal::new(320000, 2),
            date,
            is_recurring: recurring,
            created_at: Utc::now().to_rfc3339(),
            updated_at: Utc::now().to_rfc3339(),
        }
    }

    #[test]
    fn test_add_income_success() {
        let conn = establish_test_connection().unwrap();
        let income = create_test_income(
            &Uuid::new_v4().to_string(),
            "local",
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            true,
        );

        let result = add_income(&conn, &income);
        assert!(result.is_ok());
    }

    #[test]
    fn test_add_income_duplicate_id() {
        let conn = establish_test_connection().unwrap();
        let id = Uuid::new_v4().to_string();
        let income =
            create_test_income(&id, "local", NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), false);

        add_income(&conn, &income).unwrap();
        let result = add_income(&conn, &income);

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("UNIQUE constraint failed"));
    }

    #[test]
    fn test_get_all_incomes_sorted_by_date_desc() {
        let conn = establish_test_connection().unwrap();

        let older = create_test_income(
            &Uuid::new_v4().to_string(),
            "local",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            true,
        );
        let newer = create_test_income(
            &Uuid::new_v4().to_string(),
            "local",
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            true,
        );

        add_income(&conn, &older).unwrap();
        add_income(&conn, &newer).unwrap();

        let incomes = get_all_incomes(&conn, "local").unwrap();
        assert_eq!(incomes.len(), 2);
        assert_eq!(incomes[0].id, newer.id);
        assert_eq!(incomes[1].id, older.id);
    }

    #[test]
    fn test_get_all_incomes_scoped_to_user() {
        let conn = establish_test_connection().unwrap();

        let mine = create_test_income(
            &Uuid::new_v4().to_string(),
            "local",
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            false,
        );
        let theirs = create_test_income(
            &Uuid::new_v4().to_string(),
            "someone-else",
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            false,
        );

        add_income(&conn, &mine).unwrap();
        add_income(&conn, &theirs).unwrap();

        let incomes = get_all_incomes(&conn, "local").unwrap();
        assert_eq!(incomes.len(), 1);
        assert_eq!(incomes[0].id, mine.id);
    }

    #[test]
    fn test_update_income_success() {
        let conn = establish_test_connection().unwrap();
        let id = Uuid::new_v4().to_string();
        let income =
            create_test_income(&id, "local", NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), true);
        add_income(&conn, &income).unwrap();

        let result = update_income(
            &conn,
            &id,
            "Freelance",
            Decimal::new(50000, 2),
            NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
            false,
            &Utc::now().to_rfc3339(),
        );
        assert!(result.is_ok());

        let incomes = get_all_incomes(&conn, "local").unwrap();
        assert_eq!(incomes[0].source, "Freelance");
        assert!(!incomes[0].is_recurring);
    }

    #[test]
    fn test_update_income_not_found() {
        let conn = establish_test_connection().unwrap();

        let result = update_income(
            &conn,
            &Uuid::new_v4().to_string(),
            "Missing",
            Decimal::new(100, 2),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            false,
            &Utc::now().to_rfc3339(),
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not found"));
    }

    #[test]
    fn test_remove_income_not_found() {
        let conn = establish_test_connection().unwrap();

        let result = remove_income(&conn, &Uuid::new_v4().to_string());
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not found"));
    }
}
