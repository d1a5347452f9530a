use crate::db::income_repository;
use crate::models::income::Income;
use chrono::{NaiveDate, Utc};
use rusqlite::Connection;
use rust_decimal::Decimal;
use uuid::Uuid;

fn parse_income_details(details: &str) -> Result<(String, Decimal, NaiveDate, bool), String> {
    let detail_parts: Vec<&str> = details.split(',').map(|s| s.trim()).collect();
    if detail_parts.len() != 4 {
        return Err(format!(
            "Invalid number of details provided. Expected 4 details separated by commas but got {}",
            detail_parts.len()
        ));
    }

    let source = detail_parts[0].to_string();
    if source.is_empty() {
        return Err("Source cannot be empty".to_string());
    }
    if source.len() > 100 {
        return Err("Source too long".to_string());
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

    let date = NaiveDate::parse_from_str(detail_parts[2], "%Y-%m-%d")
        .map_err(|_| "Invalid date format. Please use YYYY-MM-DD.".to_string())?;

    let is_recurring = match detail_parts[3].to_lowercase().as_str() {
        "yes" => true,
        "no" => false,
        _ => {
            return Err("Invalid recurring flag. Use 'yes' or 'no'.".to_string());
        }
    };

    Ok((source, amount, date, is_recurring))
}

/// Stores a new income from "source, amount, date, recurring(yes/no)".
pub fn add_income_db(conn: &Connection, user_id: &str, details: &str) -> Result<Income, String> {
    let (source, amount, date, is_recurring) = parse_income_details(details)?;
    let now = Utc::now().to_rfc3339();

    let income = Income {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        source,
        amount,
        date,
        is_recurring,
        created_at: now.clone(),
        updated_at: now,
    };

    income_repository::add_income(conn, &income)?;
    Ok(income)
}

pub fn edit_income_db(conn: &Connection, id: &str, details: &str) -> Result<(), String> {
    let id = id.trim();
    if id.is_empty() {
        return Err("Income ID cannot be empty".to_string());
    }

    let (source, amount, date, is_recurring) = parse_income_details(details)?;
    income_repository::update_income(
        conn,
        id,
        &source,
        amount,
        date,
        is_recurring,
        &Utc::now().to_rfc3339(),
    )
}

pub fn remove_income_db(conn: &Connection, id: &str) -> Result<(), String> {
    let id = id.trim();
    if id.is_empty() {
        return Err("Income ID cannot be empty".to_string());
    }
    income_repository::remove_income(conn, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::establish_test_connection;
    use std::str::FromStr;

    #[test]
    fn test_add_income_recurring() {
        let conn = establish_test_connection().unwrap();

        let income = add_income_db(&conn, "local", "Salary, 3200.00, 2025-03-01, yes").unwrap();
        assert!(income.is_recurring);
        assert_eq!(income.amount, Decimal::from_str("3200.00").unwrap());

        let incomes = income_repository::get_all_incomes(&conn, "local").unwrap();
        assert_eq!(incomes.len(), 1);
        assert_eq!(incomes[0].source, "Salary");
    }

    #[test]
    fn test_add_income_one_time() {
        let conn = establish_test_connection().unwrap();

        let income = add_income_db(&conn, "local", "Gift, 150, 2025-03-08, no").unwrap();
        assert!(!income.is_recurring);
    }

    #[test]
    fn test_add_income_invalid_recurring_flag() {
        let conn = establish_test_connection().unwrap();

        let result = add_income_db(&conn, "local", "Salary, 3200.00, 2025-03-01, monthly");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("recurring flag"));
    }

    #[test]
    fn test_add_income_invalid_amount() {
        let conn = establish_test_connection().unwrap();

        let result = add_income_db(&conn, "local", "Salary, -10, 2025-03-01, yes");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("greater than zero"));
    }

    #[test]
    fn test_edit_income_flips_recurring() {
        let conn = establish_test_connection().unwrap();
        let income = add_income_db(&conn, "local", "Salary, 3200.00, 2025-03-01, yes").unwrap();

        edit_income_db(&conn, &income.id, "Salary, 3300.00, 2025-03-01, no").unwrap();

        let incomes = income_repository::get_all_incomes(&conn, "local").unwrap();
        assert!(!incomes[0].is_recurring);
        assert_eq!(incomes[0].amount, Decimal::from_str("3300.00").unwrap());
    }

    #[test]
    fn test_remove_income_empty_id() {
        let conn = establish_test_connection().unwrap();

        let result = remove_income_db(&conn, "");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cannot be empty"));
    }
}
