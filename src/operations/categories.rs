use crate::db::category_repository;
use crate::models::category::{Category, CategoryScope};
use chrono::Utc;
use regex::Regex;
use rusqlite::Connection;
use uuid::Uuid;

pub const DEFAULT_COLOR: &str = "#6b7280";

fn is_hex_color(value: &str) -> bool {
    Regex::new(r"^#[0-9a-fA-F]{6}$")
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

fn parse_category_details(details: &str) -> Result<(String, CategoryScope, String), String> {
    let detail_parts: Vec<&str> = details.split(',').map(|s| s.trim()).collect();
    if detail_parts.len() < 2 || detail_parts.len() > 3 {
        return Err(format!(
            "Invalid number of details provided. Expected 2 or 3 details separated by commas but got {}",
            detail_parts.len()
        ));
    }

    let name = detail_parts[0].to_string();
    if name.is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.len() > 50 {
        return Err("Name too long".to_string());
    }

    let scope = CategoryScope::parse(detail_parts[1])?;

    let color = match detail_parts.get(2) {
        Some(raw) if !raw.is_empty() => {
            if !is_hex_color(raw) {
                return Err(format!("Invalid color '{}'. Use hex format #rrggbb", raw));
            }
            raw.to_string()
        }
        _ => DEFAULT_COLOR.to_string(),
    };

    Ok((name, scope, color))
}

/// Stores a new category from "name, type[, color]".
pub fn add_category_db(conn: &Connection, user_id: &str, details: &str) -> Result<Category, String> {
    let (name, scope, color) = parse_category_details(details)?;
    let now = Utc::now().to_rfc3339();

    let category = Category {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        name,
        color,
        scope,
        created_at: now.clone(),
        updated_at: now,
    };

    category_repository::add_category(conn, &category)?;
    Ok(category)
}

pub fn edit_category_db(conn: &Connection, id: &str, details: &str) -> Result<(), String> {
    let id = id.trim();
    if id.is_empty() {
        return Err("Category ID cannot be empty".to_string());
    }

    let (name, scope, color) = parse_category_details(details)?;
    category_repository::update_category(conn, id, &name, &color, scope, &Utc::now().to_rfc3339())
}

pub fn remove_category_db(conn: &Connection, id: &str) -> Result<(), String> {
    let id = id.trim();
    if id.is_empty() {
        return Err("Category ID cannot be empty".to_string());
    }
    category_repository::remove_category(conn, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::establish_test_connection;

    #[test]
    fn test_add_category_default_color() {
        let conn = establish_test_connection().unwrap();

        let category = add_category_db(&conn, "local", "Food, expense").unwrap();
        assert_eq!(category.color, DEFAULT_COLOR);
        assert_eq!(category.scope, CategoryScope::Expense);
    }

    #[test]
    fn test_add_category_explicit_color() {
        let conn = establish_test_connection().unwrap();

        let category = add_category_db(&conn, "local", "Loans, debt, #FF8800").unwrap();
        assert_eq!(category.color, "#FF8800");
        assert_eq!(category.scope, CategoryScope::Debt);
    }

    #[test]
    fn test_add_category_invalid_color() {
        let conn = establish_test_connection().unwrap();

        let result = add_category_db(&conn, "local", "Loans, debt, orange");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid color"));

        let result = add_category_db(&conn, "local", "Loans, debt, #FFF");
        assert!(result.is_err());
    }

    #[test]
    fn test_add_category_invalid_scope() {
        let conn = establish_test_connection().unwrap();

        let result = add_category_db(&conn, "local", "Food, groceries");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid category type"));
    }

    #[test]
    fn test_edit_category() {
        let conn = establish_test_connection().unwrap();
        let category = add_category_db(&conn, "local", "Food, expense").unwrap();

        edit_category_db(&conn, &category.id, "Groceries, all, #00ff00").unwrap();

        let categories = category_repository::get_all_categories(&conn, "local").unwrap();
        assert_eq!(categories[0].name, "Groceries");
        assert_eq!(categories[0].color, "#00ff00");
        assert_eq!(categories[0].scope, CategoryScope::All);
    }

    #[test]
    fn test_remove_category_empty_id() {
        let conn = establish_test_connection().unwrap();

        let result = remove_category_db(&conn, " ");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("cannot be empty"));
    }
}
