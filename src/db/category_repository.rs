use crate::models::category::{Category, CategoryScope};
use rusqlite::{Connection, Row};

fn map_category_row(row: &Row) -> rusqlite::Result<Category> {
    let scope_str: String = row.get(4)?;

    Ok(Category {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        color: row.get(3)?,
        scope: CategoryScope::parse(&scope_str)
            .map_err(rusqlite::Error::InvalidParameterName)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

pub fn add_category(conn: &Connection, category: &Category) -> Result<(), String> {
    conn.execute(
        "INSERT INTO categories (id, user_id, name, color, type, created_at, updated_at) \n             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        rusqlite::params![
            &category.id,
            &category.user_id,
            &category.name,
            &category.color,
            category.scope.as_str(),
            &category.created_at,
            &category.updated_at,
        ],
    )
    .map_err(|e| format!("Failed to insert category: {}", e))?;

    Ok(())
}

pub fn get_all_categories(conn: &Connection, user_id: &str) -> Result<Vec<Category>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, user_id, name, color, type, created_at, updated_at \n             FROM categories WHERE user_id = ?1 ORDER BY name ASC",
        )
        .map_err(|e| format!("Failed to prepare statement: {}", e))?;

    let category_iter = stmt
        .query_map([user_id], map_category_row)
        .map_err(|e| format!("Failed to query categories: {}", e))?;

    let mut categories = Vec::new();
    for category in category_iter {
        categories.push(category.map_err(|e| format!("Failed to parse category: {}", e))?);
    }

    Ok(categories)
}

/// Categories usable for the given record kind: its own scope plus 'all'.
pub fn get_categories_for_scope(
    conn: &Connection,
    user_id: &str,
    scope: CategoryScope,
) -> Result<Vec<Category>, String> {
    let mut stmt = conn
        .prepare(
            "SELECT id, user_id, name, color, type, created_at, updated_at \n             FROM categories WHERE user_id = ?1 AND type IN ('all', ?2) ORDER BY name ASC",
        )
        .map_err(|e| format!("Failed to prepare statement: {}", e))?;

    let category_iter = stmt
        .query_map([user_id, scope.as_str()], map_category_row)
        .map_err(|e| format!("Failed to query categories: {}", e))?;

    let mut categories = Vec::new();
    for category in category_iter {
        categories.push(category.map_err(|e| format!("Failed to parse category: {}", e))?);
    }

    Ok(categories)
}

pub fn update_category(
    conn: &Connection,
    id: &str,
    name: &str,
    color: &str,
    scope: CategoryScope,
    updated_at: &str,
) -> Result<(), String> {
    let rows_affected = conn
        .execute(
            "UPDATE categories SET name = ?1, color = ?2, type = ?3, updated_at = ?4 WHERE id = ?5",
            rusqlite::params![name, color, scope.as_str(), updated_at, id],
        )
        .map_err(|e| format!("Failed to update category: {}", e))?;

    if rows_affected == 0 {
        return Err(format!("Category with ID {} not found", id));
    }

    Ok(())
}

pub fn remove_category(conn: &Connection, id: &str) -> Result<(), String> {
    let rows_affected = conn
        .execute("DELETE FROM categories WHERE id = ?1", [id])
        .map_err(|e| format!("Failed to delete category: {}", e))?;

    if rows_affected == 0 {
        return Err(format!("Category with ID {} not found", id));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::establish_test_connection;
    use chrono::Utc;
    use uuid::Uuid;

    fn create_test_category(name: &str, scope: CategoryScope) -> Category {
        Category {
            id: Uuid::new_v4().to_string(),
            user_id: "local".to_string(),
            name: name.to_string(),
            color: "#6b7280".to_string(),
            scope,
            created_at: Utc::now().to_rfc3339(),
            updated_at: Utc::now().to_rfc3339(),
        }
    }

    #[test]
    fn test_add_category_success() {
        let conn = establish_test_connection().unwrap();
        let category = create_test_category("Food", CategoryScope::Expense);

        let result = add_category(&conn, &category);
        assert!(result.is_ok());
    }

    #[test]
    fn test_get_all_categories_sorted_by_name() {
        let conn = establish_test_connection().unwrap();

        add_category(&conn, &create_test_category("Transport", CategoryScope::All)).unwrap();
        add_category(&conn, &create_test_category("Food", CategoryScope::Expense)).unwrap();

        let categories = get_all_categories(&conn, "local").unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Food");
        assert_eq!(categories[1].name, "Transport");
    }

    #[test]
    fn test_get_categories_for_scope_includes_all() {
        let conn = establish_test_connection().unwrap();

        add_category(&conn, &create_test_category("General", CategoryScope::All)).unwrap();
        add_category(&conn, &create_test_category("Food", CategoryScope::Expense)).unwrap();
        add_category(&conn, &create_test_category("Loans", CategoryScope::Debt)).unwrap();

        let categories = get_categories_for_scope(&conn, "local", CategoryScope::Expense).unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Food", "General"]);
    }

    #[test]
    fn test_update_category_success() {
        let conn = establish_test_connection().unwrap();
        let category = create_test_category("Food", CategoryScope::Expense);
        add_category(&conn, &category).unwrap();

        let result = update_category(
            &conn,
            &category.id,
            "Groceries",
            "#ff0000",
            CategoryScope::All,
            &Utc::now().to_rfc3339(),
        );
        assert!(result.is_ok());

        let categories = get_all_categories(&conn, "local").unwrap();
        assert_eq!(categories[0].name, "Groceries");
        assert_eq!(categories[0].color, "#ff0000");
        assert_eq!(categories[0].scope, CategoryScope::All);
    }

    #[test]
    fn test_update_category_not_found() {
        let conn = establish_test_connection().unwrap();

        let result = update_category(
            &conn,
            &Uuid::new_v4().to_string(),
            "Missing",
            "#000000",
            CategoryScope::All,
            &Utc::now().to_rfc3339(),
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not found"));
    }

    #[test]
    fn test_remove_category_not_found() {
        let conn = establish_test_connection().unwrap();

        let result = remove_category(&conn, &Uuid::new_v4().to_string());
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not found"));
    }
}
