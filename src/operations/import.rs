use super::expenses::create_expense;
use crate::db::expense_repository;
use crate::models::expense::Expense;
use rusqlite::Connection;
use std::fs::File;

#[derive(Debug)]
pub enum ImportFormat {
    CSV,
}

pub fn import_expenses_to_db(
    conn: &Connection,
    user_id: &str,
    format: ImportFormat,
    path: &str,
) -> Result<usize, String> {
    let expenses = match format {
        ImportFormat::CSV => import_csv(user_id, path)?,
    };
    let mut count = 0;
    for expense in expenses {
        expense_repository::add_expense(conn, &expense)?;
        count += 1;
    }
    Ok(count)
}

fn import_csv(user_id: &str, path: &str) -> Result<Vec<Expense>, String> {
    let file = File::open(path).map_err(|e| format!("Failed to open file '{}': {}", path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .has_headers(false)
        .from_reader(file);

    let mut expenses = Vec::new();

    for (line_index, result) in reader.records().enumerate() {
        let record =
            result.map_err(|e| format!("CSV parse error on line {}: {}", line_index + 1, e))?;

        if record.len() != 4 {
            return Err(format!(
                "Invalid number of columns on line {}: expected 4, got {}",
                line_index + 1,
                record.len()
            ));
        }

        let date = record.get(0).unwrap_or("");
        let description = record.get(1).unwrap_or("");
        let amount = record.get(2).unwrap_or("");
        let category = record.get(3).unwrap_or("");

        let raw_input = format!("{},{},{},{}", description, amount, category, date);

        let expense = create_expense(user_id, &raw_input)
            .map_err(|e| format!("Line {}: {}", line_index + 1, e))?;

        expenses.push(expense);
    }

    Ok(expenses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::establish_test_connection;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp_csv(contents: &str) -> NamedTempFile {
        let mut tmp = NamedTempFile::new().expect("Failed to create temp file");
        write!(tmp, "{}", contents).expect("Failed to write test CSV");
        tmp
    }

    #[test]
    fn test_import_csv_to_db_success() {
        let conn = establish_test_connection().unwrap();
        let csv_data = "\
2025-11-10,Coffee,3.50,Food
2025-11-11,Bus ticket,2.80,Transport
";

        let tmp = write_temp_csv(csv_data);
        let result = import_expenses_to_db(
            &conn,
            "local",
            ImportFormat::CSV,
            tmp.path().to_str().unwrap(),
        );

        assert!(result.is_ok());
        assert_eq!(result.unwrap(), 2);

        let all = expense_repository::get_all_expenses(&conn, "local").unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|e| !e.is_split));
    }

    #[test]
    fn test_import_csv_invalid_data() {
        let conn = establish_test_connection().unwrap();
        let csv_data = "\
bad-date,Coffee,3.50,Food
";

        let tmp = write_temp_csv(csv_data);
        let result = import_expenses_to_db(
            &conn,
            "local",
            ImportFormat::CSV,
            tmp.path().to_str().unwrap(),
        );

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.contains("Line 1"));
        assert!(error.contains("Invalid date"));
    }

    #[test]
    fn test_import_csv_wrong_column_count() {
        let conn = establish_test_connection().unwrap();
        let csv_data = "\
2025-11-10,Coffee,3.50
";

        let tmp = write_temp_csv(csv_data);
        let result = import_expenses_to_db(
            &conn,
            "local",
            ImportFormat::CSV,
            tmp.path().to_str().unwrap(),
        );

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("expected 4"));
    }

    #[test]
    fn test_import_nonexistent_file() {
        let conn = establish_test_connection().unwrap();
        let result = import_expenses_to_db(&conn, "local", ImportFormat::CSV, "nonexistent.csv");

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to open file"));
    }
}
