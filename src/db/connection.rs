use rusqlite::{Connection, Result};

pub fn establish_connection(database_path: &str) -> Result<Connection> {
    let conn = Connection::open(database_path)?;
    create_tables(&conn)?;
    Ok(conn)
}

fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS expenses (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            description TEXT NOT NULL,
            amount TEXT NOT NULL,
            category TEXT NOT NULL,
            date TEXT NOT NULL,
            is_split INTEGER NOT NULL DEFAULT 0,
            split_parts INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS expense_participants (
            id TEXT PRIMARY KEY,
            expense_id TEXT NOT NULL,
            name TEXT NOT NULL,
            parts INTEGER NOT NULL,
            amount_owed TEXT NOT NULL,
            is_paid INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS debts (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            name TEXT NOT NULL,
            total_amount TEXT NOT NULL,
            paid_amount TEXT NOT NULL,
            due_date TEXT,
            is_split INTEGER NOT NULL DEFAULT 0,
            split_parts INTEGER NOT NULL DEFAULT 1,
            is_paid INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS debt_participants (
            id TEXT PRIMARY KEY,
            debt_id TEXT NOT NULL,
            name TEXT NOT NULL,
            parts INTEGER NOT NULL,
            amount_owed TEXT NOT NULL,
            is_paid INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS installments (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            name TEXT NOT NULL,
            total_amount TEXT NOT NULL,
            installment_count INTEGER NOT NULL,
            installment_value TEXT NOT NULL,
            paid_installments INTEGER NOT NULL DEFAULT 0,
            first_due_date TEXT NOT NULL,
            is_split INTEGER NOT NULL DEFAULT 0,
            split_parts INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS installment_payments (
            id TEXT PRIMARY KEY,
            installment_id TEXT NOT NULL,
            payment_number INTEGER NOT NULL,
            amount TEXT NOT NULL,
            due_date TEXT NOT NULL,
            is_paid INTEGER NOT NULL DEFAULT 0,
            paid_date TEXT,
            created_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS installment_participants (
            id TEXT PRIMARY KEY,
            installment_id TEXT NOT NULL,
            name TEXT NOT NULL,
            parts INTEGER NOT NULL,
            amount_owed TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS incomes (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            source TEXT NOT NULL,
            amount TEXT NOT NULL,
            date TEXT NOT NULL,
            is_recurring INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS categories (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            name TEXT NOT NULL,
            color TEXT NOT NULL,
            type TEXT NOT NULL CHECK (type IN ('all', 'expense', 'debt', 'installment')),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );",
    )
}

#[cfg(test)]
pub fn establish_test_connection() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    create_tables(&conn)?;
    Ok(conn)
}
