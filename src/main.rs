mod db;
mod models;
mod operations;

use chrono::Utc;
use clap::Parser;
use db::{
    category_repository, debt_repository, expense_repository, income_repository,
    installment_repository,
};
use models::category::CategoryScope;
use models::debt::Debt;
use models::expense::Expense;
use models::installment::Installment;
use operations::categories::{add_category_db, edit_category_db, remove_category_db};
use operations::debts::{add_debt_db, edit_debt_db, remove_debt_db, toggle_debt_share_db};
use operations::expenses::{
    add_expense_db, edit_expense_db, remove_expense_db, toggle_expense_share_db,
};
use operations::import::{ImportFormat, import_expenses_to_db};
use operations::incomes::{add_income_db, edit_income_db, remove_income_db};
use operations::installments::{
    add_installment_db, edit_installment_db, next_unpaid_payment, pay_installment_db,
    remove_installment_db,
};
use operations::summary::{self, FeedKind};
use rusqlite::Connection;
use std::io;

#[derive(Parser, Debug)]
#[command(
    name = "findash",
    about = "Personal finance dashboard over a local SQLite database"
)]
struct Args {
    /// Path to the SQLite database file
    #[arg(long, default_value = "finance_dashboard.db")]
    database: String,

    /// Owner whose records are shown and written
    #[arg(long, default_value = "local")]
    user: String,

    /// Start in read-only viewer mode
    #[arg(long)]
    viewer: bool,
}

pub enum UserCommands {
    Help,
    Mode,
    Overview,
    Breakdown,
    Transactions,
    Expenses,
    AddExpense,
    EditExpense,
    RemoveExpense,
    SettleExpenseShare,
    Incomes,
    AddIncome,
    EditIncome,
    RemoveIncome,
    Debts,
    AddDebt,
    EditDebt,
    RemoveDebt,
    SettleDebtShare,
    Installments,
    AddInstallment,
    EditInstallment,
    RemoveInstallment,
    PayInstallment,
    Categories,
    AddCategory,
    EditCategory,
    RemoveCategory,
    Import,
    Exit,
    Unknown,
}

fn main() {
    let args = Args::parse();

    println!("Welcome to the finance dashboard!");
    let conn = db::connection::establish_connection(&args.database)
        .expect("Failed to connect to the database");

    let mut viewer_mode = args.viewer;
    if viewer_mode {
        println!("Starting in viewer mode. Mutating commands are disabled; use 'mode' to switch.");
    }

    loop {
        println!("Please enter a command (type 'help' for the full list):");

        let input = match read_user_input() {
            Ok(cmd) => cmd,
            Err(e) => {
                println!("Error reading input: {}", e);
                continue;
            }
        };
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }
        let command = check_for_command(parts[0]);

        if viewer_mode && command_mutates(&command) {
            println!("Viewer mode is read-only. Use the 'mode' command to switch to editor mode.");
            continue;
        }

        match command {
            UserCommands::Help => print_help(),
            UserCommands::Mode => {
                viewer_mode = !viewer_mode;
                if viewer_mode {
                    println!("Mode: viewer (read-only)");
                } else {
                    println!("Mode: editor");
                }
            }
            UserCommands::Overview => {
                let Some(month) = prompt("Which month? (YYYY-MM)") else {
                    continue;
                };
                let expenses = match expense_repository::get_all_expenses(&conn, &args.user) {
                    Ok(list) => list,
                    Err(e) => {
                        report_error("loading expenses", &e);
                        continue;
                    }
                };
                let incomes = match income_repository::get_all_incomes(&conn, &args.user) {
                    Ok(list) => list,
                    Err(e) => {
                        report_error("loading incomes", &e);
                        continue;
                    }
                };
                let debts = match debt_repository::get_all_debts(&conn, &args.user) {
                    Ok(list) => list,
                    Err(e) => {
                        report_error("loading debts", &e);
                        continue;
                    }
                };
                match summary::monthly_overview(&expenses, &incomes, &debts, &month) {
                    Ok(overview) => {
                        println!("Overview for {}", overview.month);
                        println!(
                            "  Income:    {:>12}  ({} records)",
                            overview.total_income.round_dp(2),
                            overview.income_count
                        );
                        println!(
                            "  Expenses:  {:>12}  ({} records)",
                            overview.total_expenses.round_dp(2),
                            overview.expense_count
                        );
                        println!("  Balance:   {:>12}", overview.balance.round_dp(2));
                        println!(
                            "  Open debt: {:>12}  across {} active debts",
                            overview.open_debt.round_dp(2),
                            overview.active_debt_count
                        );
                    }
                    Err(e) => report_error("building the overview", &e),
                }
            }
            UserCommands::Breakdown => {
                let Some(month) = prompt("Which month? (YYYY-MM)") else {
                    continue;
                };
                let expenses = match expense_repository::get_all_expenses(&conn, &args.user) {
                    Ok(list) => list,
                    Err(e) => {
                        report_error("loading expenses", &e);
                        continue;
                    }
                };
                match summary::expenses_by_category(&expenses, &month) {
                    Ok(breakdown) => {
                        if breakdown.is_empty() {
                            println!("No expenses recorded for {}.", month);
                        } else {
                            println!("Expenses by category for {}", month);
                            for entry in breakdown {
                                println!(
                                    "  {:20}  {:>12}  {:>3} records  {:>5.1}%",
                                    entry.category,
                                    entry.total.round_dp(2),
                                    entry.count,
                                    entry.percentage
                                );
                            }
                        }
                    }
                    Err(e) => report_error("building the breakdown", &e),
                }
            }
            UserCommands::Transactions => {
                let expenses = match expense_repository::get_all_expenses(&conn, &args.user) {
                    Ok(list) => list,
                    Err(e) => {
                        report_error("loading expenses", &e);
                        continue;
                    }
                };
                let incomes = match income_repository::get_all_incomes(&conn, &args.user) {
                    Ok(list) => list,
                    Err(e) => {
                        report_error("loading incomes", &e);
                        continue;
                    }
                };
                let feed = summary::transaction_feed(&expenses, &incomes);
                if feed.is_empty() {
                    println!("No transactions recorded.");
                }
                for entry in feed {
                    let signed = match entry.kind {
                        FeedKind::Expense => format!("-{}", entry.amount.round_dp(2)),
                        FeedKind::Income => format!("+{}", entry.amount.round_dp(2)),
                    };
                    println!(
                        "{}  {:>12}  {:30}  {}",
                        entry.date,
                        signed,
                        entry.description,
                        entry.category.unwrap_or_default()
                    );
                }
            }
            UserCommands::Expenses => {
                match expense_repository::get_all_expenses(&conn, &args.user) {
                    Ok(expenses) => {
                        if expenses.is_empty() {
                            println!("No expenses recorded.");
                        }
                        for expense in &expenses {
                            print_expense(&conn, expense);
                        }
                    }
                    Err(e) => report_error("loading expenses", &e),
                }
            }
            UserCommands::AddExpense => {
                if let Ok(categories) = category_repository::get_categories_for_scope(
                    &conn,
                    &args.user,
                    CategoryScope::Expense,
                ) {
                    if !categories.is_empty() {
                        let names: Vec<&str> =
                            categories.iter().map(|c| c.name.as_str()).collect();
                        println!("Known expense categories: {}", names.join(", "));
                    }
                }
                let Some(details) =
                    prompt("Expense details: description, amount, category, date(YYYY-MM-DD)")
                else {
                    continue;
                };
                let Some(participants) =
                    prompt("Split between participants? (name:parts, ... or leave empty)")
                else {
                    continue;
                };
                match add_expense_db(&conn, &args.user, &details, &participants) {
                    Ok(expense) => println!("Expense added with ID {}", expense.id),
                    Err(e) => report_error("adding the expense", &e),
                }
            }
            UserCommands::EditExpense => {
                let Some(id) = prompt("Expense ID to edit:") else {
                    continue;
                };
                let Some(details) =
                    prompt("New details: description, amount, category, date(YYYY-MM-DD)")
                else {
                    continue;
                };
                match edit_expense_db(&conn, &id, &details) {
                    Ok(()) => println!("Expense updated."),
                    Err(e) => report_error("updating the expense", &e),
                }
            }
            UserCommands::RemoveExpense => {
                let Some(id) = prompt("Expense ID to remove:") else {
                    continue;
                };
                match remove_expense_db(&conn, &id) {
                    Ok(()) => println!("Expense removed."),
                    Err(e) => report_error("removing the expense", &e),
                }
            }
            UserCommands::SettleExpenseShare => {
                let Some(id) = prompt("Expense ID:") else {
                    continue;
                };
                let Some(name) = prompt("Participant name:") else {
                    continue;
                };
                match toggle_expense_share_db(&conn, &id, &name) {
                    Ok(true) => println!("Share marked as paid."),
                    Ok(false) => println!("Share marked as unpaid."),
                    Err(e) => report_error("settling the share", &e),
                }
            }
            UserCommands::Incomes => {
                let Some(month) = prompt("Month filter? (YYYY-MM or leave empty)") else {
                    continue;
                };
                match income_repository::get_all_incomes(&conn, &args.user) {
                    Ok(incomes) => {
                        let detail = if month.is_empty() {
                            summary::income_detail(&incomes)
                        } else {
                            match summary::income_detail_for_month(&incomes, &month) {
                                Ok(detail) => detail,
                                Err(e) => {
                                    report_error("building the income detail", &e);
                                    continue;
                                }
                            }
                        };
                        let shown = if month.is_empty() {
                            incomes.iter().collect()
                        } else {
                            summary::incomes_in_month(&incomes, &month)
                        };
                        if shown.is_empty() {
                            println!("No income recorded.");
                        }
                        for income in &shown {
                            let kind = if income.is_recurring {
                                "recurring"
                            } else {
                                "one-time"
                            };
                            println!(
                                "{}  {}  {:>12}  {:20}  {}",
                                income.id,
                                income.date,
                                income.amount.round_dp(2),
                                income.source,
                                kind
                            );
                        }
                        println!(
                            "Total: {}  (recurring {} across {}, one-time {} across {})",
                            detail.total.round_dp(2),
                            detail.recurring_total.round_dp(2),
                            detail.recurring_count,
                            detail.one_time_total.round_dp(2),
                            detail.one_time_count
                        );
                    }
                    Err(e) => report_error("loading incomes", &e),
                }
            }
            UserCommands::AddIncome => {
                let Some(details) =
                    prompt("Income details: source, amount, date(YYYY-MM-DD), recurring(yes/no)")
                else {
                    continue;
                };
                match add_income_db(&conn, &args.user, &details) {
                    Ok(income) => println!("Income added with ID {}", income.id),
                    Err(e) => report_error("adding the income", &e),
                }
            }
            UserCommands::EditIncome => {
                let Some(id) = prompt("Income ID to edit:") else {
                    continue;
                };
                let Some(details) =
                    prompt("New details: source, amount, date(YYYY-MM-DD), recurring(yes/no)")
                else {
                    continue;
                };
                match edit_income_db(&conn, &id, &details) {
                    Ok(()) => println!("Income updated."),
                    Err(e) => report_error("updating the income", &e),
                }
            }
            UserCommands::RemoveIncome => {
                let Some(id) = prompt("Income ID to remove:") else {
                    continue;
                };
                match remove_income_db(&conn, &id) {
                    Ok(()) => println!("Income removed."),
                    Err(e) => report_error("removing the income", &e),
                }
            }
            UserCommands::Debts => {
                match debt_repository::get_all_debts(&conn, &args.user) {
                    Ok(debts) => {
                        if debts.is_empty() {
                            println!("No debts recorded.");
                        }
                        for debt in &debts {
                            print_debt(&conn, debt);
                        }
                        let totals = summary::debt_summary(&debts);
                        println!(
                            "Total: {}  paid {}  remaining {}  ({} active, {} settled)",
                            totals.total_amount.round_dp(2),
                            totals.paid_amount.round_dp(2),
                            totals.remaining.round_dp(2),
                            totals.active_count,
                            totals.settled_count
                        );
                    }
                    Err(e) => report_error("loading debts", &e),
                }
            }
            UserCommands::AddDebt => {
                let Some(details) = prompt(
                    "Debt details: name, total amount, paid amount[, due date(YYYY-MM-DD)]",
                ) else {
                    continue;
                };
                let Some(participants) =
                    prompt("Split between participants? (name:parts, ... or leave empty)")
                else {
                    continue;
                };
                match add_debt_db(&conn, &args.user, &details, &participants) {
                    Ok(debt) => println!("Debt added with ID {}", debt.id),
                    Err(e) => report_error("adding the debt", &e),
                }
            }
            UserCommands::EditDebt => {
                let Some(id) = prompt("Debt ID to edit:") else {
                    continue;
                };
                let Some(details) = prompt(
                    "New details: name, total amount, paid amount[, due date(YYYY-MM-DD)]",
                ) else {
                    continue;
                };
                match edit_debt_db(&conn, &id, &details) {
                    Ok(()) => println!("Debt updated."),
                    Err(e) => report_error("updating the debt", &e),
                }
            }
            UserCommands::RemoveDebt => {
                let Some(id) = prompt("Debt ID to remove:") else {
                    continue;
                };
                match remove_debt_db(&conn, &id) {
                    Ok(()) => println!("Debt removed."),
                    Err(e) => report_error("removing the debt", &e),
                }
            }
            UserCommands::SettleDebtShare => {
                let Some(id) = prompt("Debt ID:") else {
                    continue;
                };
                let Some(name) = prompt("Participant name:") else {
                    continue;
                };
                match toggle_debt_share_db(&conn, &id, &name) {
                    Ok(true) => println!("Share marked as paid."),
                    Ok(false) => println!("Share marked as unpaid."),
                    Err(e) => report_error("settling the share", &e),
                }
            }
            UserCommands::Installments => {
                match installment_repository::get_all_installments(&conn, &args.user) {
                    Ok(installments) => {
                        if installments.is_empty() {
                            println!("No installment plans recorded.");
                        }
                        for installment in &installments {
                            print_installment(&conn, installment);
                        }
                    }
                    Err(e) => report_error("loading installments", &e),
                }
            }
            UserCommands::AddInstallment => {
                let Some(details) = prompt(
                    "Installment details: name, count, value, first due date(YYYY-MM-DD)",
                ) else {
                    continue;
                };
                let Some(participants) =
                    prompt("Split between participants? (name:parts, ... or leave empty)")
                else {
                    continue;
                };
                match add_installment_db(&conn, &args.user, &details, &participants) {
                    Ok(installment) => println!("Installment plan added with ID {}", installment.id),
                    Err(e) => report_error("adding the installment plan", &e),
                }
            }
            UserCommands::EditInstallment => {
                let Some(id) = prompt("Installment ID to edit:") else {
                    continue;
                };
                let Some(details) = prompt("New details: name, count, value") else {
                    continue;
                };
                match edit_installment_db(&conn, &id, &details) {
                    Ok(()) => println!("Installment plan updated."),
                    Err(e) => report_error("updating the installment plan", &e),
                }
            }
            UserCommands::RemoveInstallment => {
                let Some(id) = prompt("Installment ID to remove:") else {
                    continue;
                };
                match remove_installment_db(&conn, &id) {
                    Ok(()) => println!("Installment plan removed."),
                    Err(e) => report_error("removing the installment plan", &e),
                }
            }
            UserCommands::PayInstallment => {
                let Some(id) = prompt("Installment ID to pay:") else {
                    continue;
                };
                match pay_installment_db(&conn, &id) {
                    Ok(payment) => println!(
                        "Paid installment {} of {} due {}.",
                        payment.payment_number,
                        payment.amount.round_dp(2),
                        payment.due_date
                    ),
                    Err(e) => report_error("paying the installment", &e),
                }
            }
            UserCommands::Categories => {
                match category_repository::get_all_categories(&conn, &args.user) {
                    Ok(categories) => {
                        if categories.is_empty() {
                            println!("No categories defined.");
                        }
                        for category in categories {
                            println!(
                                "{}  {:20}  {:12}  {}",
                                category.id,
                                category.name,
                                category.scope.as_str(),
                                category.color
                            );
                        }
                    }
                    Err(e) => report_error("loading categories", &e),
                }
            }
            UserCommands::AddCategory => {
                let Some(details) = prompt(
                    "Category details: name, type(all/expense/debt/installment)[, color #rrggbb]",
                ) else {
                    continue;
                };
                match add_category_db(&conn, &args.user, &details) {
                    Ok(category) => println!("Category added with ID {}", category.id),
                    Err(e) => report_error("adding the category", &e),
                }
            }
            UserCommands::EditCategory => {
                let Some(id) = prompt("Category ID to edit:") else {
                    continue;
                };
                let Some(details) = prompt(
                    "New details: name, type(all/expense/debt/installment)[, color #rrggbb]",
                ) else {
                    continue;
                };
                match edit_category_db(&conn, &id, &details) {
                    Ok(()) => println!("Category updated."),
                    Err(e) => report_error("updating the category", &e),
                }
            }
            UserCommands::RemoveCategory => {
                let Some(id) = prompt("Category ID to remove:") else {
                    continue;
                };
                match remove_category_db(&conn, &id) {
                    Ok(()) => println!("Category removed."),
                    Err(e) => report_error("removing the category", &e),
                }
            }
            UserCommands::Import => {
                let Some(path) = prompt(
                    "CSV file path (rows: date,description,amount,category):",
                ) else {
                    continue;
                };
                match import_expenses_to_db(&conn, &args.user, ImportFormat::CSV, &path) {
                    Ok(count) => println!("Successfully imported {} expenses.", count),
                    Err(e) => report_error("importing expenses", &e),
                }
            }
            UserCommands::Exit => {
                println!("Exiting the application.");
                break;
            }
            UserCommands::Unknown => {
                println!("Unknown command '{}'. Type 'help' for the full list.", parts[0]);
            }
        }
    }
}

fn print_expense(conn: &Connection, expense: &Expense) {
    let split_note = if expense.is_split {
        format!("  [split, {} parts]", expense.split_parts)
    } else {
        String::new()
    };
    println!(
        "{}  {}  {:>12}  {:30}  {}{}",
        expense.id,
        expense.date,
        expense.amount.round_dp(2),
        expense.description,
        expense.category,
        split_note
    );
    if expense.is_split {
        match expense_repository::get_participants_for_expense(conn, &expense.id) {
            Ok(participants) => {
                for p in participants {
                    let state = if p.is_paid { "paid" } else { "owes" };
                    println!(
                        "    - {} ({} parts): {} [{}]",
                        p.name,
                        p.parts,
                        p.amount_owed.round_dp(2),
                        state
                    );
                }
            }
            Err(e) => report_error("loading participants", &e),
        }
    }
}

fn print_debt(conn: &Connection, debt: &Debt) {
    let today = Utc::now().date_naive();
    let due = match debt.due_date {
        Some(date) => date.to_string(),
        None => "-".to_string(),
    };
    let mut status = if debt.is_paid { "settled" } else { "active" }.to_string();
    if debt.is_overdue(today) {
        status.push_str(", overdue");
    }
    println!(
        "{}  {:20}  {} / {}  ({:.0}%)  due {}  [{}]",
        debt.id,
        debt.name,
        debt.paid_amount.round_dp(2),
        debt.total_amount.round_dp(2),
        debt.progress_percent(),
        due,
        status
    );
    if debt.is_split {
        match debt_repository::get_participants_for_debt(conn, &debt.id) {
            Ok(participants) => {
                for p in participants {
                    let state = if p.is_paid { "paid" } else { "owes" };
                    println!(
                        "    - {} ({} parts): {} [{}]",
                        p.name,
                        p.parts,
                        p.amount_owed.round_dp(2),
                        state
                    );
                }
            }
            Err(e) => report_error("loading participants", &e),
        }
    }
}

fn print_installment(conn: &Connection, installment: &Installment) {
    let next = match installment_repository::get_payments_for_installment(conn, &installment.id) {
        Ok(payments) => match next_unpaid_payment(&payments) {
            Some(payment) => format!("next due {}", payment.due_date),
            None => "settled".to_string(),
        },
        Err(e) => {
            report_error("loading installment payments", &e);
            return;
        }
    };
    println!(
        "{}  {:20}  {} of {} paid  {} per month  remaining {}  [{}]",
        installment.id,
        installment.name,
        installment.paid_installments,
        installment.installment_count,
        installment.installment_value.round_dp(2),
        installment.remaining_amount().round_dp(2),
        next
    );
    if installment.is_split {
        match installment_repository::get_participants_for_installment(conn, &installment.id) {
            Ok(participants) => {
                for p in participants {
                    println!(
                        "    - {} ({} parts): {} per installment",
                        p.name,
                        p.parts,
                        p.amount_owed.round_dp(2)
                    );
                }
            }
            Err(e) => report_error("loading participants", &e),
        }
    }
}

fn print_help() {
    println!("Dashboard:");
    println!("  overview      Monthly income, expenses, balance and open debt");
    println!("  breakdown     A month's expenses grouped by category");
    println!("  transactions  Expenses and incomes interleaved, newest first");
    println!("Expenses:");
    println!("  expenses, add-expense, edit-expense, remove-expense, settle-expense-share");
    println!("Income:");
    println!("  incomes, add-income, edit-income, remove-income");
    println!("Debts:");
    println!("  debts, add-debt, edit-debt, remove-debt, settle-debt-share");
    println!("Installments:");
    println!("  installments, add-installment, edit-installment, remove-installment,");
    println!("  pay-installment");
    println!("Categories:");
    println!("  categories, add-category, edit-category, remove-category");
    println!("Other:");
    println!("  import        Import expenses from a CSV file");
    println!("  mode          Toggle between editor and viewer mode");
    println!("  help, exit");
}

fn prompt(message: &str) -> Option<String> {
    println!("{}", message);
    match read_user_input() {
        Ok(input) => Some(input),
        Err(e) => {
            println!("Error reading input: {}", e);
            None
        }
    }
}

fn read_user_input() -> Result<String, String> {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|_| "Failed to read line".to_string())?;
    Ok(input.trim().to_string())
}

fn check_for_command(input: &str) -> UserCommands {
    match input {
        "help" => UserCommands::Help,
        "mode" => UserCommands::Mode,
        "overview" => UserCommands::Overview,
        "breakdown" => UserCommands::Breakdown,
        "transactions" => UserCommands::Transactions,
        "expenses" => UserCommands::Expenses,
        "add-expense" => UserCommands::AddExpense,
        "edit-expense" => UserCommands::EditExpense,
        "remove-expense" => UserCommands::RemoveExpense,
        "settle-expense-share" => UserCommands::SettleExpenseShare,
        "incomes" => UserCommands::Incomes,
        "add-income" => UserCommands::AddIncome,
        "edit-income" => UserCommands::EditIncome,
        "remove-income" => UserCommands::RemoveIncome,
        "debts" => UserCommands::Debts,
        "add-debt" => UserCommands::AddDebt,
        "edit-debt" => UserCommands::EditDebt,
        "remove-debt" => UserCommands::RemoveDebt,
        "settle-debt-share" => UserCommands::SettleDebtShare,
        "installments" => UserCommands::Installments,
        "add-installment" => UserCommands::AddInstallment,
        "edit-installment" => UserCommands::EditInstallment,
        "remove-installment" => UserCommands::RemoveInstallment,
        "pay-installment" => UserCommands::PayInstallment,
        "categories" => UserCommands::Categories,
        "add-category" => UserCommands::AddCategory,
        "edit-category" => UserCommands::EditCategory,
        "remove-category" => UserCommands::RemoveCategory,
        "import" => UserCommands::Import,
        "exit" => UserCommands::Exit,
        _ => UserCommands::Unknown,
    }
}

fn command_mutates(command: &UserCommands) -> bool {
    matches!(
        command,
        UserCommands::AddExpense
            | UserCommands::EditExpense
            | UserCommands::RemoveExpense
            | UserCommands::SettleExpenseShare
            | UserCommands::AddIncome
            | UserCommands::EditIncome
            | UserCommands::RemoveIncome
            | UserCommands::AddDebt
            | UserCommands::EditDebt
            | UserCommands::RemoveDebt
            | UserCommands::SettleDebtShare
            | UserCommands::AddInstallment
            | UserCommands::EditInstallment
            | UserCommands::RemoveInstallment
            | UserCommands::PayInstallment
            | UserCommands::AddCategory
            | UserCommands::EditCategory
            | UserCommands::RemoveCategory
            | UserCommands::Import
    )
}

fn is_permission_error(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("permission denied")
        || lower.contains("readonly database")
        || lower.contains("unable to open database file")
}

fn report_error(context: &str, message: &str) {
    println!("Error {}: {}", context, message);
    if is_permission_error(message) {
        print_database_help();
    }
}

fn print_database_help() {
    println!("The database file cannot be accessed. To fix this:");
    println!("  1. Check that the directory holding the database file exists and is writable.");
    println!("  2. If the file belongs to another user, fix its permissions or pick a");
    println!("     different path with --database <path>.");
    println!("  3. Clear any read-only flag on the file, then run the command again.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_share_exists_for_expenses_and_debts_only() {
        assert!(matches!(
            check_for_command("settle-expense-share"),
            UserCommands::SettleExpenseShare
        ));
        assert!(matches!(
            check_for_command("settle-debt-share"),
            UserCommands::SettleDebtShare
        ));
        // Installment shares carry no settled flag, so there is no command for them.
        assert!(matches!(
            check_for_command("settle-installment-share"),
            UserCommands::Unknown
        ));
    }

    #[test]
    fn test_settle_share_commands_are_viewer_gated() {
        assert!(command_mutates(&UserCommands::SettleExpenseShare));
        assert!(command_mutates(&UserCommands::SettleDebtShare));
        assert!(!command_mutates(&UserCommands::Installments));
    }
}
