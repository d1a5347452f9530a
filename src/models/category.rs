/// Which record kinds a category may be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    All,
    Expense,
    Debt,
    Installment,
}

impl CategoryScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryScope::All => "all",
            CategoryScope::Expense => "expense",
            CategoryScope::Debt => "debt",
            CategoryScope::Installment => "installment",
        }
    }

    pub fn parse(value: &str) -> Result<CategoryScope, String> {
        match value {
            "all" => Ok(CategoryScope::All),
            "expense" => Ok(CategoryScope::Expense),
            "debt" => Ok(CategoryScope::Debt),
            "installment" => Ok(CategoryScope::Installment),
            other => Err(format!(
                "Invalid category type '{}'. Use all, expense, debt or installment",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub color: String,
    pub scope: CategoryScope,
    pub created_at: String,
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_round_trip() {
        for scope in [
            CategoryScope::All,
            CategoryScope::Expense,
            CategoryScope::Debt,
            CategoryScope::Installment,
        ] {
            assert_eq!(CategoryScope::parse(scope.as_str()).unwrap(), scope);
        }
    }

    #[test]
    fn test_scope_parse_rejects_unknown() {
        assert!(CategoryScope::parse("income").is_err());
        assert!(CategoryScope::parse("").is_err());
    }
}
