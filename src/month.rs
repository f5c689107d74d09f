use crate::money::Balance;

/// Category group whose activity is paying down card debt rather than spending.
pub const CREDIT_CARD_PAYMENTS_GROUP: &str = "Credit Card Payments";

/// One budget category for the month. Amounts are raw milliunits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub group_name: String,
    pub name: String,
    pub budgeted: i64,
    pub activity: i64,
    pub balance: i64,
    pub goal_under_funded: Option<i64>,
}

/// Month-level figures as reported by the API, in milliunits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthTotals {
    pub month: String,
    pub to_be_budgeted: i64,
    pub budgeted: i64,
    pub income: i64,
    pub activity: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthSummary {
    pub ready_to_assign: Balance,
    pub assigned: Balance,
    pub underfunded: Balance,
    pub income: Balance,
    /// Spending as a positive number, with credit card payments counted.
    pub expenses: Balance,
}

impl MonthSummary {
    pub fn aggregate(categories: &[Category], totals: &MonthTotals) -> Self {
        let underfunded: Balance = categories
            .iter()
            .filter_map(|c| c.goal_under_funded)
            .map(Balance::from_milliunits)
            .sum();

        // Month activity nets card payments against spending; add them back.
        let mut expenses = -Balance::from_milliunits(totals.activity);
        for category in categories
            .iter()
            .filter(|c| c.group_name == CREDIT_CARD_PAYMENTS_GROUP)
        {
            expenses += Balance::from_milliunits(category.activity);
        }

        Self {
            ready_to_assign: Balance::from_milliunits(totals.to_be_budgeted),
            assigned: Balance::from_milliunits(totals.budgeted),
            underfunded,
            income: Balance::from_milliunits(totals.income),
            expenses,
        }
    }
}
