use crate::accounts::NetWorth;
use crate::money::Balance;
use crate::month::MonthSummary;

/// Combined account and month figures, plus the derived values the
/// narrative report needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub net_worth: NetWorth,
    pub month: MonthSummary,
}

impl Summary {
    pub fn new(net_worth: NetWorth, month: MonthSummary) -> Self {
        Self { net_worth, month }
    }

    /// Replaces the month's income with a forecast figure.
    pub fn with_forecast_income(mut self, income: Balance) -> Self {
        self.month.income = income;
        self
    }

    /// What is left of income once goals are funded and assignments are met.
    pub fn spread(&self) -> Balance {
        self.month.income - self.month.underfunded - self.month.assigned
    }

    pub fn cash(&self) -> Balance {
        self.net_worth.assets.checking + self.net_worth.assets.savings
    }

    /// Property value less what is still owed on mortgages.
    pub fn equity(&self, property_value: Balance) -> Balance {
        property_value + self.net_worth.liabilities.mortgages
    }

    /// Net worth with an off-budget property counted as an other asset.
    pub fn net_worth_with_property(&self, property_value: Balance) -> NetWorth {
        let mut nw = self.net_worth;
        nw.assets.other += property_value;
        nw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::{Account, AccountKind};
    use crate::month::{Category, MonthTotals};

    fn summary() -> Summary {
        let accounts: Vec<Account> = [
            ("checking", 1_500_000),
            ("savings", 10_000_000),
            ("mortgage", -250_000_000),
            ("otherAsset", 40_000_000),
        ]
        .iter()
        .map(|(tag, v)| Account {
            id: tag.to_string(),
            name: tag.to_string(),
            kind: AccountKind::from_tag(tag),
            balance: Balance::from_milliunits(*v),
            closed: false,
        })
        .collect();

        let categories = vec![Category {
            group_name: "Bills".to_string(),
            name: "Rent".to_string(),
            budgeted: 0,
            activity: 0,
            balance: 0,
            goal_under_funded: Some(300_000),
        }];
        let totals = MonthTotals {
            month: "2024-06-01".to_string(),
            to_be_budgeted: 0,
            budgeted: 4_000_000,
            income: 6_000_000,
            activity: -3_000_000,
        };

        Summary::new(
            NetWorth::from_accounts(&accounts),
            MonthSummary::aggregate(&categories, &totals),
        )
    }

    #[test]
    fn spread_subtracts_underfunded_and_assigned() {
        assert_eq!(summary().spread(), Balance::from_milliunits(1_700_000));
    }

    #[test]
    fn forecast_income_replaces_reported_income() {
        let s = summary().with_forecast_income(Balance::from_milliunits(7_410_900));
        assert_eq!(s.month.income.to_string(), "$7,410.90");
        assert_eq!(s.spread(), Balance::from_milliunits(3_110_900));
    }

    #[test]
    fn cash_is_checking_plus_savings() {
        assert_eq!(summary().cash().to_string(), "$11,500.00");
    }

    #[test]
    fn equity_nets_mortgage_against_property() {
        let home = Balance::from_milliunits(330_500_000);
        assert_eq!(summary().equity(home).to_string(), "$80,500.00");
    }

    #[test]
    fn property_counts_as_other_asset() {
        let s = summary();
        let home = Balance::from_milliunits(330_500_000);
        let nw = s.net_worth_with_property(home);

        assert_eq!(nw.assets.other, Balance::from_milliunits(370_500_000));
        assert_eq!(nw.total(), s.net_worth.total() + home);
        // The stored net worth is untouched.
        assert_eq!(s.net_worth.assets.other, Balance::from_milliunits(40_000_000));
    }
}
