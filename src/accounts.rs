use crate::money::Balance;
use std::collections::HashMap;
use std::fmt;

/// Account type as reported by the API's `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccountKind {
    Cash,
    Checking,
    Savings,
    OtherAsset,
    AutoLoan,
    CreditCard,
    StudentLoan,
    Mortgage,
    LineOfCredit,
    PersonalLoan,
    MedicalDebt,
    OtherLiability,
    OtherDebt,
    /// A type tag this client does not classify. Kept verbatim for display.
    Unknown(String),
}

impl AccountKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "cash" => Self::Cash,
            "checking" => Self::Checking,
            "savings" => Self::Savings,
            "otherAsset" => Self::OtherAsset,
            "autoLoan" => Self::AutoLoan,
            "creditCard" => Self::CreditCard,
            "studentLoan" => Self::StudentLoan,
            "mortgage" => Self::Mortgage,
            "lineOfCredit" => Self::LineOfCredit,
            "personalLoan" => Self::PersonalLoan,
            "medicalDebt" => Self::MedicalDebt,
            "otherLiability" => Self::OtherLiability,
            "otherDebt" => Self::OtherDebt,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::Cash => "cash",
            Self::Checking => "checking",
            Self::Savings => "savings",
            Self::OtherAsset => "otherAsset",
            Self::AutoLoan => "autoLoan",
            Self::CreditCard => "creditCard",
            Self::StudentLoan => "studentLoan",
            Self::Mortgage => "mortgage",
            Self::LineOfCredit => "lineOfCredit",
            Self::PersonalLoan => "personalLoan",
            Self::MedicalDebt => "medicalDebt",
            Self::OtherLiability => "otherLiability",
            Self::OtherDebt => "otherDebt",
            Self::Unknown(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// An open account decoded from an API snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub kind: AccountKind,
    pub balance: Balance,
    pub closed: bool,
}

/// Lookup of accounts by display name, rebuilt for every report run.
///
/// When two accounts share a name the one inserted last wins.
#[derive(Debug, Clone, Default)]
pub struct AccountIndex {
    by_name: HashMap<String, Account>,
}

impl AccountIndex {
    pub fn build<'a>(accounts: impl IntoIterator<Item = &'a Account>) -> Self {
        let mut index = Self::default();
        for account in accounts {
            index.insert(account.clone());
        }
        index
    }

    pub fn insert(&mut self, account: Account) -> Option<Account> {
        self.by_name.insert(account.name.clone(), account)
    }

    pub fn get(&self, name: &str) -> Option<&Account> {
        self.by_name.get(name)
    }

    /// Balance of the named account, zero when no account has that name.
    pub fn balance(&self, name: &str) -> Balance {
        self.get(name).map(|a| a.balance).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Assets {
    pub cash: Balance,
    pub checking: Balance,
    pub savings: Balance,
    /// IRA/HSA/401k and similar tracked assets.
    pub other: Balance,
}

impl Assets {
    pub fn total(&self) -> Balance {
        self.cash + self.checking + self.savings + self.other
    }
}

/// Debt totals. Balances are negative, as the API reports them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Liabilities {
    pub auto_loans: Balance,
    pub credit_cards: Balance,
    pub student_loans: Balance,
    pub mortgages: Balance,
    pub lines_of_credit: Balance,
    pub personal_loans: Balance,
    pub medical_debt: Balance,
    pub other: Balance,
}

impl Liabilities {
    pub fn total(&self) -> Balance {
        self.auto_loans
            + self.credit_cards
            + self.student_loans
            + self.mortgages
            + self.lines_of_credit
            + self.personal_loans
            + self.medical_debt
            + self.other
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetWorth {
    pub assets: Assets,
    pub liabilities: Liabilities,
}

impl NetWorth {
    /// Buckets every account by type. Unrecognized types contribute nothing.
    pub fn from_accounts(accounts: &[Account]) -> Self {
        let mut nw = Self::default();
        for account in accounts {
            let bucket = match account.kind {
                AccountKind::Cash => &mut nw.assets.cash,
                AccountKind::Checking => &mut nw.assets.checking,
                AccountKind::Savings => &mut nw.assets.savings,
                AccountKind::OtherAsset => &mut nw.assets.other,
                AccountKind::AutoLoan => &mut nw.liabilities.auto_loans,
                AccountKind::CreditCard => &mut nw.liabilities.credit_cards,
                AccountKind::StudentLoan => &mut nw.liabilities.student_loans,
                AccountKind::Mortgage => &mut nw.liabilities.mortgages,
                AccountKind::LineOfCredit => &mut nw.liabilities.lines_of_credit,
                AccountKind::PersonalLoan => &mut nw.liabilities.personal_loans,
                AccountKind::MedicalDebt => &mut nw.liabilities.medical_debt,
                AccountKind::OtherLiability | AccountKind::OtherDebt => {
                    &mut nw.liabilities.other
                }
                AccountKind::Unknown(_) => continue,
            };
            *bucket += account.balance;
        }
        nw
    }

    pub fn total(&self) -> Balance {
        self.assets.total() + self.liabilities.total()
    }
}

/// Accounts whose type tag was not recognized and so were left out of [`NetWorth`].
pub fn unclassified(accounts: &[Account]) -> Vec<&Account> {
    accounts.iter().filter(|a| !a.kind.is_known()).collect()
}
