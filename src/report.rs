use std::io::{self, Write};

use crate::accounts::{Account, AccountIndex, NetWorth};
use crate::money::Balance;
use crate::month::MonthSummary;
use crate::summary::Summary;

pub fn write_accounts(out: &mut impl Write, accounts: &[Account]) -> io::Result<()> {
    if accounts.is_empty() {
        writeln!(out, "(no open accounts)")?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = accounts
        .iter()
        .map(|a| vec![a.name.clone(), a.kind.to_string(), a.balance.to_string()])
        .collect();
    write_table(out, &["Account", "Type", "Balance"], &rows)
}

pub fn write_month(out: &mut impl Write, month: &MonthSummary) -> io::Result<()> {
    writeln!(out, "Ready to Assign: {}", month.ready_to_assign)?;
    writeln!(out, "Assigned: {}", month.assigned)?;
    writeln!(out, "Underfunded: {}", month.underfunded)?;
    writeln!(out, "Income: {}", month.income)?;
    writeln!(out, "Expenses: {}", month.expenses)?;
    Ok(())
}

pub fn write_net_worth(out: &mut impl Write, nw: &NetWorth, unclassified: usize) -> io::Result<()> {
    let a = &nw.assets;
    let l = &nw.liabilities;
    let rows: Vec<Vec<String>> = [
        ("Cash", a.cash),
        ("Checking", a.checking),
        ("Savings", a.savings),
        ("Other assets", a.other),
        ("Total assets", a.total()),
        ("Auto loans", l.auto_loans),
        ("Credit cards", l.credit_cards),
        ("Student loans", l.student_loans),
        ("Mortgages", l.mortgages),
        ("Lines of credit", l.lines_of_credit),
        ("Personal loans", l.personal_loans),
        ("Medical debt", l.medical_debt),
        ("Other liabilities", l.other),
        ("Total liabilities", l.total()),
    ]
    .iter()
    .map(|(label, value)| vec![label.to_string(), value.to_string()])
    .collect();

    write_table(out, &["Bucket", "Balance"], &rows)?;
    writeln!(out)?;
    writeln!(out, "Net Worth: {}", nw.total())?;
    if unclassified > 0 {
        writeln!(out, "Unclassified accounts (not counted): {unclassified}")?;
    }
    Ok(())
}

/// Inputs to the narrative report that come from the command line rather
/// than the API.
#[derive(Debug, Clone, Default)]
pub struct SummaryOptions {
    pub home_value: Option<Balance>,
    pub tracked: Vec<String>,
}

pub fn write_summary(
    out: &mut impl Write,
    summary: &Summary,
    index: &AccountIndex,
    opts: &SummaryOptions,
) -> io::Result<()> {
    let home = opts.home_value.unwrap_or_default();
    let nw = summary.net_worth_with_property(home);
    let liabilities = &summary.net_worth.liabilities;

    writeln!(out, "Our Net Worth is {}.", nw.total())?;
    writeln!(out)?;
    writeln!(out, "We have {} cash in our bank accounts.", summary.cash())?;
    for name in &opts.tracked {
        match index.get(name) {
            Some(account) => writeln!(out, "We have {} in {name}.", account.balance)?,
            None => writeln!(out, "No open account named {name}.")?,
        }
    }
    if opts.home_value.is_some() {
        writeln!(out, "We have {} equity in our home.", summary.equity(home))?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "We need an additional {} to fund this month. At the end of the month, we will have roughly {} remaining. Unplanned purchases are not accounted for in this estimate.",
        summary.month.underfunded,
        summary.spread()
    )?;
    writeln!(out)?;
    writeln!(out, "We have {} remaining on our mortgage.", -liabilities.mortgages)?;
    writeln!(out, "We have {} in student loans.", -liabilities.student_loans)?;
    writeln!(out, "We have {} in auto loans.", -liabilities.auto_loans)?;
    Ok(())
}

fn write_table(out: &mut impl Write, headers: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
    let cols = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().take(cols).enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    write_row(out, &header_cells, &widths)?;
    write!(out, "|")?;
    for w in &widths {
        write!(out, "{}|", "-".repeat(w + 2))?;
    }
    writeln!(out)?;
    for row in rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row(out: &mut impl Write, cells: &[String], widths: &[usize]) -> io::Result<()> {
    write!(out, "|")?;
    for (i, w) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        write!(out, " {:width$} |", cell, width = *w)?;
    }
    writeln!(out)
}
