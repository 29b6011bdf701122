//! View-models for the dashboard summary cards.
//!
//! These are the plain data structures handed to the rendering collaborator:
//! the balance card with the month's income and expenses, and the daily
//! summary card with today's figures and headline sentence.

use serde::Serialize;

use crate::{dashboard::aggregation::Totals, format};

/// The main balance card: all-time balance plus this month's flows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceCard {
    /// All-time income minus all-time expenses.
    pub balance: f64,
    /// Income in the reference month.
    pub month_income: f64,
    /// Expenses in the reference month.
    pub month_expense: f64,
}

impl From<&Totals> for BalanceCard {
    fn from(totals: &Totals) -> Self {
        Self {
            balance: totals.balance,
            month_income: totals.month_income,
            month_expense: totals.month_expense,
        }
    }
}

/// The daily summary card: today's figures and a ready-made headline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummaryCard {
    /// Expenses on the reference day.
    pub today_spent: f64,
    /// Income on the reference day.
    pub today_income: f64,
    /// Number of transactions on the reference day.
    pub today_transaction_count: usize,
    /// The greeting sentence shown under the page title.
    pub headline: String,
}

impl From<&Totals> for DailySummaryCard {
    fn from(totals: &Totals) -> Self {
        Self {
            today_spent: totals.today_spent,
            today_income: totals.today_income,
            today_transaction_count: totals.today_transaction_count,
            headline: headline(totals),
        }
    }
}

fn headline(totals: &Totals) -> String {
    match totals.today_transaction_count {
        0 => "Você ainda não cadastrou gastos hoje.".to_owned(),
        1 => format!(
            "Hoje você registrou 1 transação e gastou {}.",
            format::currency(totals.today_spent)
        ),
        count => format!(
            "Hoje você registrou {count} transações e gastou {}.",
            format::currency(totals.today_spent)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{BalanceCard, DailySummaryCard};
    use crate::dashboard::aggregation::Totals;

    #[test]
    fn balance_card_copies_month_figures() {
        let totals = Totals {
            balance: 2955.0,
            month_income: 3000.0,
            month_expense: 45.0,
            ..Totals::default()
        };

        let card = BalanceCard::from(&totals);

        assert_eq!(card.balance, 2955.0);
        assert_eq!(card.month_income, 3000.0);
        assert_eq!(card.month_expense, 45.0);
    }

    #[test]
    fn headline_uses_singular_for_one_transaction() {
        let totals = Totals {
            today_spent: 45.0,
            today_transaction_count: 1,
            ..Totals::default()
        };

        let card = DailySummaryCard::from(&totals);

        assert_eq!(
            card.headline,
            "Hoje você registrou 1 transação e gastou R$45.00."
        );
    }

    #[test]
    fn headline_uses_plural_for_many_transactions() {
        let totals = Totals {
            today_spent: 120.5,
            today_transaction_count: 3,
            ..Totals::default()
        };

        let card = DailySummaryCard::from(&totals);

        assert_eq!(
            card.headline,
            "Hoje você registrou 3 transações e gastou R$120.50."
        );
    }

    #[test]
    fn headline_notes_when_nothing_was_recorded() {
        let card = DailySummaryCard::from(&Totals::default());

        assert_eq!(card.headline, "Você ainda não cadastrou gastos hoje.");
    }
}
