//! Invoice records.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    /// Being assembled; line items editable
    Draft,
    /// Approved and sent; awaiting payment
    Pending,
    /// Payment received; terminal for payment purposes
    Paid,
}

/// Payment term: offset in days from issue date to due date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentTerm {
    /// Due on the issue date
    Immediate,
    /// Due 14 days after issue
    Net14,
    /// Due 30 days after issue
    #[default]
    Net30,
}

impl PaymentTerm {
    /// Days between issue date and due date under this term.
    pub fn offset_days(self) -> u64 {
        match self {
            PaymentTerm::Immediate => 0,
            PaymentTerm::Net14 => 14,
            PaymentTerm::Net30 => 30,
        }
    }
}

impl fmt::Display for PaymentTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentTerm::Immediate => write!(f, "immediate"),
            PaymentTerm::Net14 => write!(f, "net-14"),
            PaymentTerm::Net30 => write!(f, "net-30"),
        }
    }
}

/// A single billable line on an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// What is being billed
    pub description: String,

    /// Cost in currency units
    pub cost: f64,
}

/// An invoice issued to a client.
///
/// `amount` always equals the sum of line item costs at the moment of the
/// last save; `due_date` always reflects `issue_date` plus the current term.
/// Mutating methods below maintain both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier
    pub id: String,

    /// Originating proposal, if any (weak reference, not ownership)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposal_id: Option<String>,

    /// Billing name of the client
    pub client_name: String,

    /// Billable lines, in order
    pub items: Vec<LineItem>,

    /// Total amount; always the sum of `items`
    pub amount: f64,

    /// Date the invoice was (or will be) issued
    pub issue_date: NaiveDate,

    /// Date payment is due; always `issue_date` + term offset
    pub due_date: NaiveDate,

    /// Payment term in effect
    pub term: PaymentTerm,

    /// Current lifecycle status
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Create a new draft invoice with no line items.
    pub fn new(client_name: impl Into<String>, term: PaymentTerm, issue_date: NaiveDate) -> Self {
        Self {
            id: super::generate_id("inv"),
            proposal_id: None,
            client_name: client_name.into(),
            items: Vec::new(),
            amount: 0.0,
            issue_date,
            due_date: due_date_for(issue_date, term),
            term,
            status: InvoiceStatus::Draft,
        }
    }

    /// Link this invoice to the proposal it bills for.
    pub fn for_proposal(mut self, proposal_id: impl Into<String>) -> Self {
        self.proposal_id = Some(proposal_id.into());
        self
    }

    /// Replace the line items, recomputing the total.
    pub fn set_items(&mut self, items: Vec<LineItem>) {
        self.items = items;
        self.recompute_amount();
    }

    /// Recompute `amount` from the current line items.
    pub fn recompute_amount(&mut self) {
        self.amount = self.items.iter().map(|item| item.cost).sum();
    }

    /// Change the issue date, recomputing the due date.
    pub fn set_issue_date(&mut self, issue_date: NaiveDate) {
        self.issue_date = issue_date;
        self.due_date = due_date_for(issue_date, self.term);
    }

    /// Change the payment term, recomputing the due date.
    pub fn set_term(&mut self, term: PaymentTerm) {
        self.term = term;
        self.due_date = due_date_for(self.issue_date, term);
    }
}

/// Due date for an issue date under a payment term.
pub fn due_date_for(issue_date: NaiveDate, term: PaymentTerm) -> NaiveDate {
    issue_date
        .checked_add_days(Days::new(term.offset_days()))
        .unwrap_or(issue_date)
}
