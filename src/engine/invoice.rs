//! Invoice transitions.

use chrono::{NaiveDate, Utc};

use crate::error::{EngineError, EngineResult};
use crate::model::{Invoice, InvoiceStatus, LineItem, PaymentTerm, Role};

use InvoiceStatus::{Draft, Paid, Pending};

/// Legal invoice edges. `Draft -> Draft` is the edit-and-save loop.
const EDGES: &[(InvoiceStatus, InvoiceStatus)] =
    &[(Draft, Draft), (Draft, Pending), (Pending, Paid)];

/// Apply a status transition to an invoice, stamping dates from the wall
/// clock where the edge calls for it.
pub fn transition(invoice: &Invoice, target: InvoiceStatus, role: Role) -> EngineResult<Invoice> {
    transition_at(invoice, target, role, Utc::now().date_naive())
}

/// Apply a status transition with an explicit "today".
///
/// The `Draft -> Pending` edge ("approve & send") is the only one with date
/// side effects: the issue date is stamped to `today` and the due date
/// recomputed from the term in effect, overriding any manually set values.
/// That stamping happens on this exact edge only, never on ordinary saves.
pub fn transition_at(
    invoice: &Invoice,
    target: InvoiceStatus,
    role: Role,
    today: NaiveDate,
) -> EngineResult<Invoice> {
    let from = invoice.status;
    if !EDGES.contains(&(from, target)) {
        return Err(EngineError::InvalidTransition {
            entity: "invoice",
            id: invoice.id.clone(),
            detail: format!("{from:?} -> {target:?} is not a legal edge"),
        });
    }
    if !role.is_staff() {
        return Err(EngineError::RoleDenied { role, action: "change an invoice's status" });
    }

    let mut updated = invoice.clone();
    match (from, target) {
        (Draft, Draft) => updated.recompute_amount(),
        (Draft, Pending) => {
            updated.set_issue_date(today);
            updated.recompute_amount();
        }
        (Pending, Paid) => {}
        _ => unreachable!("edge table covers all matches"),
    }
    updated.status = target;
    Ok(updated)
}

/// Replace an invoice's line items, recomputing the total.
///
/// Items are only editable while the invoice is a draft; once sent, the
/// billed amount is fixed.
pub fn edit_items(invoice: &Invoice, items: Vec<LineItem>, role: Role) -> EngineResult<Invoice> {
    if !role.is_staff() {
        return Err(EngineError::RoleDenied { role, action: "edit an invoice" });
    }
    if invoice.status != Draft {
        return Err(EngineError::InvalidTransition {
            entity: "invoice",
            id: invoice.id.clone(),
            detail: format!("line items are frozen in {:?}", invoice.status),
        });
    }

    let mut updated = invoice.clone();
    updated.set_items(items);
    Ok(updated)
}

/// Change a draft invoice's payment term; the due date follows.
pub fn set_term(
    invoice: &Invoice,
    term: PaymentTerm,
    role: Role,
) -> EngineResult<Invoice> {
    if !role.is_staff() {
        return Err(EngineError::RoleDenied { role, action: "edit an invoice" });
    }
    if invoice.status != Draft {
        return Err(EngineError::InvalidTransition {
            entity: "invoice",
            id: invoice.id.clone(),
            detail: format!("payment term is frozen in {:?}", invoice.status),
        });
    }

    let mut updated = invoice.clone();
    updated.set_term(term);
    Ok(updated)
}
