//! Cross-entity gates.
//!
//! Derived booleans computed by joining entities at read time. Gates are
//! never stored and never mutate anything; callers recompute them on every
//! check.

use crate::model::{InvoiceStatus, MarketingStrategy, StrategyStatus};
use crate::store::EntityStore;

/// Fuzzy-match tolerance for the payment gate, in currency units.
///
/// An invoice raised independently of its proposal (no `proposal_id` link)
/// still counts as payment when its total lands within this distance of the
/// proposal's upfront amount. This is a deliberate heuristic bridging
/// manually created invoices, not a strict identity check; the value is an
/// inherited business rule, not something to tighten without product input.
pub const AMOUNT_TOLERANCE: f64 = 100.0;

/// Whether a proposal's upfront payment has been received.
///
/// Two tiers, first match wins:
/// 1. exact: a `Paid` invoice referencing this proposal by id;
/// 2. fuzzy: a `Paid` invoice billed to the same client name whose amount
///    is within [`AMOUNT_TOLERANCE`] of the proposal's upfront amount.
pub fn is_proposal_paid(store: &EntityStore, proposal_id: &str) -> bool {
    is_proposal_paid_within(store, proposal_id, AMOUNT_TOLERANCE)
}

/// [`is_proposal_paid`] with an explicit fuzzy tolerance.
pub fn is_proposal_paid_within(store: &EntityStore, proposal_id: &str, tolerance: f64) -> bool {
    let Some(proposal) = store.proposal(proposal_id) else {
        return false;
    };

    let exact = store
        .invoices()
        .iter()
        .any(|inv| inv.status == InvoiceStatus::Paid && inv.proposal_id.as_deref() == Some(proposal_id));
    if exact {
        return true;
    }

    let Some(org) = store.organization(&proposal.client_id) else {
        return false;
    };
    store.invoices().iter().any(|inv| {
        inv.status == InvoiceStatus::Paid
            && inv.client_name == org.name
            && (inv.amount - proposal.upfront_amount).abs() < tolerance
    })
}

/// Whether a strategy may be initialized for this proposal.
///
/// True exactly when the upfront payment has cleared and no strategy exists
/// yet. Once a strategy is attached the stage stays unlocked for good:
/// later invoice edits never re-lock it, because the gate is only consulted
/// for initialization.
pub fn can_initialize_strategy(store: &EntityStore, proposal_id: &str) -> bool {
    let Some(proposal) = store.proposal(proposal_id) else {
        return false;
    };
    proposal.marketing.is_none() && is_proposal_paid(store, proposal_id)
}

/// Whether the strategy stage is unlocked for this proposal at all.
///
/// Open once a strategy exists, or once payment has cleared.
pub fn strategy_unlocked(store: &EntityStore, proposal_id: &str) -> bool {
    store
        .proposal(proposal_id)
        .is_some_and(|p| p.marketing.is_some())
        || is_proposal_paid(store, proposal_id)
}

/// Whether a client-role viewer may see this strategy's content.
///
/// While staff are still drafting or awaiting internal sign-off the client
/// sees a locked placeholder, never partial content.
pub fn client_can_view_strategy(strategy: &MarketingStrategy) -> bool {
    !matches!(strategy.status, StrategyStatus::Drafting | StrategyStatus::PendingApproval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Invoice, LineItem, Organization, PaymentTerm, Proposal, StrategyContent,
    };
    use chrono::Utc;

    fn store_with_proposal(upfront: f64) -> (EntityStore, String) {
        let mut store = EntityStore::new();
        let org = Organization::new("Acme", "Retail");
        let org_id = org.id.clone();
        store.add_organization(org);

        let proposal = Proposal::new(org_id, vec![]).with_amounts(upfront, 0.0);
        let proposal_id = proposal.id.clone();
        store.add_proposal(proposal);
        (store, proposal_id)
    }

    fn paid_invoice(client_name: &str, amount: f64) -> Invoice {
        let mut invoice =
            Invoice::new(client_name, PaymentTerm::Immediate, Utc::now().date_naive());
        invoice.set_items(vec![LineItem { description: "Upfront".to_string(), cost: amount }]);
        invoice.status = InvoiceStatus::Paid;
        invoice
    }

    #[test]
    fn test_unpaid_proposal_is_locked() {
        let (store, proposal_id) = store_with_proposal(5000.0);
        assert!(!is_proposal_paid(&store, &proposal_id));
        assert!(!can_initialize_strategy(&store, &proposal_id));
    }

    #[test]
    fn test_exact_match_tier() {
        let (mut store, proposal_id) = store_with_proposal(5000.0);
        // Wrong name and wrong amount, but linked by id
        let invoice = paid_invoice("Completely Different Name", 9999.0).for_proposal(&proposal_id);
        store.add_invoice(invoice);

        assert!(is_proposal_paid(&store, &proposal_id));
    }

    #[test]
    fn test_fuzzy_match_within_tolerance() {
        let (mut store, proposal_id) = store_with_proposal(5000.0);
        // No proposal link; same client name, 50 units off
        store.add_invoice(paid_invoice("Acme", 5050.0));

        assert!(is_proposal_paid(&store, &proposal_id));
    }

    #[test]
    fn test_fuzzy_match_outside_tolerance() {
        let (mut store, proposal_id) = store_with_proposal(5000.0);
        store.add_invoice(paid_invoice("Acme", 5200.0));

        assert!(!is_proposal_paid(&store, &proposal_id));
    }

    #[test]
    fn test_fuzzy_match_requires_same_client_name() {
        let (mut store, proposal_id) = store_with_proposal(5000.0);
        store.add_invoice(paid_invoice("Other Co", 5000.0));

        assert!(!is_proposal_paid(&store, &proposal_id));
    }

    #[test]
    fn test_unpaid_invoice_does_not_open_gate() {
        let (mut store, proposal_id) = store_with_proposal(5000.0);
        let mut invoice = paid_invoice("Acme", 5000.0).for_proposal(&proposal_id);
        invoice.status = InvoiceStatus::Pending;
        store.add_invoice(invoice);

        assert!(!is_proposal_paid(&store, &proposal_id));
    }

    #[test]
    fn test_gate_stays_open_after_strategy_exists() {
        let (mut store, proposal_id) = store_with_proposal(5000.0);
        store.add_invoice(paid_invoice("Acme", 5000.0).for_proposal(&proposal_id));
        assert!(can_initialize_strategy(&store, &proposal_id));

        let mut proposal = store.proposal(&proposal_id).unwrap().clone();
        proposal.marketing = Some(MarketingStrategy::new(StrategyContent::default()));
        store.replace_proposal(proposal).unwrap();

        // Initialization is one-shot, but the stage itself never re-locks,
        // even if every invoice disappears afterwards.
        assert!(!can_initialize_strategy(&store, &proposal_id));
        let invoice_ids: Vec<String> =
            store.invoices().iter().map(|i| i.id.clone()).collect();
        for id in invoice_ids {
            store.remove_invoice(&id).unwrap();
        }
        assert!(strategy_unlocked(&store, &proposal_id));
    }

    #[test]
    fn test_client_visibility_by_status() {
        let mut strategy = MarketingStrategy::new(StrategyContent::default());
        for (status, expected) in [
            (StrategyStatus::Drafting, false),
            (StrategyStatus::PendingApproval, false),
            (StrategyStatus::Approved, true),
            (StrategyStatus::ModificationRequested, true),
            (StrategyStatus::Live, true),
        ] {
            strategy.status = status;
            assert_eq!(client_can_view_strategy(&strategy), expected, "{status:?}");
        }
    }
}
