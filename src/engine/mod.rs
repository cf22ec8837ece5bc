//! Status transition engine.
//!
//! The only writer of entity `status` fields. Each entity type carries an
//! explicit edge table; a requested transition that is not in the table is
//! rejected with `InvalidTransition` and the store is left untouched. Side
//! effects (date stamping, feedback appends) are bound to their exact edge,
//! never to "every save".
//!
//! All functions here are pure `(entity, target, role) -> Result<updated>`;
//! callers swap the result back into the [`crate::store::EntityStore`].

mod invoice;
mod project;
mod proposal;
mod strategy;
mod task;

pub use invoice::{
    edit_items, set_term as set_invoice_term, transition as transition_invoice,
    transition_at as transition_invoice_at,
};
pub use project::{set_archived as set_project_archived, transition as transition_project};
pub use proposal::{edit_content, transition as transition_proposal};
pub use strategy::{
    approve, go_live, request_modification, resubmit, submit_for_approval,
};
pub use task::{
    add_checklist_item, file_inspection, set_archived as set_task_archived,
    set_status as set_task_status, update_checklist_item,
};
