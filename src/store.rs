//! In-memory entity store.
//!
//! Owns the entity collections and nothing else: get, list, add, replace,
//! remove. Business rules live in [`crate::engine`] and [`crate::gates`].
//!
//! Mutation discipline is "read, copy, replace": callers take a clone, build
//! the updated entity, and swap it back in by id. The store never hands out
//! interior mutability, which is what lets the board and timeline engines be
//! pure read-side projections.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::model::{Invoice, Organization, Project, Proposal, Task};

/// All entity collections, in insertion order.
///
/// Tasks are the one exception to plain push ordering: new tasks are
/// inserted at the front so board columns list most-recently-created first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityStore {
    organizations: Vec<Organization>,
    proposals: Vec<Proposal>,
    invoices: Vec<Invoice>,
    projects: Vec<Project>,
    tasks: Vec<Task>,
}

impl EntityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Organizations -----------------------------------------------------

    /// Look up an organization by id.
    pub fn organization(&self, id: &str) -> Option<&Organization> {
        self.organizations.iter().find(|o| o.id == id)
    }

    /// All organizations.
    pub fn organizations(&self) -> &[Organization] {
        &self.organizations
    }

    /// Register an organization.
    pub fn add_organization(&mut self, org: Organization) {
        self.organizations.push(org);
    }

    // --- Proposals ---------------------------------------------------------

    /// Look up a proposal by id.
    pub fn proposal(&self, id: &str) -> Option<&Proposal> {
        self.proposals.iter().find(|p| p.id == id)
    }

    /// All proposals.
    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    /// Add a proposal.
    pub fn add_proposal(&mut self, proposal: Proposal) {
        self.proposals.push(proposal);
    }

    /// Replace a proposal by id.
    pub fn replace_proposal(&mut self, proposal: Proposal) -> EngineResult<()> {
        match self.proposals.iter_mut().find(|p| p.id == proposal.id) {
            Some(slot) => {
                *slot = proposal;
                Ok(())
            }
            None => Err(EngineError::not_found("proposal", proposal.id)),
        }
    }

    /// Remove a proposal. Does not cascade: invoices hold only a weak
    /// reference and survive.
    pub fn remove_proposal(&mut self, id: &str) -> EngineResult<Proposal> {
        match self.proposals.iter().position(|p| p.id == id) {
            Some(index) => Ok(self.proposals.remove(index)),
            None => Err(EngineError::not_found("proposal", id)),
        }
    }

    // --- Invoices ----------------------------------------------------------

    /// Look up an invoice by id.
    pub fn invoice(&self, id: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|i| i.id == id)
    }

    /// All invoices.
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Add an invoice.
    pub fn add_invoice(&mut self, invoice: Invoice) {
        self.invoices.push(invoice);
    }

    /// Replace an invoice by id.
    pub fn replace_invoice(&mut self, invoice: Invoice) -> EngineResult<()> {
        match self.invoices.iter_mut().find(|i| i.id == invoice.id) {
            Some(slot) => {
                *slot = invoice;
                Ok(())
            }
            None => Err(EngineError::not_found("invoice", invoice.id)),
        }
    }

    /// Remove an invoice.
    pub fn remove_invoice(&mut self, id: &str) -> EngineResult<Invoice> {
        match self.invoices.iter().position(|i| i.id == id) {
            Some(index) => Ok(self.invoices.remove(index)),
            None => Err(EngineError::not_found("invoice", id)),
        }
    }

    // --- Projects ----------------------------------------------------------

    /// Look up a project by id.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// All projects.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Add a project.
    pub fn add_project(&mut self, project: Project) {
        self.projects.push(project);
    }

    /// Replace a project by id.
    pub fn replace_project(&mut self, project: Project) -> EngineResult<()> {
        match self.projects.iter_mut().find(|p| p.id == project.id) {
            Some(slot) => {
                *slot = project;
                Ok(())
            }
            None => Err(EngineError::not_found("project", project.id)),
        }
    }

    /// Remove a project, cascade-deleting its tasks.
    pub fn remove_project(&mut self, id: &str) -> EngineResult<Project> {
        match self.projects.iter().position(|p| p.id == id) {
            Some(index) => {
                let project = self.projects.remove(index);
                self.tasks.retain(|t| t.project_id != project.id);
                Ok(project)
            }
            None => Err(EngineError::not_found("project", id)),
        }
    }

    // --- Tasks -------------------------------------------------------------

    /// Look up a task by id.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// All tasks, most recently added first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks belonging to a project, in list order.
    pub fn tasks_for_project(&self, project_id: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.project_id == project_id).collect()
    }

    /// Add a task at the front of the list (newest first).
    pub fn add_task(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    /// Replace a task by id.
    pub fn replace_task(&mut self, task: Task) -> EngineResult<()> {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                *slot = task;
                Ok(())
            }
            None => Err(EngineError::not_found("task", task.id)),
        }
    }

    /// Remove a task.
    pub fn remove_task(&mut self, id: &str) -> EngineResult<Task> {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(index) => Ok(self.tasks.remove(index)),
            None => Err(EngineError::not_found("task", id)),
        }
    }
}
