//! Workspace façade.
//!
//! Ties the store, the transition engine, the gates and the generation
//! adapter together into the operations a UI actually calls. Every
//! mutation goes read-copy-replace through the store; every failure comes
//! back as an [`EngineResult`] explaining the refusal, never a partial
//! write.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::config::EngineConfig;
use crate::engine;
use crate::error::{EngineError, EngineResult};
use crate::genai::{generate_or_default, ContentKind, ContentProvider, GeneratedContent, InvoiceEmail};
use crate::model::{
    InspectionReport, Invoice, InvoiceStatus, LineItem, MarketingStrategy, Organization,
    PaymentTerm, Project, ProjectStatus, Proposal, ProposalContent, ProposalStatus, Role,
    StrategyContent, Task, TaskStatus,
};
use crate::store::EntityStore;
use crate::{board, gates, timeline};

/// A complete pipeline workspace: one store plus its configuration.
#[derive(Debug, Default)]
pub struct Workspace {
    store: EntityStore,
    config: EngineConfig,
}

impl Workspace {
    /// Create an empty workspace with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a workspace with explicit configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { store: EntityStore::new(), config }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // --- Organizations -----------------------------------------------------

    /// Register a client organization (admin tooling hands these in).
    pub fn add_organization(&mut self, org: Organization) {
        self.store.add_organization(org);
    }

    // --- Proposals ---------------------------------------------------------

    /// Create a draft proposal. Staff only.
    pub fn create_proposal(
        &mut self,
        client_id: &str,
        services: Vec<String>,
        upfront: f64,
        retainer: f64,
        role: Role,
    ) -> EngineResult<String> {
        if !role.is_staff() {
            return Err(EngineError::RoleDenied { role, action: "create a proposal" });
        }
        if self.store.organization(client_id).is_none() {
            return Err(EngineError::not_found("organization", client_id));
        }
        let proposal = Proposal::new(client_id, services).with_amounts(upfront, retainer);
        let id = proposal.id.clone();
        self.store.add_proposal(proposal);
        Ok(id)
    }

    /// Replace a proposal's content while it is still editable.
    pub fn edit_proposal(
        &mut self,
        proposal_id: &str,
        content: ProposalContent,
        upfront: f64,
        retainer: f64,
        role: Role,
    ) -> EngineResult<()> {
        let proposal = self.proposal(proposal_id)?;
        let updated = engine::edit_content(proposal, content, upfront, retainer, role)?;
        self.store.replace_proposal(updated)
    }

    /// Generate proposal content from the client's profile, substituting
    /// empty content if the provider is degraded.
    pub async fn generate_proposal_content(
        &mut self,
        proposal_id: &str,
        provider: &dyn ContentProvider,
        role: Role,
    ) -> EngineResult<()> {
        let proposal = self.proposal(proposal_id)?.clone();
        let context = self.client_context(&proposal);
        let generated = generate_or_default(provider, ContentKind::Proposal, &context).await;
        let content = match generated {
            GeneratedContent::Proposal(content) => content,
            _ => ProposalContent::default(),
        };
        let updated = engine::edit_content(
            &proposal,
            content,
            proposal.upfront_amount,
            proposal.retainer_amount,
            role,
        )?;
        self.store.replace_proposal(updated)
    }

    /// Send a proposal to the client. Staff only.
    pub fn send_proposal(&mut self, proposal_id: &str, role: Role) -> EngineResult<()> {
        self.transition_proposal(proposal_id, ProposalStatus::SentToClient, role)
    }

    /// Accept a proposal. Client only; terminal.
    pub fn accept_proposal(&mut self, proposal_id: &str, role: Role) -> EngineResult<()> {
        self.transition_proposal(proposal_id, ProposalStatus::Accepted, role)
    }

    fn transition_proposal(
        &mut self,
        proposal_id: &str,
        target: ProposalStatus,
        role: Role,
    ) -> EngineResult<()> {
        let proposal = self.proposal(proposal_id)?;
        let updated = engine::transition_proposal(proposal, target, role)?;
        self.store.replace_proposal(updated)
    }

    /// Delete a proposal. Invoices keep their weak reference and survive.
    pub fn delete_proposal(&mut self, proposal_id: &str, role: Role) -> EngineResult<()> {
        if !role.is_staff() {
            return Err(EngineError::RoleDenied { role, action: "delete a proposal" });
        }
        self.store.remove_proposal(proposal_id).map(|_| ())
    }

    // --- Invoices ----------------------------------------------------------

    /// Create a draft invoice, optionally linked to a proposal. Uses the
    /// configured default payment term and today's date.
    pub fn create_invoice(
        &mut self,
        client_name: &str,
        proposal_id: Option<&str>,
        role: Role,
    ) -> EngineResult<String> {
        if !role.is_staff() {
            return Err(EngineError::RoleDenied { role, action: "create an invoice" });
        }
        let mut invoice = Invoice::new(
            client_name,
            self.config.billing.default_term,
            Utc::now().date_naive(),
        );
        if let Some(proposal_id) = proposal_id {
            if self.store.proposal(proposal_id).is_none() {
                return Err(EngineError::not_found("proposal", proposal_id));
            }
            invoice = invoice.for_proposal(proposal_id);
        }
        let id = invoice.id.clone();
        self.store.add_invoice(invoice);
        Ok(id)
    }

    /// Replace a draft invoice's line items; the total is recomputed.
    pub fn edit_invoice_items(
        &mut self,
        invoice_id: &str,
        items: Vec<LineItem>,
        role: Role,
    ) -> EngineResult<()> {
        let invoice = self.invoice(invoice_id)?;
        let updated = engine::edit_items(invoice, items, role)?;
        self.store.replace_invoice(updated)
    }

    /// Change a draft invoice's payment term; the due date follows.
    pub fn set_invoice_term(
        &mut self,
        invoice_id: &str,
        term: PaymentTerm,
        role: Role,
    ) -> EngineResult<()> {
        let invoice = self.invoice(invoice_id)?;
        let updated = engine::set_invoice_term(invoice, term, role)?;
        self.store.replace_invoice(updated)
    }

    /// Approve & send: stamps the issue date to today and recomputes the
    /// due date from the term in effect.
    pub fn approve_and_send_invoice(&mut self, invoice_id: &str, role: Role) -> EngineResult<()> {
        let invoice = self.invoice(invoice_id)?;
        let updated = engine::transition_invoice(invoice, InvoiceStatus::Pending, role)?;
        self.store.replace_invoice(updated)
    }

    /// Record payment of a pending invoice.
    pub fn mark_invoice_paid(&mut self, invoice_id: &str, role: Role) -> EngineResult<()> {
        let invoice = self.invoice(invoice_id)?;
        let updated = engine::transition_invoice(invoice, InvoiceStatus::Paid, role)?;
        self.store.replace_invoice(updated)
    }

    /// Draft a cover email for an invoice, falling back to an empty draft
    /// when the provider is degraded. Never blocks any other operation.
    pub async fn draft_invoice_email(
        &self,
        invoice_id: &str,
        provider: &dyn ContentProvider,
    ) -> EngineResult<InvoiceEmail> {
        let invoice = self.invoice(invoice_id)?;
        let context = json!({
            "client_name": invoice.client_name,
            "amount": invoice.amount,
            "due_date": invoice.due_date,
            "items": invoice.items,
        });
        let generated = generate_or_default(provider, ContentKind::InvoiceEmail, &context).await;
        match generated {
            GeneratedContent::InvoiceEmail(email) => Ok(email),
            _ => Ok(InvoiceEmail::default()),
        }
    }

    // --- Gates -------------------------------------------------------------

    /// Whether the proposal's upfront payment has been received, using the
    /// configured fuzzy tolerance.
    pub fn is_proposal_paid(&self, proposal_id: &str) -> bool {
        gates::is_proposal_paid_within(
            &self.store,
            proposal_id,
            self.config.billing.match_tolerance,
        )
    }

    /// Whether a strategy may be initialized for this proposal right now.
    pub fn can_initialize_strategy(&self, proposal_id: &str) -> bool {
        self.store
            .proposal(proposal_id)
            .is_some_and(|p| p.marketing.is_none())
            && self.is_proposal_paid(proposal_id)
    }

    // --- Strategies --------------------------------------------------------

    /// Initialize the marketing strategy for a paid proposal.
    ///
    /// Generates the narrative (or substitutes the default when the
    /// provider is degraded) and attaches the strategy in
    /// `PendingApproval` - generation and submission are one motion.
    pub async fn initialize_strategy(
        &mut self,
        proposal_id: &str,
        provider: &dyn ContentProvider,
        role: Role,
    ) -> EngineResult<()> {
        if !role.is_staff() {
            return Err(EngineError::RoleDenied { role, action: "initialize a strategy" });
        }
        let proposal = self.proposal(proposal_id)?.clone();
        if proposal.marketing.is_some() {
            return Err(EngineError::GateClosed {
                proposal_id: proposal_id.to_string(),
                reason: "a strategy already exists".to_string(),
            });
        }
        if !self.is_proposal_paid(proposal_id) {
            return Err(EngineError::GateClosed {
                proposal_id: proposal_id.to_string(),
                reason: "upfront invoice is not paid".to_string(),
            });
        }

        let context = self.client_context(&proposal);
        let generated = generate_or_default(provider, ContentKind::Strategy, &context).await;
        let content = match generated {
            GeneratedContent::Strategy(content) => content,
            _ => StrategyContent::default(),
        };

        let strategy = MarketingStrategy::new(content);
        let submitted = engine::submit_for_approval(&strategy, role)?;

        let mut updated = proposal;
        updated.marketing = Some(submitted);
        self.store.replace_proposal(updated)
    }

    /// Internal sign-off: `PendingApproval -> Approved`. Staff only.
    pub fn approve_strategy(&mut self, proposal_id: &str, role: Role) -> EngineResult<()> {
        self.with_strategy(proposal_id, |strategy| engine::approve(strategy, role))
    }

    /// Client acceptance: `Approved -> Live`. Terminal.
    pub fn strategy_go_live(&mut self, proposal_id: &str, role: Role) -> EngineResult<()> {
        self.with_strategy(proposal_id, |strategy| engine::go_live(strategy, role))
    }

    /// Client rejection with feedback: `Approved -> ModificationRequested`.
    pub fn request_strategy_modification(
        &mut self,
        proposal_id: &str,
        note: &str,
        author: &str,
        role: Role,
    ) -> EngineResult<()> {
        self.with_strategy(proposal_id, |strategy| {
            engine::request_modification(strategy, note, author, role)
        })
    }

    /// Staff resubmission: `ModificationRequested -> Approved`.
    pub fn resubmit_strategy(
        &mut self,
        proposal_id: &str,
        content: StrategyContent,
        role: Role,
    ) -> EngineResult<()> {
        self.with_strategy(proposal_id, |strategy| engine::resubmit(strategy, content, role))
    }

    /// The strategy as a given role sees it.
    ///
    /// Staff always see the real thing; clients get `None` (a locked
    /// placeholder, never partial content) until the strategy leaves the
    /// drafting/review states.
    pub fn strategy_view(
        &self,
        proposal_id: &str,
        role: Role,
    ) -> EngineResult<Option<&MarketingStrategy>> {
        let proposal = self.proposal(proposal_id)?;
        let Some(strategy) = proposal.marketing.as_ref() else {
            return Ok(None);
        };
        if role.is_client() && !gates::client_can_view_strategy(strategy) {
            return Ok(None);
        }
        Ok(Some(strategy))
    }

    fn with_strategy(
        &mut self,
        proposal_id: &str,
        f: impl FnOnce(&MarketingStrategy) -> EngineResult<MarketingStrategy>,
    ) -> EngineResult<()> {
        let proposal = self.proposal(proposal_id)?.clone();
        let strategy = proposal
            .marketing
            .as_ref()
            .ok_or_else(|| EngineError::not_found("strategy", proposal_id))?;
        let updated_strategy = f(strategy)?;

        let mut updated = proposal;
        updated.marketing = Some(updated_strategy);
        self.store.replace_proposal(updated)
    }

    // --- Projects ----------------------------------------------------------

    /// Create an active project. Staff only.
    pub fn create_project(
        &mut self,
        client_id: &str,
        title: &str,
        due_date: DateTime<Utc>,
        role: Role,
    ) -> EngineResult<String> {
        if !role.is_staff() {
            return Err(EngineError::RoleDenied { role, action: "create a project" });
        }
        let project = Project::new(client_id, title, due_date);
        let id = project.id.clone();
        self.store.add_project(project);
        Ok(id)
    }

    /// Move a project between its lifecycle states.
    pub fn transition_project(
        &mut self,
        project_id: &str,
        target: ProjectStatus,
        role: Role,
    ) -> EngineResult<()> {
        let project = self.project(project_id)?;
        let updated = engine::transition_project(project, target, role)?;
        self.store.replace_project(updated)
    }

    /// Archive or unarchive a project.
    pub fn set_project_archived(
        &mut self,
        project_id: &str,
        archived: bool,
        role: Role,
    ) -> EngineResult<()> {
        let project = self.project(project_id)?;
        let updated = engine::set_project_archived(project, archived, role)?;
        self.store.replace_project(updated)
    }

    /// Delete a project and every task it owns.
    pub fn delete_project(&mut self, project_id: &str, role: Role) -> EngineResult<()> {
        if !role.is_staff() {
            return Err(EngineError::RoleDenied { role, action: "delete a project" });
        }
        self.store.remove_project(project_id).map(|_| ())
    }

    // --- Tasks -------------------------------------------------------------

    /// Add a task to a project's Todo column.
    pub fn add_task(
        &mut self,
        project_id: &str,
        title: &str,
        due_date: DateTime<Utc>,
        role: Role,
    ) -> EngineResult<String> {
        if !role.is_staff() {
            return Err(EngineError::RoleDenied { role, action: "add a task" });
        }
        let project = self.project(project_id)?;
        let task = Task::new(project_id, &project.client_id, title, due_date);
        let id = task.id.clone();
        self.store.add_task(task);
        Ok(id)
    }

    /// Seed a fresh project with generated kickoff tasks.
    ///
    /// A degraded provider yields no seeds and no error; the project just
    /// starts empty.
    pub async fn seed_tasks(
        &mut self,
        project_id: &str,
        due_date: DateTime<Utc>,
        provider: &dyn ContentProvider,
        role: Role,
    ) -> EngineResult<Vec<String>> {
        if !role.is_staff() {
            return Err(EngineError::RoleDenied { role, action: "seed tasks" });
        }
        let project = self.project(project_id)?.clone();
        let context = json!({
            "project": project.title,
            "description": project.description,
        });
        let generated = generate_or_default(provider, ContentKind::TaskSeed, &context).await;
        let seeds = match generated {
            GeneratedContent::TaskSeed(seeds) => seeds,
            _ => Vec::new(),
        };

        let mut ids = Vec::with_capacity(seeds.len());
        for seed in seeds {
            let mut task = Task::new(&project.id, &project.client_id, seed.title, due_date);
            task.description = seed.description;
            for text in seed.checklist {
                task = task.with_checklist_item(text);
            }
            ids.push(task.id.clone());
            self.store.add_task(task);
        }
        Ok(ids)
    }

    /// Drag-and-drop a task to another board column.
    pub fn move_task(&mut self, task_id: &str, target: TaskStatus, role: Role) -> EngineResult<()> {
        board::move_task(&mut self.store, task_id, target, role)
    }

    /// Archive or unarchive a task.
    pub fn set_task_archived(
        &mut self,
        task_id: &str,
        archived: bool,
        role: Role,
    ) -> EngineResult<()> {
        let task = self.task(task_id)?;
        let updated = engine::set_task_archived(task, archived, role)?;
        self.store.replace_task(updated)
    }

    /// Append a checklist item to a task.
    pub fn add_checklist_item(
        &mut self,
        task_id: &str,
        text: &str,
        role: Role,
    ) -> EngineResult<()> {
        let task = self.task(task_id)?;
        let updated = engine::add_checklist_item(task, text, role)?;
        self.store.replace_task(updated)
    }

    /// Edit one checklist item's text and/or completion.
    pub fn update_checklist_item(
        &mut self,
        task_id: &str,
        item_id: &str,
        text: Option<&str>,
        completed: Option<bool>,
        role: Role,
    ) -> EngineResult<()> {
        let task = self.task(task_id)?;
        let updated = engine::update_checklist_item(task, item_id, text, completed, role)?;
        self.store.replace_task(updated)
    }

    /// Attach an inspection report to a task.
    pub fn file_inspection(
        &mut self,
        task_id: &str,
        report: InspectionReport,
        role: Role,
    ) -> EngineResult<()> {
        let task = self.task(task_id)?;
        let updated = engine::file_inspection(task, report, role)?;
        self.store.replace_task(updated)
    }

    // --- Projections -------------------------------------------------------

    /// The kanban board for a project.
    pub fn board(&self, project_id: &str, archived: bool) -> Vec<board::BoardColumn> {
        board::columns(&self.store, project_id, archived)
    }

    /// Done-percentage across a project's live tasks.
    pub fn project_progress(&self, project_id: &str) -> u32 {
        board::project_progress(&self.store, project_id)
    }

    /// Timeline bar for a task on a window starting at `window_start`,
    /// using the configured window width.
    pub fn timeline_bar(
        &self,
        task_id: &str,
        window_start: DateTime<Utc>,
    ) -> EngineResult<timeline::TaskBar> {
        let task = self.task(task_id)?;
        Ok(timeline::project_task(task, window_start, self.config.timeline.window_days))
    }

    // --- Internals ---------------------------------------------------------

    fn proposal(&self, id: &str) -> EngineResult<&Proposal> {
        self.store.proposal(id).ok_or_else(|| EngineError::not_found("proposal", id))
    }

    fn invoice(&self, id: &str) -> EngineResult<&Invoice> {
        self.store.invoice(id).ok_or_else(|| EngineError::not_found("invoice", id))
    }

    fn project(&self, id: &str) -> EngineResult<&Project> {
        self.store.project(id).ok_or_else(|| EngineError::not_found("project", id))
    }

    fn task(&self, id: &str) -> EngineResult<&Task> {
        self.store.task(id).ok_or_else(|| EngineError::not_found("task", id))
    }

    /// JSON context describing the client behind a proposal, handed to the
    /// generation adapter.
    fn client_context(&self, proposal: &Proposal) -> serde_json::Value {
        let org = self.store.organization(&proposal.client_id);
        json!({
            "client": org.map(|o| o.name.as_str()),
            "industry": org.map(|o| o.industry.as_str()),
            "services": proposal.services,
            "upfront_amount": proposal.upfront_amount,
            "retainer_amount": proposal.retainer_amount,
        })
    }
}
