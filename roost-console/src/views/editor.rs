//! Branch editor view state
//!
//! Glue between the form assembly and the gateway: edit mode fetches and
//! seeds, submit reduces and sends. Local validation failures never reach
//! the network; server failures keep the form visible with the error shown
//! above the fields, so in-progress input is not lost.

use shared::models::Branch;

use crate::api::BranchApi;
use crate::form::{BranchForm, FieldError};

/// Whether the editor creates a new branch or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(i64),
}

pub struct BranchEditor<A: BranchApi> {
    api: A,
    pub mode: EditorMode,
    pub form: BranchForm,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
    pub field_errors: Vec<FieldError>,
    /// Set on successful submit; the shell navigates away when it appears
    pub saved: Option<Branch>,
}

impl<A: BranchApi> BranchEditor<A> {
    pub fn create(api: A) -> Self {
        Self {
            api,
            mode: EditorMode::Create,
            form: BranchForm::new(),
            loading: false,
            saving: false,
            error: None,
            field_errors: Vec::new(),
            saved: None,
        }
    }

    pub fn edit(api: A, id: i64) -> Self {
        Self {
            mode: EditorMode::Edit(id),
            ..Self::create(api)
        }
    }

    /// Edit mode: fetch the record and seed the form from it
    pub async fn load(&mut self) {
        let EditorMode::Edit(id) = self.mode else {
            return;
        };
        self.loading = true;
        self.error = None;
        match self.api.get(id).await {
            Ok(branch) => self.form = BranchForm::from_branch(&branch),
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }

    /// Reduce, validate and send; create or update depending on mode
    pub async fn submit(&mut self) {
        self.field_errors.clear();
        self.error = None;
        self.saving = true;
        let outcome = match self.mode {
            EditorMode::Create => match self.form.to_input() {
                Ok(input) => {
                    self.api
                        .create(&input, self.form.pending_thumbnail())
                        .await
                }
                Err(errors) => {
                    self.field_errors = errors;
                    self.saving = false;
                    return;
                }
            },
            EditorMode::Edit(id) => match self.form.to_update() {
                Ok(update) => {
                    self.api
                        .update(id, &update, self.form.pending_thumbnail())
                        .await
                }
                Err(errors) => {
                    self.field_errors = errors;
                    self.saving = false;
                    return;
                }
            },
        };
        match outcome {
            Ok(branch) => self.saved = Some(branch),
            Err(e) => self.error = Some(e.to_string()),
        }
        self.saving = false;
    }
}
