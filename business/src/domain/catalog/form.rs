use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductDraft};
use crate::domain::product::value_objects::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ProductId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Submitting,
    Closed,
}

/// Identifies one submission of one surface.
///
/// Tickets are unique for the life of the process, so a completion that
/// arrives after its surface was closed and reopened never matches the
/// new surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

impl SubmissionTicket {
    pub fn issue() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Thumbnail,
}

/// Create/edit form for the three user-editable product fields.
///
/// A submission runs in two halves so the caller can await the remote call
/// in between: [`ProductForm::begin_submit`] validates and marks the form
/// busy, [`ProductForm::complete_submit`] closes it or reports the failure.
/// Only the completion carrying the ticket handed out by `begin_submit`
/// has any effect.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    mode: FormMode,
    title: String,
    description: String,
    thumbnail: String,
    status: FormStatus,
    error: Option<String>,
    in_flight: Option<SubmissionTicket>,
}

impl ProductForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            description: String::new(),
            thumbnail: String::new(),
            status: FormStatus::Editing,
            error: None,
            in_flight: None,
        }
    }

    /// Edit form pre-filled from `product`.
    pub fn edit(product: &Product) -> Self {
        Self {
            mode: FormMode::Edit(product.id),
            title: product.title.clone(),
            description: product.description.clone(),
            thumbnail: product.thumbnail.clone(),
            status: FormStatus::Editing,
            error: None,
            in_flight: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Thumbnail => &self.thumbnail,
        }
    }

    /// Fields are frozen while a submission is in flight.
    pub fn set_field(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<(), ProductError> {
        match self.status {
            FormStatus::Submitting => return Err(ProductError::SubmissionInFlight),
            FormStatus::Closed => return Err(ProductError::NoSurfaceOpen),
            FormStatus::Editing => {}
        }

        let value = value.into();
        match field {
            FormField::Title => self.title = value,
            FormField::Description => self.description = value,
            FormField::Thumbnail => self.thumbnail = value,
        }
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.status != FormStatus::Closed
    }

    pub fn is_busy(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Whether `ticket` is the submission this form is waiting on.
    pub fn awaits(&self, ticket: SubmissionTicket) -> bool {
        self.in_flight == Some(ticket)
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Product",
            FormMode::Edit(_) => "Edit Product",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.mode, self.is_busy()) {
            (FormMode::Create, false) => "Add Product",
            (FormMode::Create, true) => "Adding...",
            (FormMode::Edit(_), false) => "Save Changes",
            (FormMode::Edit(_), true) => "Saving...",
        }
    }

    pub fn begin_submit(&mut self) -> Result<(SubmissionTicket, ProductDraft), ProductError> {
        match self.status {
            FormStatus::Submitting => return Err(ProductError::SubmissionInFlight),
            FormStatus::Closed => return Err(ProductError::NoSurfaceOpen),
            FormStatus::Editing => {}
        }

        match ProductDraft::new(&self.title, &self.description, &self.thumbnail) {
            Ok(draft) => {
                let ticket = SubmissionTicket::issue();
                self.status = FormStatus::Submitting;
                self.error = None;
                self.in_flight = Some(ticket);
                Ok((ticket, draft))
            }
            Err(err) => {
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Applies the outcome of the submission identified by `ticket`.
    /// Returns `false` and leaves the form untouched for any other ticket.
    pub fn complete_submit(
        &mut self,
        ticket: SubmissionTicket,
        result: &Result<Product, ProductError>,
    ) -> bool {
        if !self.awaits(ticket) {
            return false;
        }

        self.in_flight = None;
        match result {
            Ok(_) => {
                self.status = FormStatus::Closed;
                self.error = None;
            }
            Err(err) => {
                self.status = FormStatus::Editing;
                self.error = Some(err.user_message());
            }
        }
        true
    }

    /// Returns a busy form to editing without recording a message.
    pub fn abort_submit(&mut self, ticket: SubmissionTicket) -> bool {
        if !self.awaits(ticket) {
            return false;
        }

        self.in_flight = None;
        self.status = FormStatus::Editing;
        true
    }

    pub fn close(&mut self) {
        self.status = FormStatus::Closed;
        self.in_flight = None;
    }
}
