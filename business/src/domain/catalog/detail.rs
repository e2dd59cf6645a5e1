use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductPatch};
use crate::domain::product::value_objects::ProductId;

use super::form::{FormField, ProductForm, SubmissionTicket};

const MAX_STARS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailMode {
    Viewing,
    Editing,
    Closed,
}

/// Star readout on a five-star scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    filled: u8,
}

impl StarRating {
    /// Rounds to the nearest whole star, halves rounding up.
    pub fn from_rating(rating: Option<f64>) -> Self {
        let value = rating.filter(|r| r.is_finite()).unwrap_or(0.0);
        let filled = (value + 0.5).floor().clamp(0.0, MAX_STARS as f64) as u8;
        Self { filled }
    }

    pub fn filled(&self) -> u8 {
        self.filled
    }

    pub fn render(&self) -> String {
        (0..MAX_STARS)
            .map(|i| if i < self.filled { '★' } else { '☆' })
            .collect()
    }
}

/// Position within a product's image list. Wraps around at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageCarousel {
    index: usize,
}

impl ImageCarousel {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = if self.index + 1 >= len { 0 } else { self.index + 1 };
    }

    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = if self.index == 0 || self.index >= len {
            len - 1
        } else {
            self.index - 1
        };
    }

    /// The image to show, or the thumbnail when the product has no images.
    pub fn current<'a>(&self, product: &'a Product) -> &'a str {
        let gallery = product.gallery();
        match gallery.get(self.index).or_else(|| gallery.first()) {
            Some(image) => image.as_str(),
            None => product.thumbnail.as_str(),
        }
    }
}

/// View/edit/delete surface for one selected product.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSurface {
    product: Product,
    mode: DetailMode,
    carousel: ImageCarousel,
    edit_form: Option<ProductForm>,
    deleting: Option<SubmissionTicket>,
}

impl DetailSurface {
    pub fn open(product: Product) -> Self {
        Self {
            product,
            mode: DetailMode::Viewing,
            carousel: ImageCarousel::default(),
            edit_form: None,
            deleting: None,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn mode(&self) -> DetailMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != DetailMode::Closed
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            DetailMode::Editing => "Edit Product",
            _ => "Product Details",
        }
    }

    pub fn edit_form(&self) -> Option<&ProductForm> {
        self.edit_form.as_ref()
    }

    pub fn stars(&self) -> StarRating {
        StarRating::from_rating(self.product.rating)
    }

    pub fn carousel(&self) -> ImageCarousel {
        self.carousel
    }

    pub fn current_image(&self) -> &str {
        self.carousel.current(&self.product)
    }

    pub fn next_image(&mut self) {
        self.carousel.next(self.product.gallery().len());
    }

    pub fn prev_image(&mut self) {
        self.carousel.prev(self.product.gallery().len());
    }

    /// Viewing ⇄ Editing. Entering edit mode re-fills the fields from the
    /// current product; leaving it discards unsaved edits.
    pub fn toggle_edit(&mut self) -> Result<DetailMode, ProductError> {
        match self.mode {
            DetailMode::Viewing => {
                self.edit_form = Some(ProductForm::edit(&self.product));
                self.mode = DetailMode::Editing;
            }
            DetailMode::Editing => {
                if self.edit_form.as_ref().is_some_and(ProductForm::is_busy) {
                    return Err(ProductError::SubmissionInFlight);
                }
                self.edit_form = None;
                self.mode = DetailMode::Viewing;
            }
            DetailMode::Closed => return Err(ProductError::NoSurfaceOpen),
        }
        Ok(self.mode)
    }

    pub fn set_field(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<(), ProductError> {
        let form = self.edit_form.as_mut().ok_or(ProductError::NoSurfaceOpen)?;
        form.set_field(field, value)
    }

    /// Validates the edit fields and marks the save as in flight.
    pub fn begin_save(
        &mut self,
    ) -> Result<(SubmissionTicket, ProductId, ProductPatch), ProductError> {
        if self.mode != DetailMode::Editing {
            return Err(ProductError::NoSurfaceOpen);
        }
        let form = self.edit_form.as_mut().ok_or(ProductError::NoSurfaceOpen)?;
        let (ticket, draft) = form.begin_submit()?;
        Ok((ticket, self.product.id, draft.into_patch()))
    }

    /// A successful save returns to viewing the updated product. A failed
    /// one stays in edit mode with the user's input intact. Returns `false`
    /// without touching the surface when `ticket` is not the pending save.
    pub fn complete_save(
        &mut self,
        ticket: SubmissionTicket,
        result: &Result<Product, ProductError>,
    ) -> bool {
        if !self.edit_form.as_ref().is_some_and(|form| form.awaits(ticket)) {
            return false;
        }

        match result {
            Ok(updated) => {
                self.product = updated.clone();
                self.edit_form = None;
                if self.mode == DetailMode::Editing {
                    self.mode = DetailMode::Viewing;
                }
            }
            Err(_) => {
                if let Some(form) = self.edit_form.as_mut() {
                    form.abort_submit(ticket);
                }
            }
        }
        true
    }

    pub fn begin_delete(&mut self) -> Result<(SubmissionTicket, ProductId), ProductError> {
        if !self.is_open() {
            return Err(ProductError::NoSurfaceOpen);
        }
        if self.deleting.is_some() {
            return Err(ProductError::SubmissionInFlight);
        }
        let ticket = SubmissionTicket::issue();
        self.deleting = Some(ticket);
        Ok((ticket, self.product.id))
    }

    pub fn complete_delete(
        &mut self,
        ticket: SubmissionTicket,
        result: &Result<(), ProductError>,
    ) -> bool {
        if self.deleting != Some(ticket) {
            return false;
        }

        self.deleting = None;
        if result.is_ok() {
            self.close();
        }
        true
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting.is_some()
    }

    /// Shows a newer version of the same product, e.g. after an edit made
    /// through the standalone form.
    pub fn refresh(&mut self, product: Product) {
        if product.id == self.product.id {
            self.product = product;
        }
    }

    pub fn close(&mut self) {
        self.mode = DetailMode::Closed;
        self.edit_form = None;
    }
}
