use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, Product, ProductPatch};
use crate::domain::product::value_objects::ProductId;

use super::detail::DetailSurface;
use super::form::ProductForm;
use super::projection::{self, PageView, SortMode};
use super::store::ProductStore;
use super::view_state::ViewState;

/// Everything one catalog page holds for the lifetime of a session.
///
/// This is the only write path to the product collection; the open form and
/// the selected product's detail surface live next to it so that mutations
/// can keep them consistent.
#[derive(Debug, Default)]
pub struct CatalogSession {
    store: ProductStore,
    view: ViewState,
    form: Option<ProductForm>,
    detail: Option<DetailSurface>,
    loading: bool,
    loaded_at: Option<DateTime<Utc>>,
}

/// Read-only copy of the session for rendering.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub product_count: usize,
    pub loading: bool,
    pub loaded_at: Option<DateTime<Utc>>,
    pub search: String,
    pub sort: SortMode,
    pub page: PageView,
    pub form: Option<ProductForm>,
    pub detail: Option<DetailSurface>,
}

impl CatalogSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    pub fn fail_loading(&mut self) {
        self.loading = false;
    }

    pub fn load(&mut self, products: Vec<Product>) {
        self.store.load(products);
        self.loading = false;
        self.loaded_at = Some(Utc::now());
        self.view.composition_changed();
    }

    pub fn current_page(&self) -> PageView {
        projection::project(self.store.products(), self.view.query())
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            product_count: self.store.len(),
            loading: self.loading,
            loaded_at: self.loaded_at,
            search: self.view.search().to_string(),
            sort: self.view.sort(),
            page: self.current_page(),
            form: self.form.clone(),
            detail: self.detail.clone(),
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.set_search(search);
        self.settle_page();
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.view.set_sort(sort);
        self.settle_page();
    }

    pub fn set_page(&mut self, page: usize) {
        self.view.set_page(page);
        self.settle_page();
    }

    pub fn insert(&mut self, fields: NewProduct) -> Product {
        let product = self.store.insert(fields);
        self.view.composition_changed();
        product
    }

    /// Merges `patch` into the stored product and any open detail surface
    /// showing it. `None` when the id is not in the collection.
    pub fn apply_update(&mut self, id: ProductId, patch: &ProductPatch) -> Option<Product> {
        let updated = self.store.replace(id, patch)?;
        if let Some(detail) = self.detail.as_mut() {
            detail.refresh(updated.clone());
        }
        self.settle_page();
        Some(updated)
    }

    /// Removes the product and drops the selection if it pointed at it.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let removed = self.store.remove(id)?;
        if self.detail.as_ref().is_some_and(|d| d.product_id() == id) {
            self.detail = None;
        }
        self.view.composition_changed();
        Some(removed)
    }

    pub fn form(&self) -> Option<&ProductForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut ProductForm> {
        self.form.as_mut()
    }

    /// Opens an empty add form and clears the selection.
    pub fn open_create_form(&mut self) -> &ProductForm {
        self.detail = None;
        self.form.insert(ProductForm::create())
    }

    /// Opens the edit form for the selected product.
    pub fn open_edit_form(&mut self) -> Result<&ProductForm, ProductError> {
        let product = self
            .detail
            .as_ref()
            .filter(|d| d.is_open())
            .map(|d| d.product().clone())
            .ok_or(ProductError::NoSurfaceOpen)?;
        Ok(&*self.form.insert(ProductForm::edit(&product)))
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    pub fn detail(&self) -> Option<&DetailSurface> {
        self.detail.as_ref()
    }

    pub fn detail_mut(&mut self) -> Option<&mut DetailSurface> {
        self.detail.as_mut()
    }

    /// Selects a product and opens its detail surface.
    pub fn select(&mut self, id: ProductId) -> Result<&DetailSurface, ProductError> {
        let product = self.store.get(id).cloned().ok_or(ProductError::NotFound)?;
        Ok(&*self.detail.insert(DetailSurface::open(product)))
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    fn settle_page(&mut self) {
        let matches = projection::filter(self.store.products(), self.view.search()).len();
        self.view.clamp(projection::total_pages(matches));
    }
}

/// Shared handle to the session.
///
/// Access goes through closures so a lock is never held across an `.await`.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<CatalogSession>>,
}

impl SessionHandle {
    pub fn new(session: CatalogSession) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&CatalogSession) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut CatalogSession) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
