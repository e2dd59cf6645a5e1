use std::sync::Arc;

use async_trait::async_trait;

use crate::application::catalog::form_surface::apply_fields;
use crate::domain::catalog::detail::DetailSurface;
use crate::domain::catalog::form::FormField;
use crate::domain::catalog::session::SessionHandle;
use crate::domain::catalog::use_cases::detail_surface::{
    DetailSurfaceUseCase, ImageStep, SelectProductParams,
};
use crate::domain::catalog::use_cases::form_surface::FormFieldsParams;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

/// Drives the selected product's detail surface.
///
/// Save and delete failures only go to the log; the surface itself stays as
/// it was so the user can try again.
pub struct DetailSurfaceUseCaseImpl {
    pub session: SessionHandle,
    pub update_use_case: Arc<dyn UpdateProductUseCase>,
    pub delete_use_case: Arc<dyn DeleteProductUseCase>,
    pub logger: Arc<dyn Logger>,
}

impl DetailSurfaceUseCaseImpl {
    fn with_detail<R>(
        &self,
        f: impl FnOnce(&mut DetailSurface) -> Result<R, ProductError>,
    ) -> Result<R, ProductError> {
        self.session.write(|s| {
            let detail = s
                .detail_mut()
                .filter(|d| d.is_open())
                .ok_or(ProductError::NoSurfaceOpen)?;
            f(detail)
        })
    }
}

#[async_trait]
impl DetailSurfaceUseCase for DetailSurfaceUseCaseImpl {
    async fn select(&self, params: SelectProductParams) -> Result<DetailSurface, ProductError> {
        self.logger
            .debug(&format!("Selecting product: {}", params.id));
        self.session.write(|s| s.select(params.id).cloned())
    }

    async fn current(&self) -> Option<DetailSurface> {
        self.session.read(|s| s.detail().cloned())
    }

    async fn toggle_edit(&self) -> Result<DetailSurface, ProductError> {
        self.with_detail(|d| {
            d.toggle_edit()?;
            Ok(d.clone())
        })
    }

    async fn edit_fields(&self, params: FormFieldsParams) -> Result<DetailSurface, ProductError> {
        self.with_detail(|d| {
            let mut form = d.edit_form().cloned().ok_or(ProductError::NoSurfaceOpen)?;
            apply_fields(&mut form, params)?;
            for field in [FormField::Title, FormField::Description, FormField::Thumbnail] {
                d.set_field(field, form.field(field))?;
            }
            Ok(d.clone())
        })
    }

    async fn step_image(&self, step: ImageStep) -> Result<DetailSurface, ProductError> {
        self.with_detail(|d| {
            match step {
                ImageStep::Next => d.next_image(),
                ImageStep::Previous => d.prev_image(),
            }
            Ok(d.clone())
        })
    }

    async fn save(&self) -> Result<DetailSurface, ProductError> {
        let (ticket, id, patch) = self.with_detail(|d| d.begin_save())?;

        let result = self
            .update_use_case
            .execute(UpdateProductParams { id, patch })
            .await;

        if let Err(e) = &result {
            self.logger
                .error(&format!("Update failed for product {}: {}", id, e));
        }

        let surface = self.session.write(|s| {
            // A reselect while the call was in flight leaves the new surface alone.
            let detail = s.detail_mut()?;
            detail.complete_save(ticket, &result).then(|| detail.clone())
        });

        result?;
        surface.ok_or(ProductError::NoSurfaceOpen)
    }

    async fn delete(&self) -> Result<(), ProductError> {
        let (ticket, id) = self.with_detail(|d| d.begin_delete())?;

        let result = self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await;

        if let Err(e) = &result {
            self.logger
                .error(&format!("Delete failed for product {}: {}", id, e));
        }

        self.session.write(|s| {
            let closed = s
                .detail_mut()
                .is_some_and(|d| d.complete_delete(ticket, &result) && !d.is_open());
            if closed {
                s.close_detail();
            }
        });

        result
    }

    async fn close(&self) {
        self.session.write(|s| s.close_detail());
    }
}
