use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::form::{FormField, FormMode, ProductForm};
use crate::domain::catalog::session::SessionHandle;
use crate::domain::catalog::use_cases::form_surface::{FormFieldsParams, FormSurfaceUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct FormSurfaceUseCaseImpl {
    pub session: SessionHandle,
    pub create_use_case: Arc<dyn CreateProductUseCase>,
    pub update_use_case: Arc<dyn UpdateProductUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FormSurfaceUseCase for FormSurfaceUseCaseImpl {
    async fn open_create(&self) -> ProductForm {
        self.logger.debug("Opening add product form");
        self.session.write(|s| s.open_create_form().clone())
    }

    async fn open_edit(&self) -> Result<ProductForm, ProductError> {
        self.logger.debug("Opening edit product form");
        self.session.write(|s| s.open_edit_form().cloned())
    }

    async fn edit_fields(&self, params: FormFieldsParams) -> Result<ProductForm, ProductError> {
        self.session.write(|s| {
            let form = s.form_mut().ok_or(ProductError::NoSurfaceOpen)?;
            apply_fields(form, params)?;
            Ok(form.clone())
        })
    }

    async fn submit(&self) -> Result<Product, ProductError> {
        let (ticket, mode, draft) = self.session.write(|s| {
            let form = s.form_mut().ok_or(ProductError::NoSurfaceOpen)?;
            let (ticket, draft) = form.begin_submit()?;
            Ok::<_, ProductError>((ticket, form.mode(), draft))
        })?;

        let result = match mode {
            FormMode::Create => {
                self.create_use_case
                    .execute(CreateProductParams {
                        title: draft.title,
                        description: draft.description,
                        thumbnail: draft.thumbnail,
                    })
                    .await
            }
            FormMode::Edit(id) => {
                self.update_use_case
                    .execute(UpdateProductParams {
                        id,
                        patch: draft.into_patch(),
                    })
                    .await
            }
        };

        if let Err(e) = &result {
            self.logger
                .warn(&format!("Form submission failed: {}", e));
        }

        self.session.write(|s| {
            // The form may have been closed or replaced while the call was in flight.
            let Some(form) = s.form_mut() else {
                return;
            };
            if form.complete_submit(ticket, &result) && !form.is_open() {
                s.close_form();
            }
        });

        result
    }

    async fn current(&self) -> Option<ProductForm> {
        self.session.read(|s| s.form().cloned())
    }

    async fn close(&self) {
        self.session.write(|s| s.close_form());
    }
}

pub(crate) fn apply_fields(
    form: &mut ProductForm,
    params: FormFieldsParams,
) -> Result<(), ProductError> {
    if let Some(title) = params.title {
        form.set_field(FormField::Title, title)?;
    }
    if let Some(description) = params.description {
        form.set_field(FormField::Description, description)?;
    }
    if let Some(thumbnail) = params.thumbnail {
        form.set_field(FormField::Thumbnail, thumbnail)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::domain::catalog::form::FormStatus;
    use crate::domain::catalog::session::CatalogSession;
    use crate::domain::errors::ServiceError;
    use crate::domain::product::model::NewProduct;
    use crate::domain::product::value_objects::{CatalogOperation, ProductId};
    use mockall::mock;
    use tokio::sync::oneshot;

    mock! {
        pub CreateProduct {}

        #[async_trait]
        impl CreateProductUseCase for CreateProduct {
            async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub UpdateProduct {}

        #[async_trait]
        impl UpdateProductUseCase for UpdateProduct {
            async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: u64, title: &str) -> Product {
        Product::from_fields(
            ProductId::new(id),
            NewProduct {
                title: title.to_string(),
                description: "Desc".to_string(),
                thumbnail: "thumb.png".to_string(),
                ..Default::default()
            },
        )
    }

    fn surface(
        create: MockCreateProduct,
        update: MockUpdateProduct,
        session: SessionHandle,
    ) -> FormSurfaceUseCaseImpl {
        FormSurfaceUseCaseImpl {
            session,
            create_use_case: Arc::new(create),
            update_use_case: Arc::new(update),
            logger: mock_logger(),
        }
    }

    /// Create use case whose calls resolve only when the test releases them,
    /// in call order.
    struct GatedCreate {
        gates: Mutex<VecDeque<oneshot::Receiver<Result<Product, ProductError>>>>,
    }

    impl GatedCreate {
        fn new(count: usize) -> (Self, Vec<oneshot::Sender<Result<Product, ProductError>>>) {
            let (senders, receivers): (Vec<_>, VecDeque<_>) =
                (0..count).map(|_| oneshot::channel()).unzip();
            let gated = Self {
                gates: Mutex::new(receivers),
            };
            (gated, senders)
        }
    }

    #[async_trait]
    impl CreateProductUseCase for GatedCreate {
        async fn execute(&self, _params: CreateProductParams) -> Result<Product, ProductError> {
            let gate = self.gates.lock().unwrap().pop_front().expect("one gate per call");
            gate.await.expect("gate released")
        }
    }

    async fn until_submitting(surface: &FormSurfaceUseCaseImpl) {
        while !surface.current().await.is_some_and(|f| f.is_busy()) {
            tokio::task::yield_now().await;
        }
    }

    fn filled() -> FormFieldsParams {
        FormFieldsParams {
            title: Some("Lamp".to_string()),
            description: Some("Desk lamp".to_string()),
            thumbnail: Some("lamp.png".to_string()),
        }
    }

    #[tokio::test]
    async fn should_create_and_close_form_when_submission_succeeds() {
        let mut create = MockCreateProduct::new();
        create
            .expect_execute()
            .withf(|p| p.title == "Lamp" && p.thumbnail == "lamp.png")
            .times(1)
            .returning(|p| Ok(product(7, &p.title)));
        let session = SessionHandle::default();
        let surface = surface(create, MockUpdateProduct::new(), session.clone());

        surface.open_create().await;
        surface.edit_fields(filled()).await.unwrap();
        let saved = surface.submit().await.unwrap();

        assert_eq!(saved.id, ProductId::new(7));
        assert!(surface.current().await.is_none());
    }

    #[tokio::test]
    async fn should_keep_form_open_with_message_when_create_fails() {
        let mut create = MockCreateProduct::new();
        create.expect_execute().returning(|_| {
            Err(ProductError::remote(
                CatalogOperation::Create,
                ServiceError::http_status(500),
            ))
        });
        let surface = surface(create, MockUpdateProduct::new(), SessionHandle::default());

        surface.open_create().await;
        surface.edit_fields(filled()).await.unwrap();
        let result = surface.submit().await;

        assert!(result.is_err());
        let form = surface.current().await.expect("form stays open");
        assert_eq!(form.status(), FormStatus::Editing);
        assert_eq!(form.error(), Some("Failed to add product"));
        assert_eq!(form.field(FormField::Title), "Lamp");
    }

    #[tokio::test]
    async fn should_not_call_service_when_required_field_missing() {
        let mut create = MockCreateProduct::new();
        create.expect_execute().never();
        let surface = surface(create, MockUpdateProduct::new(), SessionHandle::default());

        surface.open_create().await;
        let result = surface.submit().await;

        assert!(matches!(result, Err(ProductError::TitleEmpty)));
        let form = surface.current().await.unwrap();
        assert_eq!(form.error(), Some("Title is required"));
    }

    #[tokio::test]
    async fn should_submit_edit_form_as_update_of_selected_product() {
        let mut session = CatalogSession::new();
        session.load(vec![product(3, "Chair")]);
        session.select(ProductId::new(3)).unwrap();
        let session = SessionHandle::new(session);

        let mut update = MockUpdateProduct::new();
        update
            .expect_execute()
            .withf(|p| p.id == ProductId::new(3) && p.patch.title.as_deref() == Some("Stool"))
            .times(1)
            .returning(|p| Ok(product(p.id.value(), "Stool")));
        let surface = surface(MockCreateProduct::new(), update, session);

        let form = surface.open_edit().await.unwrap();
        assert_eq!(form.field(FormField::Title), "Chair");
        surface
            .edit_fields(FormFieldsParams {
                title: Some("Stool".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let saved = surface.submit().await.unwrap();

        assert_eq!(saved.title, "Stool");
        assert!(surface.current().await.is_none());
    }

    #[tokio::test]
    async fn should_report_no_surface_when_submitting_without_form() {
        let surface = surface(
            MockCreateProduct::new(),
            MockUpdateProduct::new(),
            SessionHandle::default(),
        );
        assert!(matches!(surface.submit().await, Err(ProductError::NoSurfaceOpen)));
    }

    #[tokio::test]
    async fn should_reject_field_edits_while_submitting() {
        let (create, _gates) = GatedCreate::new(1);
        let surface = Arc::new(FormSurfaceUseCaseImpl {
            session: SessionHandle::default(),
            create_use_case: Arc::new(create),
            update_use_case: Arc::new(MockUpdateProduct::new()),
            logger: mock_logger(),
        });

        surface.open_create().await;
        surface.edit_fields(filled()).await.unwrap();
        let pending = tokio::spawn({
            let surface = surface.clone();
            async move { surface.submit().await }
        });
        until_submitting(&surface).await;

        let result = surface
            .edit_fields(FormFieldsParams {
                title: Some("Changed".to_string()),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(ProductError::SubmissionInFlight)));
        let form = surface.current().await.unwrap();
        assert_eq!(form.field(FormField::Title), "Lamp");
        pending.abort();
    }

    #[tokio::test]
    async fn should_not_let_an_earlier_submission_complete_a_reopened_form() {
        let (create, mut gates) = GatedCreate::new(2);
        let surface = Arc::new(FormSurfaceUseCaseImpl {
            session: SessionHandle::default(),
            create_use_case: Arc::new(create),
            update_use_case: Arc::new(MockUpdateProduct::new()),
            logger: mock_logger(),
        });
        let release_second = gates.remove(1);
        let release_first = gates.remove(0);

        surface.open_create().await;
        surface.edit_fields(filled()).await.unwrap();
        let first = tokio::spawn({
            let surface = surface.clone();
            async move { surface.submit().await }
        });
        until_submitting(&surface).await;

        surface.close().await;
        surface.open_create().await;
        surface.edit_fields(filled()).await.unwrap();
        let second = tokio::spawn({
            let surface = surface.clone();
            async move { surface.submit().await }
        });
        until_submitting(&surface).await;

        release_first.send(Ok(product(7, "Lamp"))).unwrap();
        assert!(first.await.unwrap().is_ok());
        let form = surface.current().await.expect("reopened form stays open");
        assert!(form.is_busy());

        release_second
            .send(Err(ProductError::remote(
                CatalogOperation::Create,
                ServiceError::http_status(500),
            )))
            .unwrap();
        assert!(second.await.unwrap().is_err());
        let form = surface.current().await.expect("reopened form stays open");
        assert_eq!(form.status(), FormStatus::Editing);
        assert_eq!(form.error(), Some("Failed to add product"));
    }
}
