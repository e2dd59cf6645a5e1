use poem_openapi::{Enum, Object};

use business::domain::catalog::detail::{DetailMode, DetailSurface};

use crate::api::form::dto::FormResponse;
use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum DetailModeDto {
    #[oai(rename = "viewing")]
    Viewing,
    #[oai(rename = "editing")]
    Editing,
}

#[derive(Debug, Clone, Object)]
pub struct DetailResponse {
    pub product: ProductResponse,
    pub mode: DetailModeDto,
    pub heading: String,
    /// Whole stars out of five
    pub stars: u8,
    /// Five-character star readout
    pub stars_display: String,
    /// Position in the image gallery
    pub image_index: usize,
    /// Image currently shown, the thumbnail when there is no gallery
    pub current_image: String,
    pub deleting: bool,
    /// Present while in edit mode
    #[oai(skip_serializing_if_is_none)]
    pub edit_form: Option<FormResponse>,
}

impl From<DetailSurface> for DetailResponse {
    fn from(detail: DetailSurface) -> Self {
        let mode = match detail.mode() {
            DetailMode::Editing => DetailModeDto::Editing,
            _ => DetailModeDto::Viewing,
        };
        let stars = detail.stars();

        Self {
            mode,
            heading: detail.heading().to_string(),
            stars: stars.filled(),
            stars_display: stars.render(),
            image_index: detail.carousel().index(),
            current_image: detail.current_image().to_string(),
            deleting: detail.is_deleting(),
            edit_form: detail.edit_form().cloned().map(FormResponse::from),
            product: detail.product().clone().into(),
        }
    }
}
