use crate::connectors::PlansConnector;
use crate::helpers::JsonResponse;
use crate::services::PricingRenderer;
use crate::views::pricing::PricingCardsView;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

/// Returns the rendered pricing card fragments for the landing page shell.
///
/// Upstream trouble never surfaces here: any fetch failure renders the
/// built-in fallback pair instead, so this endpoint only errors when the
/// template itself cannot render.
#[tracing::instrument(name = "Get pricing cards.", skip(plans_service, renderer))]
#[get("/cards")]
pub async fn cards_handler(
    plans_service: web::Data<Arc<dyn PlansConnector>>,
    renderer: web::Data<PricingRenderer>,
) -> Result<impl Responder> {
    let view = match plans_service.fetch_plans().await {
        Ok(plans) => renderer.render_cards(plans),
        Err(err) => {
            tracing::warn!("Falling back to the built-in plans: {}", err);
            renderer.render_fallback()
        }
    }
    .map_err(|err| JsonResponse::<PricingCardsView>::build().internal_server_error(err))?;

    Ok(JsonResponse::build().set_item(view).ok("OK"))
}
