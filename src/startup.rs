use crate::configuration::Settings;
use crate::connectors;
use crate::routes;
use crate::services::PricingRenderer;
use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(listener: TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    // Initialize external service connectors (plugin pattern)
    let plans_connector = connectors::init_plans_service(&settings.connectors);

    let renderer = PricingRenderer::new(settings.payment.clone())
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let renderer = web::Data::new(renderer);

    let settings = web::Data::new(settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::Compress::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(web::scope("/pricing").service(routes::pricing::cards_handler))
            .app_data(plans_connector.clone())
            .app_data(renderer.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
