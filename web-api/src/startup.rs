use std::{io::Error, net::TcpListener};

use actix_web::{
    HttpResponse, HttpServer,
    dev::Server,
    middleware::{Compress, Condition},
    web::{self, Data},
};
use engine::{SEED_ROSTER, VesselStateEngine};
use tracing_actix_web::TracingLogger;
use utoipa::OpenApi;

use crate::{
    ApiDoc, VesselSource, routes,
    settings::{Environment, Settings},
};

pub struct App {
    server: Server,
    port: u16,
}

impl App {
    pub async fn build(settings: &Settings) -> App {
        let listener = TcpListener::bind(settings.api.listener_address()).unwrap();
        let port = listener.local_addr().unwrap().port();

        let engine = VesselStateEngine::new(SEED_ROSTER, settings.engine.clone()).unwrap();

        let server = create_server(engine, listener, settings).unwrap();

        App { server, port }
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        self.server.await
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

fn create_server<T>(source: T, listener: TcpListener, settings: &Settings) -> Result<Server, Error>
where
    T: VesselSource,
{
    let not_prod = settings.environment != Environment::Production;
    let source = Data::new(source);

    let mut server = HttpServer::new(move || {
        let scope = web::scope("/v1.0")
            .route("/vessels", web::get().to(routes::v1::vessel::vessels::<T>))
            .route(
                "/vessels/latest",
                web::get().to(routes::v1::vessel::latest_vessels::<T>),
            )
            .route(
                "/vessels_at_time",
                web::get().to(routes::v1::vessel::vessels_at_time::<T>),
            )
            .route(
                "/vessel_track/{vessel_id}",
                web::get().to(routes::v1::vessel::vessel_track::<T>),
            )
            .route("/mission", web::get().to(routes::v1::mission::mission::<T>));

        let app = actix_web::App::new()
            .app_data(source.clone())
            .wrap(Compress::default())
            .wrap(Condition::new(not_prod, actix_cors::Cors::permissive()))
            .wrap(TracingLogger::default())
            .service(scope);

        if not_prod {
            app.route(
                "/api-doc/openapi.json",
                web::get().to(|| async { HttpResponse::Ok().json(ApiDoc::openapi()) }),
            )
        } else {
            app
        }
    })
    .listen(listener)?;

    if let Some(workers) = settings.api.num_workers {
        server = server.workers(workers as usize);
    }

    Ok(server.run())
}
