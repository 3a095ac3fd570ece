use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpRequest, HttpResponse, HttpServer, Responder};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use studyhall_server::{
    app_state::AppState,
    config::Config,
    graphql::schema::{create_schema, Schema},
    handlers,
    identity::caller_identity_from,
    middleware::RequestIdMiddleware,
};

async fn graphql_endpoint(
    schema: web::Data<Schema>,
    http_req: HttpRequest,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();
    if let Some(identity) = caller_identity_from(&http_req) {
        request = request.data(identity);
    }
    schema.execute(request).await.into()
}

async fn graphiql() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .expect("failed to initialize application state");
    let schema = create_schema(state.clone());

    log::info!("Starting HTTP server on {}:{}", host, port);
    log::info!("GraphiQL playground: http://{}:{}/graphiql", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(schema.clone()))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .wrap(Cors::permissive())
            .service(handlers::health_check)
            .service(handlers::get_quiz_for_taking)
            .service(handlers::submit_quiz_attempt)
            .service(handlers::list_my_attempts)
            .route("/graphql", web::post().to(graphql_endpoint))
            .route("/graphiql", web::get().to(graphiql))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
