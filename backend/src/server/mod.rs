//! Server construction and wiring.
//!
//! Builds the repository adapters over the shared pool, the domain
//! services over their ports, and the actix application over the shared
//! state.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use homebook::doc::ApiDoc;
use homebook::domain::ports::{NoDependentsProbe, RandomInviteCodeSource};
use homebook::domain::{AssetService, BookService, MemberService, MembershipService};
use homebook::inbound::http::assets::{
    create_asset, delete_asset, get_asset, list_assets, total_assets, update_asset,
};
use homebook::inbound::http::books::{
    delete_book, get_my_book, join_book, list_book_members, regenerate_invite_code,
    remove_book_member, update_book,
};
use homebook::inbound::http::health::{live, ready, HealthState};
use homebook::inbound::http::members::{get_member, register_member, update_member};
use homebook::inbound::http::state::HttpState;
use homebook::outbound::persistence::{
    DbPool, DieselAssetRepository, DieselBookMemberRepository, DieselBookRepository,
    DieselMemberRepository,
};

/// Wire repository adapters and services into the handler state.
fn build_state(pool: DbPool) -> HttpState {
    let members_repo = Arc::new(DieselMemberRepository::new(pool.clone()));
    let books_repo = Arc::new(DieselBookRepository::new(pool.clone()));
    let memberships_repo = Arc::new(DieselBookMemberRepository::new(pool.clone()));
    let assets_repo = Arc::new(DieselAssetRepository::new(pool));
    let invite_codes = Arc::new(RandomInviteCodeSource);

    let member_service = Arc::new(MemberService::new(
        Arc::clone(&members_repo),
        Arc::clone(&invite_codes),
    ));
    let book_service = Arc::new(BookService::new(
        Arc::clone(&books_repo),
        Arc::clone(&memberships_repo),
        invite_codes,
    ));
    let membership_service = Arc::new(MembershipService::new(
        books_repo,
        Arc::clone(&memberships_repo),
        Arc::clone(&members_repo),
    ));
    let asset_service = Arc::new(AssetService::new(
        assets_repo,
        memberships_repo,
        members_repo,
        Arc::new(NoDependentsProbe),
    ));

    HttpState {
        members: member_service.clone(),
        members_query: member_service,
        books: book_service.clone(),
        books_query: book_service,
        memberships: membership_service.clone(),
        memberships_query: membership_service,
        assets: asset_service.clone(),
        assets_query: asset_service,
    }
}

fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    // `total_assets` before `get_asset` so the literal segment wins.
    let app = App::new()
        .app_data(http_state)
        .app_data(health_state)
        .service(register_member)
        .service(get_member)
        .service(update_member)
        .service(get_my_book)
        .service(join_book)
        .service(update_book)
        .service(regenerate_invite_code)
        .service(delete_book)
        .service(list_book_members)
        .service(remove_book_member)
        .service(create_asset)
        .service(list_assets)
        .service(total_assets)
        .service(get_asset)
        .service(update_asset)
        .service(delete_asset)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    app
}

/// Build and run the HTTP server until shutdown.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let http_state = web::Data::new(build_state(config.pool));
    let health_state = web::Data::new(HealthState::new());

    let server_http_state = http_state.clone();
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(server_http_state.clone(), server_health_state.clone())
    })
    .bind(config.bind_addr)?;

    health_state.mark_ready();
    info!(addr = %config.bind_addr, "server listening");
    server.run().await
}
