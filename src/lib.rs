pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::analytics_service::AnalyticsService;
use application::catalog_service::CatalogService;
use application::order_service::OrderService;
use infrastructure::{DieselCatalogRepository, DieselOrderRepository};

pub use config::ServiceConfig;
pub use db::{create_pool, DbPool};

/// Concrete service types wired to the Diesel repositories.
pub type OrderSvc = OrderService<DieselOrderRepository>;
pub type CatalogSvc = CatalogService<DieselCatalogRepository>;
pub type AnalyticsSvc = AnalyticsService<DieselOrderRepository, DieselCatalogRepository>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::orders::create_order,
        handlers::orders::list_my_orders,
        handlers::orders::get_order,
        handlers::orders::cancel_order,
        handlers::outlets::list_outlets,
        handlers::outlets::search_outlets,
        handlers::outlets::get_outlet,
        handlers::outlets::get_outlet_menu,
        handlers::admin::list_orders,
        handlers::admin::update_order_status,
        handlers::admin::analytics,
        handlers::admin::dashboard,
        handlers::admin::create_outlet,
        handlers::admin::update_outlet,
        handlers::admin::delete_outlet,
        handlers::admin::add_menu_item,
        handlers::admin::update_menu_item,
        handlers::admin::delete_menu_item,
    ),
    components(schemas(
        handlers::orders::LineItemRequest,
        handlers::orders::CreateOrderRequest,
        handlers::orders::LineItemResponse,
        handlers::orders::OrderResponse,
        handlers::orders::OrderListResponse,
        handlers::outlets::OutletResponse,
        handlers::outlets::OutletListResponse,
        handlers::outlets::MenuItemResponse,
        handlers::outlets::MenuResponse,
        handlers::admin::UpdateStatusRequest,
        handlers::admin::DailySalesResponse,
        handlers::admin::ItemSalesResponse,
        handlers::admin::AnalyticsResponse,
        handlers::admin::DashboardResponse,
        handlers::admin::OutletRequest,
        handlers::admin::MenuItemRequest,
    )),
    tags(
        (name = "orders", description = "Checkout and order lifecycle"),
        (name = "outlets", description = "Public outlet and menu browsing"),
        (name = "admin", description = "Back-office: orders, analytics, catalog"),
    )
)]
struct ApiDoc;

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    config: ServiceConfig,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        let order_svc = web::Data::new(OrderSvc::new(
            DieselOrderRepository::new(pool.clone()),
            config,
        ));
        let catalog_svc = web::Data::new(CatalogSvc::new(DieselCatalogRepository::new(
            pool.clone(),
        )));
        let analytics_svc = web::Data::new(AnalyticsSvc::new(
            DieselOrderRepository::new(pool.clone()),
            DieselCatalogRepository::new(pool.clone()),
        ));

        App::new()
            .app_data(order_svc)
            .app_data(catalog_svc)
            .app_data(analytics_svc)
            .wrap(Logger::default())
            .route("/health", web::get().to(handlers::health))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .service(
                web::scope("/outlets")
                    .route("", web::get().to(handlers::outlets::list_outlets))
                    // "/search" must be registered before "/{id}"
                    .route("/search", web::get().to(handlers::outlets::search_outlets))
                    .route("/{id}", web::get().to(handlers::outlets::get_outlet))
                    .route("/{id}/menu", web::get().to(handlers::outlets::get_outlet_menu)),
            )
            .service(
                web::scope("/orders")
                    .route("", web::post().to(handlers::orders::create_order))
                    .route("", web::get().to(handlers::orders::list_my_orders))
                    .route("/{id}", web::get().to(handlers::orders::get_order))
                    .route("/{id}/cancel", web::put().to(handlers::orders::cancel_order)),
            )
            .service(
                web::scope("/admin")
                    .route("/orders", web::get().to(handlers::admin::list_orders))
                    .route(
                        "/orders/{id}/status",
                        web::put().to(handlers::admin::update_order_status),
                    )
                    .route("/analytics", web::get().to(handlers::admin::analytics))
                    .route("/dashboard", web::get().to(handlers::admin::dashboard))
                    .route("/outlets", web::post().to(handlers::admin::create_outlet))
                    .route("/outlets/{id}", web::put().to(handlers::admin::update_outlet))
                    .route(
                        "/outlets/{id}",
                        web::delete().to(handlers::admin::delete_outlet),
                    )
                    .route(
                        "/outlets/{id}/menu",
                        web::post().to(handlers::admin::add_menu_item),
                    )
                    .route(
                        "/outlets/{outlet_id}/menu/{item_id}",
                        web::put().to(handlers::admin::update_menu_item),
                    )
                    .route(
                        "/outlets/{outlet_id}/menu/{item_id}",
                        web::delete().to(handlers::admin::delete_menu_item),
                    ),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
