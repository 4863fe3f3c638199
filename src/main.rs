use portfolio::client;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::middleware::from_fn_with_state;
        use dioxus_logger::tracing;
        use portfolio::server::{
            config::Config,
            middleware::session::rotate_session_cookie,
            model::{app::AppState, session::keys::SessionKeys},
            router, startup,
        };

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let session_keys = SessionKeys::from_secrets(&config.session_secrets);
        let session = startup::connect_to_session(&config, &session_keys).await?;
        let db = startup::connect_to_database(&config).await?;

        tracing::info!(
            environment = ?config.environment,
            legacy_session_secrets = session_keys.legacy().len(),
            "Starting server"
        );

        let state = AppState {
            db,
            app_url: config.app_url,
        };

        let mut router = dioxus::server::router(client::App);
        // The cookie is re-signed before the session layer verifies it
        let server_routes = router::routes(state)
            .layer(session)
            .layer(from_fn_with_state(session_keys, rotate_session_cookie));
        router = router.merge(server_routes);

        Ok(router)
    })
}
