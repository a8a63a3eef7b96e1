#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::*;
    use brewstop::api;
    use brewstop::app::*;
    use brewstop::auth::session_middleware;
    use brewstop::config::ServerConfig;
    use brewstop::db::Database;
    use leptos::logging::log;
    use leptos::*;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use std::io::{Error, ErrorKind};

    let config = ServerConfig::from_env();
    let session_key = config.session_key();

    // Initialize the database
    let db = Database::new(&config.db_path).map_err(|e| Error::new(ErrorKind::Other, e))?;
    db.create_schema()
        .await
        .map_err(|e| Error::new(ErrorKind::Other, e))?;
    if config.seed {
        db.seed_if_empty()
            .await
            .map_err(|e| Error::new(ErrorKind::Other, e))?;
    }
    let db = web::Data::new(db);

    // Load configuration
    let conf = get_configuration(None)
        .await
        .map_err(|e| Error::new(ErrorKind::Other, e.to_string()))?;
    let addr = conf.leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);
    log!("listening on http://{}", &addr);

    HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;

        App::new()
            .wrap(session_middleware(session_key.clone()))
            .app_data(db.clone())
            // JSON API before the Leptos routes
            .configure(api::configure)
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // Serve other assets from the `assets` directory
            .service(Files::new("/assets", site_root))
            .service(favicon)
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), App)
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(feature = "ssr")]
#[actix_web::get("favicon.ico")]
async fn favicon(
    leptos_options: actix_web::web::Data<leptos::LeptosOptions>,
) -> actix_web::Result<actix_files::NamedFile> {
    let leptos_options = leptos_options.into_inner();
    let site_root = &leptos_options.site_root;
    Ok(actix_files::NamedFile::open(format!(
        "{site_root}/favicon.ico"
    ))?)
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // to run: `trunk serve --open --features csr`
    use brewstop::app::*;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
