mod config;

use actix_files::{Files, NamedFile};
use actix_web::{App, HttpServer, middleware::Logger, web};

use crate::config::ServerConfig;

/// Any path the router owns gets the SPA shell.
async fn spa(cfg: web::Data<ServerConfig>) -> actix_web::Result<NamedFile> {
    NamedFile::open(cfg.index_file()).map_err(|e| {
        log::error!("cannot open {}: {e}", cfg.index_file().display());
        actix_web::error::ErrorInternalServerError(e)
    })
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = ServerConfig::from_env()?;
    log::info!(
        "serving {} on http://{}:{}",
        cfg.dist_dir.display(),
        cfg.host,
        cfg.port
    );

    let bind = (cfg.host.clone(), cfg.port);
    let data = web::Data::new(cfg);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(Logger::default())
            .service(Files::new("/assets", &data.assets_dir))
            .service(
                Files::new("/", &data.dist_dir)
                    .index_file("index.html")
                    .default_handler(web::to(spa)),
            )
            .default_service(web::get().to(spa))
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
