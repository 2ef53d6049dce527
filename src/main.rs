use actix_web::{web, App, HttpResponse, HttpServer};
use authgate::middleware::auth_gate::AuthGate;
use authgate::state::security_config::SecurityConfig;
use authgate::CurrentUser;

async fn whoami(user: CurrentUser) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "user_id": user.0.user_id,
        "company_id": user.0.company_id,
    }))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"status": "ok"}))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    authgate::telemetry::init_tracing();

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ PORT must be a valid port number");
            std::process::exit(1);
        });

    // The signing secret must come from the environment; refuse to start
    // without it rather than fall back to a default.
    let security = match SecurityConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    println!("🚀 Starting authgate demo on http://{host}:{port}");

    HttpServer::new(move || {
        App::new()
            .service(
                web::scope("/api")
                    .wrap(AuthGate::new(security.clone()))
                    .route("/whoami", web::get().to(whoami)),
            )
            .route("/health", web::get().to(health))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
