use std::path::Path;
use std::process::ExitCode;

use frontdoor::app::App;
use frontdoor::config::Config;
use frontdoor::logger;

fn main() -> ExitCode {
    let cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("[ERROR] Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::init(&cfg) {
        eprintln!("[ERROR] Failed to initialize logger: {e}");
        return ExitCode::FAILURE;
    }

    // The upward search starts at the document root, mirroring an entry
    // script living inside the directory it serves
    let app = match App::bootstrap(Path::new(&cfg.site.document_root)) {
        Ok(app) => app,
        Err(e) => {
            logger::log_error(&format!("Bootstrap failed: {e}"));
            return ExitCode::FAILURE;
        }
    };

    // The process exits with the application's run result
    ExitCode::from(app.run(cfg))
}
