use colored::Colorize;
use dotenv::dotenv;
use playlist_tiles::{feed, Config, Page, YouTube};
use std::{env, process::ExitCode};

fn init_logger() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    init_logger();

    let config_path =
        env::var("PLAYLIST_TILES_CONFIG").unwrap_or_else(|_| "Config.toml".to_owned());
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            return ExitCode::FAILURE;
        }
    };
    log::info!("Using config: {}", config);

    let youtube = YouTube::new(&config);
    let mut page = Page::new(&config);

    let status = match feed::load_videos(&youtube, &mut page).await {
        Ok(count) => {
            eprintln!("{}", format!("loaded {} videos", count).green());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            ExitCode::FAILURE
        }
    };

    let html = page.to_html();
    match &config.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, html) {
                eprintln!(
                    "{}",
                    format!("failed to write '{}': {}", path.display(), e).red()
                );
                return ExitCode::FAILURE;
            }
        }
        None => print!("{}", html),
    }

    status
}
