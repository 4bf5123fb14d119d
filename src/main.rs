use clap::Parser;

use reviews_carousel::api::ApiClient;
use reviews_carousel::carousel::Carousel;
use reviews_carousel::cli::{self, Args, Command};
use reviews_carousel::config::Config;
use reviews_carousel::event_loop;
use reviews_carousel::terminal::{StatusBar, TerminalSurface, Tui};

type MainResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() {
    // dotenv::dotenv() returns Err if .env doesn't exist, which is fine
    let _ = dotenv::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> MainResult {
    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Some(Command::Config { action }) => {
            cli::handle_config_action(action, &config, args.config.as_deref())
        }
        Some(Command::Users { action }) => {
            let client = ApiClient::new(&config.api_base_url())?;
            cli::handle_users_action(action, &client).await
        }
        Some(Command::Data) => {
            let client = ApiClient::new(&config.api_base_url())?;
            cli::handle_data(&client).await
        }
        None => run_carousel(args.interval_ms, args.no_status, &config).await,
    }
}

async fn run_carousel(interval_ms: Option<u64>, no_status: bool, config: &Config) -> MainResult {
    let reviews = config.reviews_or_default();

    let mut settings = config.carousel.settings();
    if let Some(ms) = interval_ms {
        settings.auto_advance = std::time::Duration::from_millis(ms.max(1));
    }

    let surface = TerminalSurface::new(reviews.len(), config.carousel.transition());
    let mut carousel = Carousel::new(surface, reviews.len(), reviews.len(), settings);
    let mut status_bar = StatusBar::with_visibility(config.ui.status_bar && !no_status);

    log::info!("starting carousel with {} reviews", reviews.len());

    let mut tui = Tui::new()?;
    let result = event_loop::run(&mut tui, &mut carousel, &reviews, &mut status_bar).await;
    tui.restore()?;
    result
}
