//! Chromacord - a Discord colored-text composer
//!
//! This application provides a visual editor for Discord's ANSI code-block
//! styling: highlight text, pick a swatch, copy the fenced result.

mod app;

use std::env;
use std::path::PathBuf;
use std::process;

use eframe::egui;
use tracing::{debug, error, info, warn};

use chromacord::config::Config;
use chromacord::error::Result;

use app::ChromacordApp;

/// Application configuration
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Enable debug mode
    debug: bool,
    /// Window width
    width: Option<f32>,
    /// Window height
    height: Option<f32>,
    /// Initial editor text, replacing the configured seed
    seed: Option<String>,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    if i + 1 < args.len() {
                        app_args.config_path = Some(PathBuf::from(&args[i + 1]));
                        i += 1;
                    } else {
                        return Err("Missing config file path".into());
                    }
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--width" | "-w" => {
                    if i + 1 < args.len() {
                        app_args.width = args[i + 1].parse().ok();
                        i += 1;
                    }
                }
                "--height" | "-h" => {
                    if i + 1 < args.len() {
                        app_args.height = args[i + 1].parse().ok();
                        i += 1;
                    }
                }
                "--seed" | "-s" => {
                    if i + 1 < args.len() {
                        app_args.seed = Some(args[i + 1].clone());
                        i += 1;
                    } else {
                        return Err("Missing seed text".into());
                    }
                }
                "--help" | "-?" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("Chromacord v{}", env!("CARGO_PKG_VERSION"));
                    process::exit(0);
                }
                arg if arg.starts_with('-') => {
                    return Err(format!("Unknown option: {}", arg).into());
                }
                _ => {
                    warn!("Ignoring positional argument: {}", args[i]);
                }
            }
            i += 1;
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("Chromacord - a Discord colored-text composer");
    println!();
    println!("USAGE:");
    println!("    chromacord [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("    -d, --debug            Enable debug mode");
    println!("    -w, --width <WIDTH>    Initial window width");
    println!("    -h, --height <HEIGHT>  Initial window height");
    println!("    -s, --seed <TEXT>      Initial editor text");
    println!("    -?, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    Chromacord looks for configuration files in the following order:");
    println!("    1. Path specified with --config");
    println!("    2. $XDG_CONFIG_HOME/chromacord/config.toml");
    println!("    3. ~/.config/chromacord/config.toml");
    println!("    4. ~/.chromacord/config.toml");
    println!("    5. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    CHROMACORD_CONFIG      Path to configuration file");
    println!("    CHROMACORD_DEBUG       Enable debug mode (1 or true)");
    println!("    RUST_LOG               Set logging level (error, warn, info, debug, trace)");
}

fn main() -> Result<()> {
    // Parse command line arguments first
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("Failed to parse arguments: {}", e);
        print_help();
        process::exit(1);
    });

    // Initialize logging based on debug flag
    let log_level = if args.debug
        || env::var("CHROMACORD_DEBUG").is_ok_and(|v| v == "1" || v.to_lowercase() == "true")
    {
        "debug"
    } else {
        "info"
    };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    info!("🚀 Starting Chromacord v{}", env!("CARGO_PKG_VERSION"));
    debug!("Debug mode enabled");

    // Load configuration
    let config = load_configuration(&args)?;

    // Create the application
    let app = ChromacordApp::with_config(config.clone(), args.seed.clone());

    // Set up native options
    let native_options = create_native_options(&args, &config);

    info!("🎨 Initializing GUI...");
    if let Err(e) = eframe::run_native(
        "Chromacord",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    ) {
        error!("💥 Application failed: {}", e);
        process::exit(1);
    }

    info!("👋 Chromacord shutdown complete");
    Ok(())
}

/// Load configuration from file or use defaults
fn load_configuration(args: &AppArgs) -> Result<Config> {
    let config_path = args
        .config_path
        .clone()
        .or_else(|| env::var("CHROMACORD_CONFIG").ok().map(PathBuf::from));

    let config = if let Some(path) = &config_path {
        debug!("Loading config from: {}", path.display());
        match chromacord::init_with_config(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config from {}: {}", path.display(), e);
                info!("🔄 Falling back to default configuration");
                chromacord::init()?
            }
        }
    } else {
        chromacord::init()?
    };

    debug!("Configuration loaded successfully");
    Ok(config)
}

/// Create native options for the application window
fn create_native_options(args: &AppArgs, config: &Config) -> eframe::NativeOptions {
    let width = args.width.unwrap_or(config.ui.window_width as f32);
    let height = args.height.unwrap_or(config.ui.window_height as f32);

    let viewport = egui::ViewportBuilder::default()
        .with_title("Chromacord")
        .with_app_id("chromacord")
        .with_icon(std::sync::Arc::new(load_or_create_window_icon()))
        .with_inner_size([width, height])
        .with_min_inner_size([400.0, 300.0])
        .with_resizable(true)
        .with_maximized(config.ui.start_maximized);

    eframe::NativeOptions {
        viewport,
        renderer: eframe::Renderer::Glow,
        ..Default::default()
    }
}

/// Create window icon
fn create_window_icon() -> egui::IconData {
    // A 32x32 icon: four palette stripes over a dark code-block background
    let mut rgba = Vec::with_capacity(32 * 32 * 4);

    let bg_color = [43, 45, 49, 255];
    let stripes = [
        [220, 50, 47, 255],   // red
        [133, 153, 0, 255],   // green
        [38, 139, 210, 255],  // blue
        [211, 54, 130, 255],  // pink
    ];

    for y in 0..32 {
        for x in 0..32 {
            let pixel = if x >= 4 && x < 28 && y >= 6 && y < 26 {
                let band = (y - 6) / 5;
                if band < stripes.len() {
                    stripes[band]
                } else {
                    bg_color
                }
            } else {
                bg_color
            };

            rgba.extend_from_slice(&pixel);
        }
    }

    egui::IconData {
        rgba,
        width: 32,
        height: 32,
    }
}

/// Try loading `icon.png` from project root or current working directory; fallback to generated icon
fn load_or_create_window_icon() -> egui::IconData {
    let candidates = [
        std::path::Path::new("icon.png"),
        std::path::Path::new("bin/chromacord/icon.png"),
        std::path::Path::new("../icon.png"),
    ];

    for path in candidates.iter() {
        if path.exists() {
            if let Ok(img) = image::open(path) {
                let rgba = img.to_rgba8();
                let (width, height) = rgba.dimensions();
                return egui::IconData {
                    rgba: rgba.into_raw(),
                    width,
                    height,
                };
            }
        }
    }

    create_window_icon()
}
