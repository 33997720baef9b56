use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Config, Invocation, DEFAULT_LOG_FILTER};
use profile::{setup_profile_image, PROFILE_FILE_NAME, PROFILE_SIZE};

fn main() -> ExitCode {
    let config = Config::from_args();

    // Keep stdout for the banner and status lines
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("Logging initialized...");

    let config = match config {
        Ok(c) => c,
        Err(e) => {
            print_banner();
            println!("\n{}", e);

            return ExitCode::from(2)
        }
    };

    match config.invocation {
        Invocation::Banner => {
            print_banner();
            ExitCode::SUCCESS
        },
        Invocation::Process { image_path, output_dir } => {
            match setup_profile_image(&image_path, &output_dir) {
                true => ExitCode::SUCCESS,
                false => ExitCode::FAILURE,
            }
        },
    }
}

fn print_banner() {
    let rule = "=".repeat(50);

    println!("{}", rule);
    println!("PROFILE IMAGE SETUP");
    println!("{}", rule);

    println!("\nTo use this tool:");
    println!("1. Place your profile image in the same folder as this tool");
    println!("2. Run: profile-image <image_path> <output_dir>");
    println!("\nOr use in code:");
    println!("  profile::setup_profile_image(\"path/to/image.jpg\", \"output/folder\")");
    println!("\nThe image will be:");
    println!("  - Cropped to square");
    println!("  - Resized to {}x{} pixels", PROFILE_SIZE, PROFILE_SIZE);
    println!("  - Made circular");
    println!("  - Saved as {}", PROFILE_FILE_NAME);
}
