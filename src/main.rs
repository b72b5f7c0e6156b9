use clap::Parser;
use gradle_launch::domain::ports::ConfigProvider;
use gradle_launch::utils::{logger, validation::Validate};
use gradle_launch::{CliConfig, LaunchError, LaunchManifest, Launcher, ShellExecutor};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting gradle-launch");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        report_and_exit(e);
    }

    let result = match &config.config {
        Some(path) => {
            let manifest = match LaunchManifest::from_file(path) {
                Ok(manifest) => manifest,
                Err(e) => {
                    tracing::error!("❌ Could not load manifest {}: {}", path.display(), e);
                    report_and_exit(e);
                }
            };
            if let Err(e) = manifest.validate() {
                tracing::error!("❌ Manifest validation failed: {}", e);
                report_and_exit(e);
            }

            let settings = manifest.into_settings(&config);
            let launcher = Launcher::new(ShellExecutor::new(settings.monitor()));
            launcher.run(&settings).await
        }
        None => {
            let launcher = Launcher::new(ShellExecutor::new(config.monitor));
            launcher.run(&config).await
        }
    };

    match result {
        Ok(()) => {
            tracing::info!("✅ Build completed successfully");
        }
        Err(e) => {
            tracing::error!("❌ Build launch failed: {}", e);
            report_and_exit(e);
        }
    }
}

fn report_and_exit(e: LaunchError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
