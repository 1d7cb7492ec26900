use clap::Parser;
use seo_audit::{AuditError, Site, analyze_bytes};
use serde::Serialize;
use std::process::ExitCode;

mod args;
use args::{Args, Command, OutputFormat};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("{}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AuditError> {
    match args.command {
        Command::Page { file, url } => {
            ::log::info!("Auditing page {}", file.display());
            let bytes = tokio::fs::read(&file)
                .await
                .map_err(|e| AuditError::Io { path: file.clone(), source: e })?;
            let mut report = analyze_bytes(&bytes, &url)?;
            report.file_path = Some(file.display().to_string());
            print_json(&report, args.format)
        }
        Command::Site {
            dir,
            site_id,
            base_url,
            concurrency,
            config,
        } => {
            let mut site = match config {
                Some(path) => Site::new(&dir).with_config_file(path)?.with_root_dir(&dir),
                None => Site::new(&dir),
            };
            if let Some(site_id) = site_id {
                site = site.with_site_id(site_id);
            }
            if let Some(base_url) = base_url {
                site = site.with_base_url(base_url);
            }
            if let Some(concurrency) = concurrency {
                site = site.with_max_concurrency(concurrency);
            }

            let start_time = std::time::Instant::now();
            let report = site.audit().await?;
            ::log::info!(
                "Audit complete - {} pages in {:.2} seconds",
                report.pages.len(),
                start_time.elapsed().as_secs_f64()
            );
            print_json(&report, args.format)
        }
        Command::Sitemap { dir, base_url } => {
            let xml = Site::new(dir).with_base_url(base_url).sitemap()?;
            println!("{xml}");
            Ok(())
        }
        Command::Robots { base_url } => {
            println!("{}", seo_audit::sitemap::generate_robots_txt(&base_url));
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T, format: OutputFormat) -> Result<(), AuditError> {
    let json = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Compact => serde_json::to_string(value)?,
    };
    println!("{json}");
    Ok(())
}
