use std::process::exit;
use clap::Parser;
use log::{error, info};
use rootcerts::audit::audit::audit;
use rootcerts::audit::structs::audit_horizons::AuditHorizons;
use rootcerts::common::common::setup_logging;
use rootcerts::config::structs::configuration::Configuration;
use rootcerts::embedded::mozilla_ca_certificates_pem;
use rootcerts::structs::Cli;
use rootcerts::trust::structs::native_system_roots::NativeSystemRoots;
use rootcerts::trust::trust::{install, override_from_env};

const EXIT_AUDIT_FAILED: i32 = 1;
const EXIT_BUNDLE_ERROR: i32 = 2;
const EXIT_CONFIG_ERROR: i32 = 101;

fn main()
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(EXIT_CONFIG_ERROR)
    };
    if let Some(months) = args.fail_months {
        config.audit.fail_after_months = months;
    }
    if let Some(months) = args.warn_months {
        config.audit.warn_after_months = months;
    }
    if let Some(path) = &args.bundle {
        config.audit.bundle_path = Some(path.clone());
    }
    config.audit.json_output |= args.json;
    if let Err(e) = config.validate() {
        eprintln!("[ERROR] {}", e);
        exit(EXIT_CONFIG_ERROR);
    }

    if let Err(e) = setup_logging(&config) {
        eprintln!("[ERROR] {}", e);
        exit(EXIT_CONFIG_ERROR);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if let Some(path) = &args.export {
        match std::fs::write(path, mozilla_ca_certificates_pem()) {
            Ok(_) => {
                info!("[EXPORT] The embedded bundle has been written to {}", path);
                exit(0);
            }
            Err(e) => {
                error!("[EXPORT] The embedded bundle could not be written to {}: {}", path, e);
                exit(EXIT_BUNDLE_ERROR);
            }
        }
    }

    let force_override = config.trust.force_embedded || override_from_env(&config.trust.override_env);
    let state = install(&NativeSystemRoots, force_override);
    info!("[TRUST] Active trust anchors: {} ({} roots)", state.source(), state.roots_count());
    if args.trust_only {
        exit(0);
    }

    let pem = match &config.audit.bundle_path {
        None => mozilla_ca_certificates_pem().as_bytes().to_vec(),
        Some(path) => match std::fs::read(path) {
            Ok(pem) => pem,
            Err(e) => {
                error!("[AUDIT] Bundle {} could not be read: {}", path, e);
                exit(EXIT_BUNDLE_ERROR);
            }
        }
    };

    let horizons = match AuditHorizons::from_months(chrono::Utc::now(), config.audit.fail_after_months, config.audit.warn_after_months) {
        Ok(horizons) => horizons,
        Err(e) => {
            error!("[AUDIT] {}", e);
            exit(EXIT_CONFIG_ERROR);
        }
    };

    let report = match audit(&pem, &horizons) {
        Ok(report) => report,
        Err(e) => {
            error!("[AUDIT] {}", e);
            exit(EXIT_BUNDLE_ERROR);
        }
    };

    if config.audit.json_output {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("[AUDIT] Report could not be serialized: {}", e),
        }
    }

    info!(
        "[AUDIT] {} passed, {} failed, {} warnings",
        report.passed_count(),
        report.failed_count(),
        report.warnings_count()
    );
    if !report.success {
        exit(EXIT_AUDIT_FAILED);
    }
}
