use crate::output::print_json;
use anyhow::anyhow;
use santa_core::config::Config;
use santa_core::links::LinkRegistry;
use santa_core::notify::{self, DeliveryReport, DeliveryStatus, Notifier, TwilioNotifier};
use std::path::Path;

pub fn run(root: &Path, config_path: &Path, public_url: &str, json: bool) -> anyhow::Result<()> {
    let config = Config::load(config_path).map_err(|e| anyhow!("{e}"))?;
    let registry = LinkRegistry::load(root).map_err(|e| anyhow!("{e}"))?;

    let notifier = build_notifier(&config)?;
    let reports = notify::deliver_links(
        notifier.as_ref().map(|n| n as &dyn Notifier),
        &config,
        &registry,
        public_url,
    );

    if json {
        return print_json(&reports);
    }
    print_reports(&reports, config.skip_sms);
    Ok(())
}

/// One Twilio client for the whole batch, or `None` in test mode.
pub fn build_notifier(config: &Config) -> anyhow::Result<Option<TwilioNotifier>> {
    if config.skip_sms {
        return Ok(None);
    }
    match &config.twilio {
        Some(twilio) => Ok(Some(TwilioNotifier::new(twilio))),
        None => Err(anyhow!(
            "skip_sms is false but no twilio credentials are configured"
        )),
    }
}

pub fn print_reports(reports: &[DeliveryReport], test_mode: bool) {
    println!("Enviant notificacions...\n");
    for report in reports {
        match &report.status {
            DeliveryStatus::Sent { sid } => {
                println!("  {} ({}) — enviat ({sid})", report.name, report.phone);
            }
            DeliveryStatus::Skipped => {
                println!("  {} ({}) — no enviat: {}", report.name, report.phone, report.url);
            }
            DeliveryStatus::Failed { reason } => {
                println!("  {} ({}) — error: {reason}", report.name, report.phone);
            }
        }
    }

    let summary = notify::summarize(reports);
    if test_mode {
        println!("\nMode proves actiu (skip_sms: true): cap SMS enviat de veritat.");
        println!("Posa skip_sms: false a la configuració per enviar-los.");
    }
    println!(
        "\nResum: {} enviats, {} omesos, {} errors",
        summary.sent, summary.skipped, summary.failed
    );
}
