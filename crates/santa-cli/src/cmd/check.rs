use crate::output::print_json;
use anyhow::anyhow;
use santa_core::config::Config;
use std::path::Path;

pub fn run(config_path: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(config_path).map_err(|e| anyhow!("{e}"))?;
    config.validate().map_err(|e| anyhow!("{e}"))?;

    if json {
        #[derive(serde::Serialize)]
        struct CheckOutput {
            ok: bool,
            participants: usize,
            skip_sms: bool,
            twilio_configured: bool,
        }
        return print_json(&CheckOutput {
            ok: true,
            participants: config.people.len(),
            skip_sms: config.skip_sms,
            twilio_configured: config.twilio.is_some(),
        });
    }

    println!("Configuració correcta: {} participants.", config.people.len());
    if config.skip_sms {
        println!("Mode proves actiu (skip_sms: true): no s'enviarà cap SMS.");
    } else if config.twilio.is_none() {
        println!("Atenció: skip_sms és false però no hi ha credencials de Twilio.");
    }
    Ok(())
}
