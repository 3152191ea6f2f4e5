use crate::output::print_json;
use anyhow::anyhow;
use santa_core::config::Config;
use santa_core::draw;
use std::path::Path;

pub fn run(root: &Path, config_path: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(config_path).map_err(|e| anyhow!("{e}"))?;
    let outcome =
        draw::ensure_draw(root, &config, &mut rand::thread_rng()).map_err(|e| anyhow!("{e}"))?;

    if json {
        #[derive(serde::Serialize)]
        struct DrawOutput {
            links_written: bool,
            assignments_written: bool,
            participants: usize,
        }
        return print_json(&DrawOutput {
            links_written: outcome.links_written,
            assignments_written: outcome.assignments_written,
            participants: outcome.links.len(),
        });
    }

    let describe = |written: bool| if written { "creat" } else { "ja existia" };
    println!("Links: {}", describe(outcome.links_written));
    println!("Assignacions: {}", describe(outcome.assignments_written));
    println!("Participants: {}", outcome.links.len());
    Ok(())
}
