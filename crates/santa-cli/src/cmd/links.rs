use crate::output::{print_json, print_table};
use anyhow::anyhow;
use santa_core::config::Config;
use santa_core::links::{self, LinkRegistry};
use std::path::Path;

pub fn run(root: &Path, config_path: &Path, public_url: &str, json: bool) -> anyhow::Result<()> {
    let config = Config::load(config_path).map_err(|e| anyhow!("{e}"))?;
    let registry = LinkRegistry::load(root).map_err(|e| anyhow!("{e}"))?;
    dump(&config, &registry, public_url, json)
}

/// Print every participant's personal link, sorted by name.
///
/// Also run at server startup so the operator always has the full link table
/// on the console.
pub fn dump(
    config: &Config,
    registry: &LinkRegistry,
    public_url: &str,
    json: bool,
) -> anyhow::Result<()> {
    let mut rows: Vec<(String, String, String)> = registry
        .entries()
        .iter()
        .filter_map(|entry| {
            let Some(person) = config.participant_by_token(&entry.person) else {
                tracing::warn!(token = %entry.person, "no configured participant for persisted link");
                return None;
            };
            Some((
                person.name.clone(),
                person.phone.clone(),
                links::link_url(public_url, &entry.id),
            ))
        })
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));

    if json {
        #[derive(serde::Serialize)]
        struct LinkRow<'a> {
            name: &'a str,
            phone: &'a str,
            url: &'a str,
        }
        let out: Vec<LinkRow> = rows
            .iter()
            .map(|(name, phone, url)| LinkRow {
                name: name.as_str(),
                phone: phone.as_str(),
                url: url.as_str(),
            })
            .collect();
        return print_json(&out);
    }

    println!("Links de l'Amic Invisible:\n");
    print_table(
        &["NOM", "TELÈFON", "LINK"],
        rows.into_iter()
            .map(|(name, phone, url)| vec![name, phone, url])
            .collect(),
    );
    println!("\nTotal: {} participants", registry.len());
    Ok(())
}
