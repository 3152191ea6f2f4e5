use crate::cmd::{links, notify};
use anyhow::anyhow;
use santa_core::config::Config;
use santa_core::draw;
use santa_core::notify::{deliver_links, Notifier};
use std::path::Path;
use std::sync::Arc;

pub fn run(
    root: &Path,
    config_path: &Path,
    port: u16,
    public_url: &str,
    no_notify: bool,
) -> anyhow::Result<()> {
    let config = Arc::new(Config::load(config_path).map_err(|e| anyhow!("{e}"))?);

    // A failed draw is fatal to generation only: the server still starts and
    // answers every personal link with the "not initialized" page.
    match draw::ensure_draw(root, &config, &mut rand::thread_rng()) {
        Ok(outcome) => {
            if outcome.fresh() && !no_notify {
                match notify::build_notifier(&config) {
                    Ok(notifier) => {
                        let reports = deliver_links(
                            notifier.as_ref().map(|n| n as &dyn Notifier),
                            &config,
                            &outcome.links,
                            public_url,
                        );
                        notify::print_reports(&reports, config.skip_sms);
                    }
                    Err(e) => tracing::error!("notifications skipped: {e:#}"),
                }
            }
            // The operator always gets the full link table on the console.
            links::dump(&config, &outcome.links, public_url, false)?;
        }
        Err(e) => {
            tracing::error!("draw failed, serving uninitialized: {e:#}");
            // Records from an earlier run may still be there; the operator
            // gets the dump either way.
            if let Ok(registry) = santa_core::links::LinkRegistry::load(root) {
                links::dump(&config, &registry, public_url, false)?;
            }
        }
    }

    let rt = tokio::runtime::Runtime::new()?;
    let root_buf = root.to_path_buf();

    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
        let actual_port = listener.local_addr()?.port();
        println!("\nAmic Invisible → http://localhost:{actual_port}");

        tokio::select! {
            res = santa_server::serve_on(root_buf, config, listener) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
