use anyhow::Context;
use ironwood_dns_domain::Config;
use ironwood_dns_infrastructure::zone::{load_domains, load_records};
use ironwood_dns_infrastructure::ZoneTree;
use tracing::info;

pub fn load_zone(config: &Config) -> anyhow::Result<ZoneTree> {
    let domains_file = config
        .zone
        .domains_file
        .as_ref()
        .context("no domain list configured; pass --domains or set zone.domains_file")?;

    let mut tree = load_domains(domains_file)
        .with_context(|| format!("loading domain list '{}'", domains_file.display()))?;

    if let Some(records_file) = &config.zone.records_file {
        load_records(&mut tree, records_file)
            .with_context(|| format!("loading record list '{}'", records_file.display()))?;
    }

    info!(
        domains_file = %domains_file.display(),
        records_file = config
            .zone
            .records_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "none".to_string()),
        "Authority tree loaded"
    );

    Ok(tree)
}
