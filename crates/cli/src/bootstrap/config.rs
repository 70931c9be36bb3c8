use ironwood_dns_domain::{CliOverrides, Config};

pub fn load_config(config_path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(config_path, overrides)?;
    config.validate()?;
    Ok(config)
}
