//! Networks command implementation.

use anyhow::Result;
use clap::Args;

use qrket_core::Network;

use crate::output;

#[derive(Args, Debug)]
pub struct NetworksArgs {
    /// Output the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: NetworksArgs) -> Result<()> {
    if args.json {
        let entries: Vec<serde_json::Value> = Network::ALL
            .iter()
            .map(|network| {
                let info = network.info();
                serde_json::json!({
                    "key": network.key(),
                    "name": info.name,
                    "color": info.color,
                    "placeholder": info.placeholder,
                })
            })
            .collect();
        return output::json_pretty(&entries);
    }

    for network in Network::ALL {
        let info = network.info();
        println!(
            "{:<10} {:<12} {:<8} {}",
            network.key(),
            info.name,
            info.color,
            info.placeholder
        );
    }

    Ok(())
}
