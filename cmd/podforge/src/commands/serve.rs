//! `podforge serve` - run the synthesis HTTP server.

use anyhow::Result;
use clap::Args;

use crate::config::PodforgeConfig;
use crate::server;

#[derive(Args)]
pub struct ServeCommand {
    /// Listen address (overrides PODFORGE_ADDR)
    #[arg(short = 'a', long)]
    addr: Option<String>,
}

impl ServeCommand {
    pub async fn run(&self, config: &PodforgeConfig) -> Result<()> {
        let pipeline = config.build_pipeline()?;
        let addr = self.addr.as_deref().unwrap_or(&config.addr);
        server::serve(addr, pipeline).await
    }
}
