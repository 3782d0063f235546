//! `podforge cover` - generate cover art and print its URL.

use anyhow::Result;
use clap::Args;
use podforge_genai::{CoverArt, CoverArtConfig};

use crate::config::PodforgeConfig;

#[derive(Args)]
pub struct CoverCommand {
    /// Podcast title to illustrate
    #[arg(short = 't', long)]
    title: String,

    /// Model override
    #[arg(long, default_value = "dall-e-3")]
    model: String,
}

impl CoverCommand {
    pub async fn run(&self, config: &PodforgeConfig) -> Result<()> {
        let api_key = config.require_openai()?.to_string();
        let cover = CoverArt::new(CoverArtConfig {
            api_key,
            model: self.model.clone(),
            base_url: None,
        })?;
        let url = cover.generate(&self.title).await?;
        println!("{url}");
        Ok(())
    }
}
