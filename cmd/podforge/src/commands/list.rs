//! `podforge list` - list stored podcasts.

use anyhow::Result;
use clap::Args;

use crate::config::PodforgeConfig;
use crate::store::{FsStore, PodcastStore};

#[derive(Args)]
pub struct ListCommand {
    /// Output as JSON lines (for piping)
    #[arg(long)]
    json: bool,
}

impl ListCommand {
    pub async fn run(&self, config: &PodforgeConfig) -> Result<()> {
        let store = FsStore::new(&config.store_dir);
        for record in store.list().await? {
            if self.json {
                println!("{}", serde_json::to_string(&record)?);
            } else {
                println!(
                    "{}  {}  {}",
                    record.created_at.format("%Y-%m-%d %H:%M"),
                    record.title,
                    record.audio_url
                );
            }
        }
        Ok(())
    }
}
