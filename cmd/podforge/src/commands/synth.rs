//! `podforge synth` - synthesize a script file into an MP3.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use podforge_speech::SpeechOptions;
use tracing::info;

use super::load_request;
use crate::config::PodforgeConfig;
use crate::store::{BlobStore, FsStore, PodcastRecord, PodcastStore};

#[derive(Args)]
pub struct SynthCommand {
    /// Annotated script file to synthesize
    script: PathBuf,

    /// Full request file (YAML or JSON SpeechOptions); the script file
    /// still supplies the text
    #[arg(short = 'f', long = "file")]
    request: Option<PathBuf>,

    /// Output MP3 path (default: out.mp3; ignored with --save)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Store the result as a podcast record instead of writing a file
    #[arg(long)]
    save: bool,

    /// Podcast title for the stored record
    #[arg(long, default_value = "Untitled podcast")]
    title: String,

    /// Owner email for the stored record
    #[arg(long, default_value = "local@podforge")]
    user: String,
}

impl SynthCommand {
    pub async fn run(&self, config: &PodforgeConfig) -> Result<()> {
        let text = std::fs::read_to_string(&self.script)
            .with_context(|| format!("reading {}", self.script.display()))?;

        let mut options: SpeechOptions = match &self.request {
            Some(path) => load_request(path)?,
            None => SpeechOptions::default(),
        };
        options.text = text;

        let pipeline = config.build_pipeline()?;
        let output = pipeline.run(&options).await?;
        info!(
            bytes = output.audio.len(),
            duration = output.duration_secs,
            "synthesis complete"
        );

        if self.save {
            let store = FsStore::new(&config.store_dir);
            let audio_url = store.put_audio(&output.audio).await?;
            store
                .append(&PodcastRecord {
                    title: self.title.clone(),
                    description: String::new(),
                    script: options.text.clone(),
                    thumbnail_url: None,
                    audio_url: audio_url.clone(),
                    user_email: self.user.clone(),
                    created_at: Utc::now(),
                })
                .await?;
            println!("{audio_url}");
        } else {
            let path = self
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from("out.mp3"));
            std::fs::write(&path, &output.audio)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("{} ({}s)", path.display(), output.duration_secs);
        }
        Ok(())
    }
}
