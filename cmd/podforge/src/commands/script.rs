//! `podforge script` - generate an annotated podcast script.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use podforge_genai::{ScriptRequest, ScriptSpeaker, ScriptWriter, ScriptWriterConfig};

use super::load_request;
use crate::config::PodforgeConfig;

#[derive(Args)]
pub struct ScriptCommand {
    /// Podcast topic
    #[arg(short = 't', long)]
    title: String,

    /// Extra context for the model
    #[arg(short = 'd', long, default_value = "")]
    description: String,

    /// Speaker roster file (YAML or JSON list of {name, gender})
    #[arg(short = 's', long)]
    speakers: Option<PathBuf>,

    /// Model override
    #[arg(long, default_value = "gemini-1.5-flash")]
    model: String,

    /// Output file (default: stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

impl ScriptCommand {
    pub async fn run(&self, config: &PodforgeConfig) -> Result<()> {
        let api_key = config.require_gemini()?.to_string();
        let speakers: Vec<ScriptSpeaker> = match &self.speakers {
            Some(path) => load_request(path)?,
            None => Vec::new(),
        };

        let writer = ScriptWriter::new(ScriptWriterConfig {
            api_key,
            model: self.model.clone(),
            base_url: None,
        })?;
        let script = writer
            .generate(&ScriptRequest {
                title: self.title.clone(),
                description: self.description.clone(),
                speakers,
            })
            .await?;

        match &self.output {
            Some(path) => std::fs::write(path, &script)
                .with_context(|| format!("writing {}", path.display()))?,
            None => println!("{script}"),
        }
        Ok(())
    }
}
