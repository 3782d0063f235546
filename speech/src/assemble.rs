//! Audio assembly: ordered concatenation, optional codec normalization and
//! a duration estimate.

use std::process::Stdio;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// The final assembled artifact.
#[derive(Debug, Clone)]
pub struct AssembledAudio {
    /// MP3 bytes, segment payloads concatenated in parse order.
    pub audio: Vec<u8>,
    /// Estimated duration in seconds.
    pub duration_secs: u64,
}

/// Estimates playback duration from byte length alone: `ceil(len / 32000)`.
///
/// A fixed-bitrate heuristic carried over for output parity; it is not
/// derived from the actual MP3 frames and over- or under-shoots on variable
/// bitrate audio.
pub fn estimate_duration_secs(byte_len: usize) -> u64 {
    (byte_len as u64).div_ceil(32000)
}

/// Assembles per-segment MP3 buffers into one artifact.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    /// When set, every segment is piped through an external transcode to
    /// fixed output parameters (44100 Hz, 2 channels, 128 kbps MP3) before
    /// concatenation, masking container mismatches between providers.
    pub normalize: bool,
}

impl Assembler {
    /// Creates an assembler; `normalize` enables the external transcode.
    pub fn new(normalize: bool) -> Self {
        Self { normalize }
    }

    /// Concatenates the buffers in order and estimates the duration.
    ///
    /// No header rewriting, no crossfade, no inserted silence: MP3 players
    /// accept back-to-back frame streams.
    pub async fn assemble(&self, segments: Vec<Vec<u8>>) -> Result<AssembledAudio> {
        let mut audio = Vec::new();

        for segment in segments {
            let bytes = if self.normalize {
                normalize_segment(&segment).await?
            } else {
                segment
            };
            audio.extend_from_slice(&bytes);
        }

        let duration_secs = estimate_duration_secs(audio.len());
        debug!(bytes = audio.len(), duration_secs, "assembled audio");

        Ok(AssembledAudio {
            audio,
            duration_secs,
        })
    }
}

/// Re-encodes one MP3 buffer to 44100 Hz stereo 128 kbps via ffmpeg,
/// stdin to stdout. A non-zero exit fails the whole pipeline.
async fn normalize_segment(input: &[u8]) -> Result<Vec<u8>> {
    let mut child = Command::new("ffmpeg")
        .args([
            "-f", "mp3", "-i", "pipe:0", "-ar", "44100", "-ac", "2", "-ab", "128k", "-f", "mp3",
            "pipe:1",
        ])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| Error::Processing(format!("failed to spawn ffmpeg: {}", e)))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| Error::Processing("ffmpeg stdin unavailable".to_string()))?;
    let mut stdout = child
        .stdout
        .take()
        .ok_or_else(|| Error::Processing("ffmpeg stdout unavailable".to_string()))?;

    // Feed stdin from a separate task so a full stdout pipe cannot deadlock
    // the exchange.
    let input = input.to_vec();
    let writer = tokio::spawn(async move {
        stdin.write_all(&input).await?;
        stdin.shutdown().await?;
        Ok::<_, std::io::Error>(())
    });

    let mut output = Vec::new();
    stdout
        .read_to_end(&mut output)
        .await
        .map_err(|e| Error::Processing(format!("ffmpeg stream error: {}", e)))?;

    writer
        .await
        .map_err(|e| Error::Processing(format!("ffmpeg writer task failed: {}", e)))?
        .map_err(|e| Error::Processing(format!("ffmpeg stream error: {}", e)))?;

    let status = child
        .wait()
        .await
        .map_err(|e| Error::Processing(format!("ffmpeg wait failed: {}", e)))?;

    if !status.success() {
        return Err(Error::Processing(format!(
            "ffmpeg exited with {}",
            status.code().map_or_else(|| "signal".to_string(), |c| c.to_string())
        )));
    }

    Ok(output)
}
