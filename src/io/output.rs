//! Default output device driven by a [`ToneMixer`].

use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    SampleFormat, Stream,
};
use log::{error, info};
use rtrb::{Producer, PushError};

use crate::{
    error::{Result, ToneError},
    tone::{ToneMixer, ToneReceiver},
    MAX_BLOCK_SIZE,
};

/// A running output stream. Dropping it closes the stream.
pub struct AudioOutput {
    _stream: Stream,
    sample_rate: f32,
    channels: usize,
}

impl AudioOutput {
    /// Open the default output device and start rendering `mixer` into it.
    ///
    /// The mixer is moved to the audio thread. When `tap` is given, the mono
    /// mix is also pushed into it for visualisation; samples that do not fit
    /// are dropped.
    pub fn start<R>(mut mixer: ToneMixer<R>, tap: Option<Producer<f32>>) -> Result<Self>
    where
        R: ToneReceiver + Send + 'static,
    {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| ToneError::Device("no default output device available".into()))?;
        let config = device
            .default_output_config()
            .map_err(|e| ToneError::Device(format!("failed to fetch output config: {e}")))?;

        if config.sample_format() != SampleFormat::F32 {
            return Err(ToneError::Device(format!(
                "unsupported sample format {}",
                config.sample_format()
            )));
        }

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;
        mixer.set_sample_rate(sample_rate);

        info!(
            "Opened output device {} ({} Hz, {} channels)",
            device.name().unwrap_or_else(|_| "<unnamed>".to_string()),
            sample_rate,
            channels
        );

        // Buffer reused by audio callback
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];
        let mut tap = tap;

        let stream = device
            .build_output_stream(
                &config.config(),
                move |data: &mut [f32], _| {
                    let total_frames = data.len() / channels;
                    let mut frames_written = 0;

                    while frames_written < total_frames {
                        let frames_remaining = total_frames - frames_written;
                        let frames_to_render = frames_remaining.min(MAX_BLOCK_SIZE);

                        let block = &mut render_buf[..frames_to_render];
                        mixer.render_block(block);

                        // Duplicate mono to all channels
                        let out_off = frames_written * channels;
                        for (i, &s) in block.iter().enumerate() {
                            for ch in 0..channels {
                                data[out_off + i * channels + ch] = s;
                            }
                        }

                        // Push mono block to the tap, dropping the rest if full
                        if let Some(tap) = tap.as_mut() {
                            for &s in block.iter() {
                                if let Err(PushError::Full(_)) = tap.push(s) {
                                    break;
                                }
                            }
                        }

                        frames_written += frames_to_render;
                    }
                },
                |err| error!("Audio stream error: {err}"),
                None,
            )
            .map_err(|e| ToneError::Stream(format!("failed to build output stream: {e}")))?;

        stream
            .play()
            .map_err(|e| ToneError::Stream(format!("failed to start output stream: {e}")))?;

        Ok(Self {
            _stream: stream,
            sample_rate,
            channels,
        })
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn channels(&self) -> usize {
        self.channels
    }
}
