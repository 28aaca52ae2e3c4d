use std::time::Duration;

use anyhow::{Context, Result, bail};

/// Run parameters for the simulator.
#[derive(Debug, Clone, PartialEq)]
pub struct StudioConfig {
    /// Frames to run before tearing the surfaces down.
    pub frames: u64,
    pub width: f64,
    pub height: f64,
    pub frame_interval: Duration,
    /// Print a text preview every N frames (0 disables previews).
    pub preview_every: u64,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            width: 48.0,
            height: 16.0,
            frame_interval: Duration::from_micros(16_667),
            preview_every: 40,
        }
    }
}

impl StudioConfig {
    /// Parses `--frames N`, `--size WxH`, `--fps N` and `--preview N`.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            let mut value = || args.next().with_context(|| format!("{flag} expects a value"));
            match flag.as_str() {
                "--frames" => {
                    config.frames = value()?.parse().context("--frames")?;
                }
                "--size" => {
                    let raw = value()?;
                    let (w, h) = raw
                        .split_once('x')
                        .with_context(|| format!("--size expects WxH, got {raw:?}"))?;
                    config.width = w.parse().context("--size width")?;
                    config.height = h.parse().context("--size height")?;
                }
                "--fps" => {
                    let fps: u32 = value()?.parse().context("--fps")?;
                    if fps == 0 {
                        bail!("--fps must be positive");
                    }
                    config.frame_interval = Duration::from_secs(1) / fps;
                }
                "--preview" => {
                    config.preview_every = value()?.parse().context("--preview")?;
                }
                other => bail!("unknown argument {other:?}"),
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<StudioConfig> {
        StudioConfig::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_args_gives_defaults() {
        assert_eq!(parse(&[]).unwrap(), StudioConfig::default());
    }

    #[test]
    fn flags_override() {
        let c = parse(&["--frames", "10", "--size", "80x24", "--fps", "50"]).unwrap();
        assert_eq!(c.frames, 10);
        assert_eq!((c.width, c.height), (80.0, 24.0));
        assert_eq!(c.frame_interval, Duration::from_millis(20));
    }

    #[test]
    fn bad_input_is_reported() {
        assert!(parse(&["--size", "80"]).is_err());
        assert!(parse(&["--fps", "0"]).is_err());
        assert!(parse(&["--frames"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
    }
}
