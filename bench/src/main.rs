use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use bytecoder_bench::{build_frame, init_states, step_states, Frame, Rng, SerdeFrame};
use clap::Parser;
use codec::{ByteDecoder, ByteEncoder, EncoderOptions};
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "bytecoder-bench",
    version,
    about = "bytecoder simulation benchmark harness"
)]
struct Cli {
    /// Number of simulated entities.
    #[arg(long, default_value_t = 16)]
    players: u32,
    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 300)]
    ticks: u32,
    /// RNG seed for deterministic results.
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Optional burst event cadence.
    #[arg(long)]
    burst_every: Option<u32>,
    /// Skip reserving the estimated size before each encode.
    #[arg(long)]
    no_size_hint: bool,
    /// Output directory for summary.json.
    #[arg(long, default_value = "target/bytecoder-bench")]
    out_dir: PathBuf,
    /// Fail if the average frame size exceeds this value.
    #[arg(long)]
    max_avg_frame_bytes: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = EncoderOptions::default().with_size_hint(!cli.no_size_hint);

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("create output dir {}", cli.out_dir.display()))?;

    let mut rng = Rng::new(cli.seed);
    let mut states = init_states(cli.players, &mut rng);
    let mut summary = Summary::new(cli.players, cli.ticks, cli.seed, cli.burst_every);
    let mut encoder = ByteEncoder::with_options(options);

    for tick in 1..=cli.ticks {
        step_states(&mut states, &mut rng, tick, cli.burst_every);
        let frame = build_frame(tick, &states);

        encoder.clear();
        let start = Instant::now();
        let bytes = encoder.encode(&frame).context("encode frame")?;
        summary.encode_us.push(elapsed_us(start));
        summary.frame_bytes_total += bytes.len() as u64;

        let start = Instant::now();
        let decoded: Frame = ByteDecoder::new(bytes).decode().context("decode frame")?;
        summary.decode_us.push(elapsed_us(start));
        if decoded != frame {
            anyhow::bail!("frame at tick {tick} did not survive a round-trip");
        }

        summary.bincode_bytes_total += encode_bincode_frame(&frame)? as u64;
    }

    summary.finalize();
    summary.assert_budget(cli.max_avg_frame_bytes)?;
    write_summary_json(&cli.out_dir, &summary)?;
    Ok(())
}

fn elapsed_us(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}

fn write_summary_json(out_dir: &Path, summary: &Summary) -> Result<()> {
    let path = out_dir.join("summary.json");
    let contents = serde_json::to_string_pretty(summary).context("serialize summary")?;
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn encode_bincode_frame(frame: &Frame) -> Result<usize> {
    let bytes = bincode::serialize(&SerdeFrame::from(frame)).context("bincode frame")?;
    Ok(bytes.len())
}

#[derive(Debug, Serialize)]
struct Summary {
    players: u32,
    ticks: u32,
    seed: u64,
    burst_every: Option<u32>,
    frame_bytes_total: u64,
    bincode_bytes_total: u64,
    avg_frame_bytes: u64,
    avg_bincode_bytes: u64,
    avg_encode_us: u64,
    p95_encode_us: u64,
    avg_decode_us: u64,
    p95_decode_us: u64,
    #[serde(skip)]
    encode_us: Vec<u64>,
    #[serde(skip)]
    decode_us: Vec<u64>,
}

impl Summary {
    fn new(players: u32, ticks: u32, seed: u64, burst_every: Option<u32>) -> Self {
        Self {
            players,
            ticks,
            seed,
            burst_every,
            frame_bytes_total: 0,
            bincode_bytes_total: 0,
            avg_frame_bytes: 0,
            avg_bincode_bytes: 0,
            avg_encode_us: 0,
            p95_encode_us: 0,
            avg_decode_us: 0,
            p95_decode_us: 0,
            encode_us: Vec::new(),
            decode_us: Vec::new(),
        }
    }

    fn finalize(&mut self) {
        if self.ticks > 0 {
            self.avg_frame_bytes = self.frame_bytes_total / u64::from(self.ticks);
            self.avg_bincode_bytes = self.bincode_bytes_total / u64::from(self.ticks);
        }
        (self.avg_encode_us, self.p95_encode_us) = timing(&mut self.encode_us);
        (self.avg_decode_us, self.p95_decode_us) = timing(&mut self.decode_us);
    }

    fn assert_budget(&self, max_avg: Option<u64>) -> Result<()> {
        if let Some(max_avg) = max_avg {
            if self.avg_frame_bytes > max_avg {
                anyhow::bail!(
                    "avg frame bytes {} exceeds budget {}",
                    self.avg_frame_bytes,
                    max_avg
                );
            }
        }
        Ok(())
    }
}

/// Average and p95 of `values`, or zeros when empty.
fn timing(values: &mut [u64]) -> (u64, u64) {
    if values.is_empty() {
        return (0, 0);
    }
    let total: u64 = values.iter().sum();
    (total / values.len() as u64, p95(values))
}

fn p95(values: &mut [u64]) -> u64 {
    values.sort_unstable();
    let idx = ((values.len() as f64) * 0.95).ceil() as usize;
    let idx = idx.saturating_sub(1).min(values.len() - 1);
    values[idx]
}
