use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use evenrun_core::{read_sequence, scan_and_write, Config, OutputFormat, ScanEngine};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "evenrun", version, about = "计算整数序列中最长偶数连续段的长度")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 读取空白分隔的整数并输出最长偶数连续段长度
    Scan {
        /// 输入文件；省略或为 "-" 时读取标准输入
        #[arg(long)]
        input: Option<PathBuf>,

        /// 扫描引擎：linear 或 runs（默认取配置文件，否则 linear）
        #[arg(long, value_parser = ["linear", "runs"])]
        engine: Option<String>,

        /// 输出格式：text 或 json（默认取配置文件，否则 text）
        #[arg(long, value_parser = ["text", "json"])]
        format: Option<String>,

        /// 配置文件路径（TOML）
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级）；日志写 stderr，stdout 只输出结果
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { input, engine, format, config } => {
            let cfg = match &config {
                Some(path) => Config::load(path).with_context(|| format!("load config {}", path.display()))?,
                None => Config::default(),
            };
            let engine = engine.map(|s| s.parse::<ScanEngine>()).transpose()?;
            let format = format.map(|s| s.parse::<OutputFormat>()).transpose()?;
            let opts = cfg.scan_options(engine, format).context("resolve scan options")?;
            info!(?input, engine = ?opts.engine, format = ?opts.format, "starting scan");

            let sequence = read_sequence(open_input(input.as_deref())?).context("read input sequence")?;
            debug!(elements = sequence.len(), "input parsed");

            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            let report = scan_and_write(&sequence, &mut out, &opts).context("write result")?;
            out.flush().context("flush stdout")?;

            info!(
                longest_even_run = report.longest_even_run,
                runs = report.stats.runs,
                even_runs = report.stats.even_runs,
                "scan finished"
            );
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 打开输入源
fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        Some(p) if p != Path::new("-") => {
            let file = File::open(p).with_context(|| format!("open input {}", p.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}
