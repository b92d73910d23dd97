//! 请求链路拓扑重建
//!
//! 读取一个 correlation id 的日志事件，输出 hop 列表和带布局的图 JSON

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use trace_topo::config::TopoConfig;
use trace_topo::flow::{Hop, HopOrdering, derive_flow};
use trace_topo::graph::{FlowGraph, build_graph};
use trace_topo::input::{filter_correlation, load_events};
use trace_topo::summary::{TimelineSummary, summarize};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(
    name = "trace-topo",
    about = "请求链路拓扑重建：从一个请求的日志事件推导服务 hop 图"
)]
struct Args {
    /// 事件文件（.json 数组，或 .jsonl / .ndjson 每行一个）
    #[arg(long)]
    events: PathBuf,

    /// 只保留 correlation_id 等于该值的事件
    #[arg(long)]
    correlation_id: Option<String>,

    /// 配置 JSON（分类模式、布局、排序方式）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 输出 JSON 文件；省略时打印到 stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// 信任文件中的事件顺序，不按时间戳排序
    #[arg(long)]
    arrival_order: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    summary: TimelineSummary,
    hops: Vec<Hop>,
    graph: FlowGraph,
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut cfg = match &args.config {
        Some(path) => TopoConfig::load(path)?,
        None => TopoConfig::default(),
    };
    if args.arrival_order {
        cfg.ordering = HopOrdering::Arrival;
    }
    let opts = cfg.flow_opts()?;

    let mut events = load_events(&args.events)?;
    if let Some(id) = &args.correlation_id {
        events = filter_correlation(events, id);
    }

    let summary = summarize(&events);
    let hops = derive_flow(&events, &opts);
    let graph = build_graph(&hops, &cfg.layout);
    if graph.is_empty() {
        warn!("没有可用事件，图为空");
    }
    info!(
        events = summary.total_events,
        hops = hops.len(),
        edges = graph.edges.len(),
        "拓扑重建完成"
    );

    let raw = serde_json::to_string_pretty(&Report {
        summary,
        hops,
        graph,
    })?;
    match &args.out {
        Some(path) => fs::write(path, raw)?,
        None => println!("{raw}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    // 初始化 tracing（写到 stderr，stdout 只留 JSON）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
