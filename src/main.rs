use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use stance_analyzer::config::Config;
use stance_analyzer::geometry::project_to_pixel_space;
use stance_analyzer::render::{Bone, Overlay, OverlayStyle};
use stance_analyzer::{analyze_frame, JointIndex, Landmark, MetricEntry, MetricsBundle, PoseResult};

/// 姿勢推定結果(JSON)からスタンス計測値を表示する
#[derive(Parser, Debug)]
#[command(name = "stance-analyzer", version = env!("STANCE_ANALYZER_VERSION"))]
struct Cli {
    /// 推定器の出力 JSON (landmarks / worldLandmarks)
    result: PathBuf,

    /// 設定ファイル
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// 解析する人物（省略時は設定値）
    #[arg(long)]
    body: Option<usize>,

    /// フレーム幅（描画内容の出力用）
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// フレーム高さ（描画内容の出力用）
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// 計測値と描画内容を JSON で出力
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct BoneReport {
    name: &'static str,
    from: (i32, i32),
    to: (i32, i32),
}

#[derive(Serialize)]
struct Report<'a> {
    metrics: &'a MetricsBundle,
    entries: Vec<MetricEntry>,
    bones: Vec<BoneReport>,
    overlay: &'a Overlay,
}

/// 骨ごとのピクセル座標（名前付き）
fn bone_reports(landmarks: &[Landmark], width: u32, height: u32) -> Vec<BoneReport> {
    Bone::ALL
        .iter()
        .filter_map(|bone| {
            let (a, b) = bone.indices();
            Some(BoneReport {
                name: bone.name(),
                from: project_to_pixel_space(*landmarks.get(a)?, width, height),
                to: project_to_pixel_space(*landmarks.get(b)?, width, height),
            })
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config);
    let body_index = cli.body.unwrap_or(config.detection.body_index);

    let result = PoseResult::load(&cli.result)?;
    let analysis = analyze_frame(&result, body_index, config.metrics.reference_hip_cm)
        .with_context(|| format!("Failed to analyze {}", cli.result.display()))?;

    let style = OverlayStyle::scaled(&config.overlay, config.overlay.zoom);
    let overlay = analysis.overlay(cli.width, cli.height, style);
    let bones = bone_reports(&analysis.landmarks, cli.width, cli.height);

    if cli.json {
        let report = Report {
            metrics: &analysis.metrics,
            entries: analysis.metrics.entries(),
            bones,
            overlay: &overlay,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=== Stance Analyzer {} ===", env!("STANCE_ANALYZER_VERSION"));
    println!("Result: {} ({} bodies, using #{})", cli.result.display(), result.body_count(), body_index);
    println!();
    for entry in analysis.metrics.entries() {
        println!("  {:<22} {}", entry.name, entry.value);
    }
    println!();
    println!(
        "Overlay {}x{}: {} points, {} lines (radius {}px, width {}px)",
        overlay.width,
        overlay.height,
        overlay.points.len(),
        overlay.lines.len(),
        overlay.style.point_radius,
        overlay.style.line_width
    );
    for point in &overlay.points {
        // * は腰・肩の中点から求めた関節
        let (name, mark) = match JointIndex::from_index(point.joint) {
            Some(joint) => (format!("{:?}", joint), if joint.is_synthetic() { "*" } else { "" }),
            None => (format!("#{}", point.joint), ""),
        };
        println!("  {:<16}{:<2}({}, {})", name, mark, point.x, point.y);
    }
    for bone in &bones {
        println!("  {:<16}  {:?} -> {:?}", bone.name, bone.from, bone.to);
    }

    Ok(())
}
