use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use slide_transitions::cli::{frame_times, inspect, Cli, InspectReport};
use slide_transitions::TransitionKind;

fn print_report(report: &InspectReport) {
    println!("{} ({} variant)", report.name, report.variant);
    println!(
        "  primitives: {} leaving, {} entering, {} scene objects, {} vertices",
        report.leaving_primitives, report.entering_primitives, report.scene_objects, report.vertices
    );
    println!(
        "  settings: mipmap leaving={} entering={}, version {:.1}",
        report.settings.use_mipmap_leaving,
        report.settings.use_mipmap_entering,
        report.settings.required_graphics_version
    );
    println!("  prepare: {} renderer calls", report.prepare_calls);
    for frame in &report.frames {
        println!(
            "  t={:.3}: {} draws, {} off-screen passes",
            frame.time, frame.draw_calls, frame.offscreen_passes
        );
    }
    if report.leaked_resources > 0 {
        println!("  leaked {} renderer resources", report.leaked_resources);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list {
        for kind in TransitionKind::all() {
            println!("{}", kind.name());
        }
        return Ok(());
    }

    let spec = cli.transition.as_deref().unwrap_or_default();
    let kind: TransitionKind = spec
        .parse()
        .with_context(|| format!("Failed to parse transition '{spec}'"))?;

    let mut transition = match cli.seed {
        Some(seed) => kind.build_with_rng(&mut StdRng::seed_from_u64(seed)),
        None => kind.build(),
    };
    log::info!("Inspecting {} with {} frames", kind.name(), cli.frames);

    let times = frame_times(cli.frames, &cli.at);
    let report = inspect(&mut transition, &times, cli.slide, cli.display)
        .with_context(|| format!("Failed to play {}", kind.name()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}
