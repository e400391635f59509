// cli.rs - Command-line interface of the transition inspector
use clap::Parser;
use serde::Serialize;

use crate::core::{DisplayContext, Frame};
use crate::error::TransitionError;
use crate::render::{RecordingRenderer, RenderCall, RenderContext, SlideTextures};
use crate::traits::{Renderer, TextureDescriptor, TextureFilter, TextureFormat, TextureHandle, Viewport};
use crate::transition::Transition;
use crate::types::TransitionSettings;

#[derive(Parser, Debug, Clone)]
#[command(name = "transition-inspect")]
#[command(about = "Play a slide transition against a recording renderer", long_about = None)]
pub struct Cli {
    /// Transition name or JSON config, e.g. '{"kind": "helix", "rows": 4}'
    #[arg(required_unless_present = "list")]
    pub transition: Option<String>,

    /// List the known transition names and exit
    #[arg(long)]
    pub list: bool,

    /// Number of evenly spaced frames to play, both ends included
    #[arg(long, default_value_t = 5)]
    pub frames: usize,

    /// Extra frame times to report
    #[arg(long = "at", value_name = "TIME")]
    pub at: Vec<f32>,

    /// Slide size as WIDTHxHEIGHT
    #[arg(long, default_value = "1920x1080", value_parser = parse_size)]
    pub slide: (u32, u32),

    /// Display size as WIDTHxHEIGHT
    #[arg(long, default_value = "1920x1080", value_parser = parse_size)]
    pub display: (u32, u32),

    /// Seed for transitions with random axes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Parse `WIDTHxHEIGHT`
pub fn parse_size(value: &str) -> Result<(u32, u32), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {value}"))?;
    let width = width.trim().parse().map_err(|e| format!("bad width in {value}: {e}"))?;
    let height = height.trim().parse().map_err(|e| format!("bad height in {value}: {e}"))?;
    Ok((width, height))
}

/// Sorted frame times: `count` evenly spaced in [0, 1] plus `extra`
pub fn frame_times(count: usize, extra: &[f32]) -> Vec<f32> {
    let mut times: Vec<f32> = match count {
        0 => Vec::new(),
        1 => vec![0.0],
        n => (0..n).map(|i| i as f32 / (n - 1) as f32).collect(),
    };
    times.extend(extra.iter().map(|t| t.clamp(0.0, 1.0)));
    times.sort_by(f32::total_cmp);
    times.dedup();
    times
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    pub time: f32,
    pub draw_calls: usize,
    /// Off-screen targets drawn into
    pub offscreen_passes: usize,
    /// Overall scene matrix, column major
    pub overall: [f32; 16],
    /// Matrix of the first leaving primitive, column major
    pub first_leaving: Option<[f32; 16]>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub name: &'static str,
    pub variant: &'static str,
    pub settings: TransitionSettings,
    pub leaving_primitives: usize,
    pub entering_primitives: usize,
    pub scene_objects: usize,
    pub vertices: usize,
    pub prepare_calls: usize,
    pub frames: Vec<FrameReport>,
    /// Renderer resources still alive after `finish`
    pub leaked_resources: usize,
}

fn slide_texture(renderer: &mut RecordingRenderer, size: (u32, u32)) -> Result<TextureHandle, TransitionError> {
    Ok(renderer.create_texture(&TextureDescriptor {
        width: size.0,
        height: size.1,
        format: TextureFormat::Rgb8,
        filter: TextureFilter::Linear,
        repeat: false,
        data: None,
    })?)
}

/// Run `transition` through its whole lifecycle and summarise what it drew
pub fn inspect(
    transition: &mut Transition,
    times: &[f32],
    slide: (u32, u32),
    display: (u32, u32),
) -> Result<InspectReport, TransitionError> {
    let mut renderer = RecordingRenderer::new(Viewport::new(0, 0, display.0, display.1));
    let mut context = RenderContext::new();

    let textures = SlideTextures::new(slide_texture(&mut renderer, slide)?, slide_texture(&mut renderer, slide)?);
    renderer.clear_calls();

    transition.prepare(&mut renderer, &mut context)?;
    let prepare_calls = renderer.calls().len();

    let base = Frame::new(0.0, DisplayContext::new(slide.0, slide.1), DisplayContext::new(display.0, display.1));
    let mut frames = Vec::with_capacity(times.len());
    for &time in times {
        let frame = base.at(time);
        renderer.clear_calls();
        transition.display(&mut renderer, &mut context, textures, &frame)?;

        let scene = transition.scene();
        let (ws, hs) = (frame.width_scale(), frame.height_scale());
        frames.push(FrameReport {
            time,
            draw_calls: renderer.draw_calls().len(),
            offscreen_passes: renderer
                .calls()
                .iter()
                .filter(|call| matches!(call, RenderCall::BeginOffscreenPass { .. }))
                .count(),
            overall: scene.overall_transform(time, ws, hs).to_cols_array(),
            first_leaving: scene.leaving().first().map(|p| p.transform_at(time, ws, hs).to_cols_array()),
        });
    }

    transition.finish(&mut renderer, &mut context)?;
    renderer.release_texture(textures.leaving);
    renderer.release_texture(textures.entering);

    let scene = transition.scene();
    Ok(InspectReport {
        name: transition.name(),
        variant: transition.variant().name(),
        settings: *transition.settings(),
        leaving_primitives: scene.leaving().len(),
        entering_primitives: scene.entering().len(),
        scene_objects: scene.scene_objects().len(),
        vertices: scene.vertex_count(),
        prepare_calls,
        frames,
        leaked_resources: renderer.live_resources(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::{create_helix_transition, create_vortex_transition};

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("800x600"), Ok((800, 600)));
        assert_eq!(parse_size("1024X768"), Ok((1024, 768)));
        assert!(parse_size("800").is_err());
        assert!(parse_size("wide x 600").is_err());
    }

    #[test]
    fn test_frame_times() {
        assert_eq!(frame_times(3, &[]), vec![0.0, 0.5, 1.0]);
        assert_eq!(frame_times(1, &[0.25]), vec![0.0, 0.25]);
        assert_eq!(frame_times(2, &[1.0, 7.0]), vec![0.0, 1.0]);
        assert!(frame_times(0, &[]).is_empty());
    }

    #[test]
    fn test_cli_requires_transition_unless_listing() {
        assert!(Cli::try_parse_from(["transition-inspect"]).is_err());
        assert!(Cli::try_parse_from(["transition-inspect", "--list"]).is_ok());
        let cli = Cli::try_parse_from(["transition-inspect", "helix", "--display", "800x600", "--at", "0.3"]).unwrap();
        assert_eq!(cli.display, (800, 600));
        assert_eq!(cli.slide, (1920, 1080));
        assert_eq!(cli.at, vec![0.3]);
    }

    #[test]
    fn test_inspect_helix() {
        let mut transition = create_helix_transition(4);
        let report = inspect(&mut transition, &[0.0, 1.0], (800, 600), (800, 600)).unwrap();
        assert_eq!(report.name, "helix");
        assert_eq!(report.leaving_primitives, 4);
        assert_eq!(report.frames.len(), 2);
        assert_eq!(report.frames[0].draw_calls, 8);
        assert_eq!(report.frames[0].offscreen_passes, 0);
        assert_eq!(report.leaked_resources, 0);
    }

    #[test]
    fn test_inspect_counts_shadow_passes() {
        let mut transition = create_vortex_transition();
        let report = inspect(&mut transition, &[0.5], (800, 600), (800, 600)).unwrap();
        // one shadow map per slide
        assert_eq!(report.frames[0].offscreen_passes, 2);
        assert_eq!(report.leaked_resources, 0);
    }
}
