use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use slidekit_core::{RecordingScrollSink, Slider, WidthState};

use super::{SliderArgs, step::Step};

#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[command(flatten)]
    slider: SliderArgs,
    /// Comma-separated steps: next, prev, go:N, tick, resize:W[:C], scroll:o1/o2[@edge]
    #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    steps: Vec<Step>,
    /// Emit one JSON object per step
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct StepReport {
    step: String,
    position: usize,
    max_position: usize,
    visible_count: usize,
    scroll_offset: f32,
    /// Scroll command issued by this step, if any.
    scrolled_to: Option<f32>,
}

pub fn run(args: &SimulateArgs) -> Result<()> {
    let mut slider = args.slider.mounted_slider()?;
    // Mounting at a configured start position already issued a scroll.
    slider.sink_mut().clear();

    for step in &args.steps {
        apply(&mut slider, step).with_context(|| format!("applying step {step}"))?;
        let report = StepReport {
            step: step.to_string(),
            position: slider.position(),
            max_position: slider.max_position(),
            visible_count: slider.visible_count(),
            scroll_offset: slider.scroll_offset(),
            scrolled_to: slider.sink().last().map(|request| request.left),
        };
        slider.sink_mut().clear();

        if args.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            let scrolled = report
                .scrolled_to
                .map(|left| format!(" (scrolled to {left}px)"))
                .unwrap_or_default();
            println!(
                "{:<16} position {} of {}, offset {}px{scrolled}",
                report.step, report.position, report.max_position, report.scroll_offset
            );
        }
    }

    slider.teardown();
    Ok(())
}

fn apply(slider: &mut Slider<RecordingScrollSink>, step: &Step) -> Result<()> {
    match step {
        Step::Next => {
            slider.next();
        }
        Step::Prev => {
            slider.prev();
        }
        Step::GoTo(target) => {
            slider.go_to(*target);
        }
        Step::Tick => {
            slider.autoplay_step();
        }
        Step::Resize { window, container } => {
            slider.on_resize(WidthState::new(*window, container.unwrap_or(*window)))?;
        }
        Step::Scroll { offsets, leading } => {
            if slider.resync_now(offsets, *leading).is_none() {
                tracing::warn!("scroll step {step} found no item to sync to");
            }
        }
    }
    Ok(())
}
