use anyhow::Result;
use clap::Args;
use serde::Serialize;
use slidekit_core::{Layout, NavigationState};
use slidekit_model::SliderStyle;

use super::SliderArgs;

#[derive(Args, Debug)]
pub struct LayoutArgs {
    #[command(flatten)]
    slider: SliderArgs,
    /// Navigate to this item before reporting
    #[arg(long, allow_hyphen_values = true)]
    position: Option<isize>,
    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct LayoutReport {
    breakpoints: Vec<String>,
    layout: Layout,
    position: usize,
    max_position: usize,
    scroll_offset: f32,
    display_len: usize,
    style: SliderStyle,
    navigation: NavigationState,
}

pub fn run(args: &LayoutArgs) -> Result<()> {
    let mut slider = args.slider.mounted_slider()?;
    if let Some(target) = args.position {
        slider.go_to(target);
    }

    let report = LayoutReport {
        breakpoints: slider
            .config()
            .responsive
            .iter()
            .map(ToString::to_string)
            .collect(),
        layout: *slider.layout(),
        position: slider.position(),
        max_position: slider.max_position(),
        scroll_offset: slider.scroll_offset(),
        display_len: slider.display_len(),
        style: slider.style(),
        navigation: slider.navigation(),
    };
    slider.teardown();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }
    Ok(())
}

fn print_text(report: &LayoutReport) {
    println!("Breakpoints:");
    for rule in &report.breakpoints {
        println!("  {rule}");
    }
    println!("Mode:          {:?}", report.layout.mode);
    println!("Working width: {}px", report.layout.working_width);
    println!("Visible:       {}", report.layout.visible_count);
    println!("Item width:    {}px", report.layout.item_width);
    println!(
        "Position:      {} of {} (scroll {}px)",
        report.position, report.max_position, report.scroll_offset
    );
    println!("Display slots: {}", report.display_len);

    println!("Styles:");
    for (name, style) in [
        ("container", &report.style.container),
        ("list", &report.style.list),
        ("item", &report.style.item),
        ("tail", &report.style.tail),
    ] {
        if !style.is_empty() {
            println!("  {name:<9} {}", style.to_css());
        }
    }

    let nav = &report.navigation;
    println!(
        "Navigation:    {} (prev: {}, next: {}, color {})",
        if nav.visible { "shown" } else { "hidden" },
        nav.show_prev(),
        nav.show_next(),
        nav.color
    );
}
