//! CLI/headless mode for scripting and testing
//!
//! Usage:
//!   dotspin --cli config                 Print the resolved configuration
//!   dotspin --cli frames                 Print dot geometry for every frame
//!   dotspin --cli simulate <ms>          Run the animation for <ms> and report
//!
//! Options:
//!   --color <color>      Dot color (#RRGGBB, #AARRGGBB or a name)
//!   --size <dimension>   Bounding box side (32dp, 48px, ...)
//!   --duration <ms>      Period of one full rotation
//!   --density <f>        Pixels per dp
//!   --json               Output in JSON format

use std::time::Duration;

use anyhow::{anyhow, Context};
use dotspin_core::config::{ATTR_COLOR, ATTR_DURATION, ATTR_SIZE};
use dotspin_core::geometry::{self, MAX_ANIMATION_VALUE};
use dotspin_core::{AttributeSet, Config, DisplayMetrics, LoadingIndicator, View};
use serde::Serialize;

/// Longest run `simulate` accepts, in milliseconds
pub const MAX_SIMULATION_MS: u64 = 10 * 60 * 1000;

/// CLI command to execute
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Config,
    Frames,
    Simulate { duration_ms: u64 },
}

/// CLI options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub json: bool,
    /// Attribute overrides from the command line
    pub attributes: AttributeSet,
    pub density: Option<f32>,
}

/// Parse CLI arguments and return command + options
pub fn parse_args(args: &[String]) -> Result<(CliCommand, CliOptions), String> {
    let mut options = CliOptions::default();
    let mut command: Option<CliCommand> = None;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        let mut value = |name: &str| -> Result<String, String> {
            i += 1;
            args.get(i)
                .cloned()
                .ok_or_else(|| format!("{} requires a value", name))
        };

        match arg {
            "--json" => options.json = true,
            "--color" => options.attributes.set(ATTR_COLOR, value(arg)?),
            "--size" => options.attributes.set(ATTR_SIZE, value(arg)?),
            "--duration" => options.attributes.set(ATTR_DURATION, value(arg)?),
            "--density" => {
                let raw = value(arg)?;
                let density: f32 = raw
                    .parse()
                    .map_err(|_| format!("Invalid density '{}'", raw))?;
                options.density = Some(density);
            }
            "config" => command = Some(CliCommand::Config),
            "frames" => command = Some(CliCommand::Frames),
            "simulate" => {
                let raw = value(arg)?;
                let duration_ms: u64 = raw
                    .parse()
                    .map_err(|_| format!("Invalid simulation length '{}'", raw))?;
                if duration_ms > MAX_SIMULATION_MS {
                    return Err(format!(
                        "Simulation length {}ms exceeds the limit of {}ms",
                        duration_ms, MAX_SIMULATION_MS
                    ));
                }
                command = Some(CliCommand::Simulate { duration_ms });
            }
            other if other.starts_with('-') => return Err(format!("Unknown option: {}", other)),
            other => return Err(format!("Unknown command: {}", other)),
        }
        i += 1;
    }

    let command = command
        .ok_or_else(|| "No command specified. Use: config, frames, or simulate <ms>".to_string())?;
    Ok((command, options))
}

/// Print CLI help
pub fn print_help() {
    println!("dotspin CLI mode");
    println!();
    println!("USAGE:");
    println!("    dotspin --cli <command> [options]");
    println!();
    println!("COMMANDS:");
    println!("    config              Print the resolved indicator configuration");
    println!("    frames              Print dot positions for every animation frame");
    println!("    simulate <ms>       Attach, run the animation for <ms>, detach, and report");
    println!("                        (at most {}ms)", MAX_SIMULATION_MS);
    println!();
    println!("OPTIONS:");
    println!("    --color <color>     Dot color (#RRGGBB, #AARRGGBB or a name)");
    println!("    --size <dimension>  Bounding box side, e.g. 32dp or 48px");
    println!("    --duration <ms>     Period of one full rotation");
    println!("    --density <f>       Pixels per dp");
    println!("    --json              Output in JSON format");
}

/// Resolved configuration, as reported by `config`
#[derive(Debug, Serialize)]
struct ConfigReport {
    color: String,
    size_px: f32,
    stroke_width: f32,
    duration_ms: u64,
    density: f32,
}

#[derive(Debug, Serialize)]
struct DotReport {
    index: usize,
    x: f32,
    y: f32,
    radius: f32,
}

#[derive(Debug, Serialize)]
struct FrameReport {
    value: i32,
    rotation_degrees: f32,
    dots: Vec<DotReport>,
}

/// Outcome of a simulated run
#[derive(Debug, PartialEq, Serialize)]
pub struct SimulationReport {
    pub frames: usize,
    /// Animation values in the order they were first seen after each change
    pub values: Vec<i32>,
    pub cycles: usize,
    pub running_after_detach: bool,
}

/// Run a CLI command
pub fn run(command: CliCommand, options: CliOptions) -> anyhow::Result<()> {
    let mut config = Config::load();
    if let Some(density) = options.density {
        config.density = density;
    }
    let metrics = config.metrics();

    let mut attributes = config.indicator.clone();
    attributes.merge(&options.attributes);
    let indicator = LoadingIndicator::from_attributes(&attributes, &metrics)
        .context("Invalid indicator attributes")?;

    match command {
        CliCommand::Config => print_config(&indicator, &metrics, options.json),
        CliCommand::Frames => print_frames(&indicator, options.json),
        CliCommand::Simulate { duration_ms } => {
            let step = Duration::from_millis(config.frame_interval_ms.max(1));
            let report = simulate(indicator, Duration::from_millis(duration_ms), step);
            print_simulation(&report, options.json)
        }
    }
}

fn print_config(
    indicator: &LoadingIndicator,
    metrics: &DisplayMetrics,
    json: bool,
) -> anyhow::Result<()> {
    let report = ConfigReport {
        color: indicator.color().to_string(),
        size_px: indicator.size(),
        stroke_width: indicator.stroke_width(),
        duration_ms: indicator.config().duration_ms,
        density: metrics.density,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Color:        {}", report.color);
        println!("Size:         {}px", report.size_px);
        println!("Stroke width: {}px", report.stroke_width);
        println!("Duration:     {}ms", report.duration_ms);
        println!("Density:      {}", report.density);
    }
    Ok(())
}

fn frame_reports(size: f32) -> Vec<FrameReport> {
    (0..=MAX_ANIMATION_VALUE)
        .map(|value| FrameReport {
            value,
            rotation_degrees: geometry::rotation_degrees(value),
            dots: geometry::layout_dots(size, value)
                .iter()
                .map(|dot| DotReport {
                    index: dot.index,
                    x: dot.center.x,
                    y: dot.center.y,
                    radius: dot.radius,
                })
                .collect(),
        })
        .collect()
}

fn print_frames(indicator: &LoadingIndicator, json: bool) -> anyhow::Result<()> {
    let frames = frame_reports(indicator.size());

    if json {
        println!("{}", serde_json::to_string_pretty(&frames)?);
        return Ok(());
    }

    for frame in &frames {
        println!("Frame {} ({}\u{00B0})", frame.value, frame.rotation_degrees);
        for dot in &frame.dots {
            println!(
                "  dot {}  ({:>7.3}, {:>7.3})  r={:.3}",
                dot.index, dot.x, dot.y, dot.radius
            );
        }
    }
    Ok(())
}

/// Attach the indicator, feed it frames every `step` for `length`, then detach
pub fn simulate(mut indicator: LoadingIndicator, length: Duration, step: Duration) -> SimulationReport {
    indicator.on_attached_to_window();

    let mut frames = 0;
    let mut values: Vec<i32> = Vec::new();
    let mut cycles = 0;
    let mut t = Duration::ZERO;
    while t <= length {
        indicator.on_frame(t);
        frames += 1;

        let value = indicator.animation_value();
        if values.last() != Some(&value) {
            if value < values.last().copied().unwrap_or(0) {
                cycles += 1;
            }
            values.push(value);
        }
        t += step;
    }

    indicator.on_detached_from_window();

    SimulationReport {
        frames,
        values,
        cycles,
        running_after_detach: indicator.has_animator(),
    }
}

fn print_simulation(report: &SimulationReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    let values: Vec<String> = report.values.iter().map(i32::to_string).collect();
    println!("Frames delivered:     {}", report.frames);
    println!("Completed rotations:  {}", report.cycles);
    println!("Values:               {}", values.join(" "));
    println!(
        "Running after detach: {}",
        if report.running_after_detach { "yes" } else { "no" }
    );
    if report.running_after_detach {
        return Err(anyhow!("animation still running after detach"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotspin_core::IndicatorConfig;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_commands_and_options() {
        let (command, options) =
            parse_args(&args(&["frames", "--size", "48px", "--json", "--density", "2"])).unwrap();
        assert_eq!(command, CliCommand::Frames);
        assert!(options.json);
        assert_eq!(options.attributes.get(ATTR_SIZE), Some("48px"));
        assert_eq!(options.density, Some(2.0));

        let (command, _) = parse_args(&args(&["simulate", "1600"])).unwrap();
        assert_eq!(command, CliCommand::Simulate { duration_ms: 1600 });
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["spin"])).is_err());
        assert!(parse_args(&args(&["config", "--color"])).is_err());
        assert!(parse_args(&args(&["simulate", "soon"])).is_err());
        assert!(parse_args(&args(&["config", "--verbose"])).is_err());
    }

    #[test]
    fn test_simulation_length_is_bounded() {
        let limit = MAX_SIMULATION_MS.to_string();
        assert!(parse_args(&args(&["simulate", &limit])).is_ok());

        let over = (MAX_SIMULATION_MS + 1).to_string();
        let err = parse_args(&args(&["simulate", &over])).unwrap_err();
        assert!(err.contains("exceeds"));
        assert!(parse_args(&args(&["simulate", "18446744073709551615"])).is_err());
    }

    #[test]
    fn test_simulation_counts_full_rotations() {
        let report = simulate(
            LoadingIndicator::default(),
            Duration::from_millis(1_600),
            Duration::from_millis(16),
        );
        assert_eq!(report.values, vec![0, 1, 2, 3, 4, 5, 6, 7, 0, 1, 2, 3, 4, 5, 6, 7, 0]);
        assert_eq!(report.cycles, 2);
        assert_eq!(report.frames, 101);
        assert!(!report.running_after_detach);
    }

    #[test]
    fn test_frame_reports_cover_every_value() {
        let size = IndicatorConfig::default().size;
        let frames = frame_reports(size);
        assert_eq!(frames.len(), 8);
        assert_eq!(frames[3].rotation_degrees, 135.0);
        assert_eq!(frames[0].dots[0].radius, 2.0);
        assert!(frames.iter().all(|f| f.dots.len() == 8));
    }
}
