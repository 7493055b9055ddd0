use anyhow::{Context, Result, bail};
use gpickr::logging::{LoggingConfig, init_logging};
use gpickr::prelude::*;

const USAGE: &str = "\
usage: gpickr-cli <gradient> [command ...] [--json] [--mode <mode>] [--config <file>] [-v]

commands:
  add:<color>@<location>   add a stop (location as 0.5 or 50%)
  remove:<location>        remove the stop at a location
  remove-color:<color>     remove the first stop with a color
  color:<color>            recolor the focused stop
  clear                    keep only the focused stop
  mode:<mode>              switch to linear, radial or conic
  cycle                    switch to the next allowed mode
  angle:<angle>            linear angle, e.g. 45deg or \"to top left\"
  pos:<position>           radial position code (tl, m, br, ...) or expression";

struct Args {
    gradient: String,
    commands: Vec<String>,
    json: bool,
    mode: Option<Mode>,
    config: Option<String>,
    verbose: bool,
}

fn parse_args() -> Result<Args> {
    let mut gradient = None;
    let mut commands = Vec::new();
    let mut json = false;
    let mut mode = None;
    let mut config = None;
    let mut verbose = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            "--json" => json = true,
            "-v" | "--verbose" => verbose = true,
            "--mode" => {
                let value = args.next().context("--mode needs a value")?;
                mode = Some(value.parse::<Mode>().with_context(|| format!("bad --mode {value:?}"))?);
            }
            "--config" => config = Some(args.next().context("--config needs a path")?),
            _ if gradient.is_none() => gradient = Some(arg),
            _ => commands.push(arg),
        }
    }

    let Some(gradient) = gradient else {
        bail!("missing gradient\n\n{USAGE}");
    };
    Ok(Args { gradient, commands, json, mode, config, verbose })
}

fn load_config(path: Option<&str>) -> Result<PickerConfig> {
    let Some(path) = path else {
        return Ok(PickerConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

/// `0.5` or `50%`.
fn parse_location(s: &str) -> Result<f32> {
    let s = s.trim();
    let value = match s.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f32>().map(|v| v / 100.0),
        None => s.parse::<f32>(),
    };
    value.with_context(|| format!("bad location {s:?}"))
}

fn parse_color(s: &str) -> Result<ColorToken> {
    ColorToken::parse(s).with_context(|| format!("bad color {s:?}"))
}

fn apply(editor: &mut StopEditor, command: &str) -> Result<()> {
    let (name, value) = command.split_once(':').unwrap_or((command, ""));
    match name {
        "add" => {
            let (color, location) = value
                .rsplit_once('@')
                .context("add expects <color>@<location>")?;
            editor.add_stop(parse_color(color)?, parse_location(location)?);
        }
        "remove" => {
            editor.remove_by_location(parse_location(value)?)?;
        }
        "remove-color" => {
            editor.remove_by_color(&parse_color(value)?)?;
        }
        "color" => editor.set_focused_color(parse_color(value)?)?,
        "clear" => editor.clear_stops(),
        "mode" => {
            let mode = value.parse::<Mode>()?;
            editor.set_mode(mode)?;
        }
        "cycle" => {
            editor.cycle_mode();
        }
        "angle" => editor.set_linear_angle_str(value)?,
        "pos" => {
            if value.contains(' ') {
                editor.set_radial_position_str(value)?;
            } else {
                editor.set_radial_position_code(value)?;
            }
        }
        _ => bail!("unknown command {name:?}\n\n{USAGE}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = parse_args()?;

    let default_level = if args.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    init_logging(LoggingConfig { default_level, ..Default::default() });

    let config = load_config(args.config.as_deref())?;
    let mut editor = StopEditor::new(config).context("invalid picker configuration")?;
    editor.init();

    editor
        .set_gradient(&args.gradient)
        .with_context(|| format!("cannot import {:?}", args.gradient))?;

    for command in &args.commands {
        apply(&mut editor, command).with_context(|| format!("command {command:?} failed"))?;
    }

    if args.json {
        let out = serde_json::json!({
            "mode": editor.mode(),
            "gradient": editor.gradient(),
            "stops": editor.stops(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        let mode = args.mode.unwrap_or(editor.mode());
        println!("{}", editor.gradient_for(mode));
    }
    Ok(())
}
