use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::config::{Strategy, load_config};
use crate::layout::compute_layout;
use crate::layout_dump::LayoutDump;
use crate::render::{render_svg, write_output_svg};
use crate::roster::{PlayerId, PositionGroup, Roster, load_roster};
use crate::selection::FieldState;

#[derive(Parser, Debug)]
#[command(name = "pitchmap", version, about = "Roster field-layout engine and SVG pitch renderer")]
pub struct Args {
    /// Roster JSON file or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output SVG file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file (insets, strategy, tables, theme)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Layout strategy (overrides the config file)
    #[arg(short = 's', long = "strategy", value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Comma-separated player ids to place; the whole roster if omitted
    #[arg(long = "on-field")]
    pub on_field: Option<String>,

    /// Highlight a position group (Forwards, Midfielders, Defenders, Goalkeepers)
    #[arg(short = 'g', long = "group")]
    pub group: Option<String>,

    /// Select (highlight) a single player by id
    #[arg(long = "select")]
    pub select: Option<PlayerId>,

    /// Write the computed placements as JSON
    #[arg(long = "dump")]
    pub dump: Option<PathBuf>,

    /// Width
    #[arg(short = 'w', long = "width", default_value_t = 700.0)]
    pub width: f32,

    /// Height
    #[arg(short = 'H', long = "height", default_value_t = 1120.0)]
    pub height: f32,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum StrategyArg {
    #[value(name = "static-slot-table")]
    SlotTable,
    #[value(name = "dynamic-zone-spread")]
    ZoneSpread,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::SlotTable => Strategy::SlotTable,
            StrategyArg::ZoneSpread => Strategy::ZoneSpread,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    config.render.width = args.width;
    config.render.height = args.height;
    if let Some(strategy) = args.strategy {
        config.layout.strategy = strategy.into();
    }

    let roster = match args.input.as_deref() {
        Some(path) if path != Path::new("-") => load_roster(path)?,
        _ => Roster::from_json_str(&read_stdin()?)?,
    };

    let mut state = match args.on_field.as_deref() {
        Some(list) => {
            let mut state = FieldState::new();
            for id in parse_id_list(list)? {
                if roster.get(id).is_none() {
                    return Err(anyhow::anyhow!("unknown player id {id} in --on-field"));
                }
                state.toggle_on_field(id);
            }
            state
        }
        None => FieldState::with_all_on_field(&roster),
    };

    if let Some(name) = args.group.as_deref() {
        let group = PositionGroup::from_name(name)
            .ok_or_else(|| anyhow::anyhow!("unknown position group '{name}'"))?;
        state.toggle_group(group);
    }
    if let Some(id) = args.select {
        if roster.get(id).is_none() {
            return Err(anyhow::anyhow!("unknown player id {id} in --select"));
        }
        state.toggle_player(id);
    }

    let layout = compute_layout(&roster, state.on_field(), &config.layout);

    if let Some(path) = &args.dump {
        LayoutDump::from_layout(&layout, &state).write_json(path)?;
    }

    let svg = render_svg(&layout, &state, &config.theme, &config.render);
    write_output_svg(&svg, args.output.as_deref())?;
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn parse_id_list(list: &str) -> Result<Vec<PlayerId>> {
    list.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<PlayerId>()
                .map_err(|_| anyhow::anyhow!("invalid player id '{part}'"))
        })
        .collect()
}
