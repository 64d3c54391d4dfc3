use clap::{Arg, ArgAction, ArgMatches, Command};
use seedlife::config::{Config, ConfigPatch};
use seedlife::engine::Engine;
use seedlife::render::{draw_grid, TextSurface};
use std::error::Error;
use std::process::exit;
use std::str::FromStr;

fn main() {
    exit(match inner_main() {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("{}", err);
            1
        }
    })
}

fn inner_main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = Command::new("seedlife")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Conway's Game of Life with seeded, shareable simulations")
        .arg(
            Arg::new("grid-width")
                .short('w')
                .long("grid-width")
                .help("Width of the grid in cells"),
        )
        .arg(
            Arg::new("grid-height")
                .short('H')
                .long("grid-height")
                .help("Height of the grid in cells"),
        )
        .arg(
            Arg::new("cell-size")
                .short('c')
                .long("cell-size")
                .help("Cell edge length in pixels (forwarded to the renderer)"),
        )
        .arg(
            Arg::new("wrap")
                .long("wrap")
                .action(ArgAction::SetTrue)
                .help("Wrap neighbour lookups around the grid edges"),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .help("Seed for deterministic grid initialization"),
        )
        .arg(
            Arg::new("token")
                .short('t')
                .long("token")
                .conflicts_with_all(["grid-width", "grid-height", "cell-size", "wrap", "seed"])
                .help("Reproduce a shared simulation from its token"),
        )
        .arg(
            Arg::new("generations")
                .short('g')
                .long("generations")
                .default_value("10")
                .help("Number of generations to run"),
        )
        .get_matches();

    let config = match matches.get_one::<String>("token") {
        Some(token) => Config::from_token(token)?,
        None => Config::default().merge(&patch_from_flags(&matches)?),
    };
    log::info!("resolved configuration: {:?}", config);

    let generations: u32 = get_number("generations", &matches)?.unwrap_or(10);
    let token = config.to_token();
    if config.cell_size <= 0 {
        return Err(format!("cell size must be > 0 to render, got {}", config.cell_size).into());
    }
    let cell_size = config.cell_size;
    let mut engine = Engine::new(config)?;

    for generation in 0..=generations {
        let mut surface = TextSurface::new(cell_size);
        draw_grid(engine.grid(), cell_size, &mut surface);
        println!("generation {}:\n{}\n", generation, surface.frame());
        engine.advance();
    }
    println!("share token: {}", token);
    Ok(())
}

fn patch_from_flags(matches: &ArgMatches) -> Result<ConfigPatch, Box<dyn Error>> {
    Ok(ConfigPatch {
        num_cells_x: get_number("grid-width", matches)?,
        num_cells_y: get_number("grid-height", matches)?,
        cell_size: get_number("cell-size", matches)?,
        wrap_around: matches.get_flag("wrap").then_some(true),
        seed: get_number("seed", matches)?,
    })
}

fn get_number<A>(name: &str, matches: &ArgMatches) -> Result<Option<A>, Box<dyn Error>>
where
    A: FromStr,
    <A as FromStr>::Err: std::fmt::Display,
{
    matches
        .get_one::<String>(name)
        .map(|s| {
            s.parse::<A>()
                .map_err(|e| format!("{} is not a valid number: {}", name, e).into())
        })
        .transpose()
}
