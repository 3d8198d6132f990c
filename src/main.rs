use anyhow::{bail, ensure, Context};
use clap::{builder::PathBufValueParser, value_parser, Arg, ArgAction, ArgMatches, Command};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use lat_long::{haversine, haversine_many, parse_point_pairs, Bearing, GeoPoint};

fn main() {
    let matches = cli().get_matches();

    let level = matches
        .get_one::<String>("log_level")
        .map(String::as_str)
        .unwrap_or("warn");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&matches) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("distance", m)) => run_distance(m),
        Some(("destination", m)) => run_destination(m),
        Some(("batch", m)) => run_batch(m),
        Some((name, _)) => bail!("unknown subcommand '{name}'"),
        None => bail!("no subcommand given"),
    }
}

fn number_arg(id: &'static str, value_name: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .required(true)
        .value_name(value_name)
        .value_parser(value_parser!(f64))
        .allow_negative_numbers(true)
        .help(help)
}

fn cli() -> Command {
    Command::new("lat_long")
        .version("0.1.0")
        .about("Great-circle distance and destination projection on a spherical earth.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log_level")
                .long("log-level")
                .global(true)
                .value_name("LEVEL")
                .default_value("warn")
                .help("Log filter used when RUST_LOG is not set (error, warn, info, debug, trace)."),
        )
        .subcommand(
            Command::new("distance")
                .about("Prints the haversine distance in meters between two points.")
                .arg(number_arg("lat1", "LAT1", "Latitude of the first point, decimal degrees."))
                .arg(number_arg("lon1", "LON1", "Longitude of the first point, decimal degrees."))
                .arg(number_arg("lat2", "LAT2", "Latitude of the second point, decimal degrees."))
                .arg(number_arg("lon2", "LON2", "Longitude of the second point, decimal degrees.")),
        )
        .subcommand(
            Command::new("destination")
                .about("Prints the latitude and longitude reached from a point by a distance and bearing.")
                .arg(number_arg("lat", "LAT", "Latitude of the origin, decimal degrees."))
                .arg(number_arg("lng", "LNG", "Longitude of the origin, decimal degrees."))
                .arg(number_arg("dist", "DIST", "Distance to travel in meters."))
                .arg(number_arg(
                    "bearing",
                    "BEARING",
                    "Bearing in radians, counter-clockwise from north (pi/2 = west).",
                ))
                .arg(
                    Arg::new("azimuth")
                        .long("azimuth")
                        .action(ArgAction::SetTrue)
                        .help("Read BEARING as compass degrees, clockwise from north."),
                ),
        )
        .subcommand(
            Command::new("batch")
                .about("Prints the haversine distance for every record in a point-pair file.")
                .arg(
                    Arg::new("data_file")
                        .long("data-file")
                        .required(true)
                        .value_name("DATA-FILE")
                        .value_parser(PathBufValueParser::new())
                        .help("File with one '<lat1> <lon1> <lat2> <lon2> [name]' record per line."),
                ),
        )
}

fn number(m: &ArgMatches, id: &str) -> anyhow::Result<f64> {
    m.get_one::<f64>(id)
        .copied()
        .with_context(|| format!("missing value for '{id}'"))
}

fn run_distance(m: &ArgMatches) -> anyhow::Result<()> {
    let from = GeoPoint::try_new(number(m, "lat1")?, number(m, "lon1")?)
        .context("invalid first point")?;
    let to = GeoPoint::try_new(number(m, "lat2")?, number(m, "lon2")?)
        .context("invalid second point")?;

    let meters = haversine(from.lat, from.lon, to.lat, to.lon);
    debug!("{from} -> {to} = {meters} m");
    println!("{meters}");

    Ok(())
}

fn run_destination(m: &ArgMatches) -> anyhow::Result<()> {
    let origin =
        GeoPoint::try_new(number(m, "lat")?, number(m, "lng")?).context("invalid origin")?;
    let dist = number(m, "dist")?;
    ensure!(dist.is_finite(), "distance must be finite, got {dist}");
    ensure!(dist >= 0.0, "distance must not be negative, got {dist}");

    let raw_bearing = number(m, "bearing")?;
    ensure!(raw_bearing.is_finite(), "bearing must be finite, got {raw_bearing}");
    let bearing = if m.get_flag("azimuth") {
        Bearing::from_azimuth_degrees(raw_bearing)
    } else {
        Bearing::from_radians(raw_bearing)
    };
    debug!("azimuth = {}°", bearing.azimuth_degrees());

    let dest = origin.destination(dist, bearing);
    debug!("{origin} + {dist} m @ {bearing} = {dest}");
    println!("{} {}", dest.lat, dest.lon);

    Ok(())
}

fn run_batch(m: &ArgMatches) -> anyhow::Result<()> {
    let path = m
        .get_one::<PathBuf>("data_file")
        .context("missing value for 'data_file'")?;
    ensure!(
        path.exists(),
        "specified data file '{}' does not exist",
        path.display()
    );

    let data =
        fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    let pairs = parse_point_pairs(&data)
        .with_context(|| format!("failed to parse '{}'", path.display()))?;
    info!("{} point pairs in '{}'", pairs.len(), path.display());

    let lat1: Vec<f64> = pairs.iter().map(|p| p.from.lat).collect();
    let lon1: Vec<f64> = pairs.iter().map(|p| p.from.lon).collect();
    let lat2: Vec<f64> = pairs.iter().map(|p| p.to.lat).collect();
    let lon2: Vec<f64> = pairs.iter().map(|p| p.to.lon).collect();
    let distances = haversine_many(&lat1, &lon1, &lat2, &lon2)?;

    for (pair, meters) in pairs.iter().zip(distances) {
        println!("{}\t{}", pair.name, meters);
    }

    Ok(())
}
