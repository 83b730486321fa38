extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelview;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use std::str::FromStr;

use mandelview::{show, write_image, Config, Renderer, Window};

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

// Each side must fit a u16, which also keeps 3 * width * height far
// from overflowing.
fn validate_size(s: &str) -> Result<(), String> {
    validate_pair::<u16>(s, 'x', "Could not parse output image size, sides are 1 to 65535")?;
    match parse_pair::<u16>(s, 'x') {
        Some((w, h)) if w > 0 && h > 0 && w % 2 == 0 => Ok(()),
        _ => Err("Image width must be even and both sides non-zero".to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const HEADLESS: &str = "headless";

// The reference view: 1024x512 with an iteration cap of 1000.
const DEFAULT_SIZE: &str = "1024x512";
const DEFAULT_ITERATIONS: &str = "1000";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandelview")
        .version("0.1.0")
        .about("Renders the Mandelbrot set once and shows it in a window")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Also save the image as a PPM file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value(DEFAULT_SIZE)
                .validator(|s| validate_size(&s))
                .help("Size of the image, WIDTHxHEIGHT"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in the renderer"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value(DEFAULT_ITERATIONS)
                .validator(|s| {
                    validate_range(
                        &s,
                        2,
                        200_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 2 and 200000",
                    )
                })
                .help("Iteration cap per point"),
        )
        .arg(
            Arg::with_name(HEADLESS)
                .long(HEADLESS)
                .requires(OUTPUT)
                .help("Do not open a window; requires --output"),
        )
        .get_matches()
}

fn config_from(matches: &ArgMatches) -> Option<Config> {
    let (width, height) = parse_pair::<u16>(matches.value_of(SIZE)?, 'x')?;
    let iterations = usize::from_str(matches.value_of(ITERATIONS)?).ok()?;
    let threads = usize::from_str(matches.value_of(THREADS)?).ok()?;
    Some(
        Config::new(usize::from(width), iterations)
            .with_height(usize::from(height))
            .with_threads(threads),
    )
}

fn run(matches: &ArgMatches) -> mandelview::Result<()> {
    let config = match config_from(matches) {
        Some(config) => config,
        None => {
            return Err(mandelview::Error::InvalidConfig(
                "could not read the command line".to_string(),
            ))
        }
    };
    debug!("{:?}", config);

    let renderer = Renderer::new(&config)?;
    let pixels = renderer.render()?;

    if let Some(outfile) = matches.value_of(OUTPUT) {
        write_image(outfile, &pixels)?;
    }
    if matches.is_present(HEADLESS) {
        return Ok(());
    }

    let mut window = Window::new("Mandelbrot Fractal", config.width, config.height)?;
    show(&mut window, &pixels)?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let matches = args();

    if let Err(e) = run(&matches) {
        error!("{}", e);
        std::process::exit(1);
    }
}
