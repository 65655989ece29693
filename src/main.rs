use anyhow::{Context, Result};
use clap::{crate_version, Arg, Command};
use log::{info, LevelFilter};
use std::path::{Path, PathBuf};
use tissuemix::defaults::CONFIG_FILE_NAME;
use tissuemix::io::{build_structures, write_header, write_output, Configuration};
use tissuemix::utils::Timer;
use tissuemix::{CompositedVolume, Structures, VolumeCompositor};

fn log_level(verbose: i8) -> LevelFilter {
    match verbose {
        v if v < 0 => LevelFilter::Warn,
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let matches = Command::new("tissuemix")
        .version(crate_version!())
        .about("composites tissue structures into per-voxel property volumes")
        .arg(
            Arg::new("config")
                .help("the TOML configuration file, it is created with the defaults if it does not exist")
                .index(1)
                .default_value(CONFIG_FILE_NAME),
        )
        .arg(
            Arg::new("output")
                .help("directory for the output files, overrides the configuration")
                .short('o')
                .long("output")
                .takes_value(true),
        )
        .get_matches();

    let config_path: PathBuf = PathBuf::from(matches.value_of("config").unwrap_or(CONFIG_FILE_NAME));
    let config_exists: bool = config_path.exists();
    let config: Configuration = Configuration::load(&config_path)
        .with_context(|| format!("failed to read the configuration {}", config_path.display()))?;

    env_logger::Builder::new()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "{}", record.args())
        })
        .filter(None, log_level(config.verbose))
        .init();

    write_header();
    if !config_exists {
        info!("no configuration found, the defaults were written to {}", config_path.display());
    }
    let structures: Structures = build_structures(&config, &config_path)
        .with_context(|| format!("failed to build the structures of {}", config_path.display()))?;
    let timer: Timer = Timer::start();
    let grid = config.grid()?;
    let mut compositor = VolumeCompositor::new(grid, config.volume.wavelength);
    compositor.set_backend(config.volume.backend);
    let result: CompositedVolume = compositor.composite(&structures).context("compositing failed")?;

    let output_directory: &Path = match matches.value_of("output") {
        Some(directory) => Path::new(directory),
        None => Path::new(&config.volume.output_directory),
    };
    write_output(output_directory, &result, grid, config.volume.wavelength)
        .with_context(|| format!("failed to write the output to {}", output_directory.display()))?;
    info!("{:-<80} ", "");
    info!("{}", timer);
    Ok(())
}
