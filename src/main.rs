use anyhow::{Context, Result};
use carla_sensor_settings::{
    CarlaSettings, Configurable, LidarDescription, Sections, ValidationPolicy,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn, Level};

#[derive(Parser)]
struct Opts {
    /// Settings file, INI or JSON5 (.json5/.json).
    pub config: PathBuf,
    /// Load a single lidar description from this section instead of the sensor list.
    #[clap(long)]
    pub section: Option<String>,
    /// Fail on validation issues instead of logging them.
    #[clap(long)]
    pub strict: bool,
    /// Print the resolved descriptions as JSON5.
    #[clap(long)]
    pub dump: bool,
    #[clap(short, long)]
    pub verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let opts = Opts::parse();

    // Enable logging
    tracing_subscriber::fmt()
        .with_max_level(if opts.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let policy = if opts.strict {
        ValidationPolicy::Strict
    } else {
        ValidationPolicy::Warn
    };

    let sections = Sections::from_path(&opts.config).with_context(|| {
        format!(
            "unable to load settings from '{}'",
            opts.config.display()
        )
    })?;

    if let Some(section) = &opts.section {
        if sections.section(section).is_none() {
            warn!("Section [{section}] not found. Using the default lidar description.");
        }

        let mut lidar = LidarDescription::default();
        lidar.load(&sections, section);
        lidar
            .validate(policy)
            .with_context(|| format!("lidar description in [{section}] is invalid"))?;
        lidar.log();

        if opts.dump {
            println!("{}", json5::to_string(&lidar)?);
        }
    } else {
        let settings = CarlaSettings::load(&sections, policy).with_context(|| {
            format!("invalid sensor settings in '{}'", opts.config.display())
        })?;
        settings.log();
        info!("Loaded {} lidar(s)", settings.lidars().count());

        if opts.dump {
            println!("{}", json5::to_string(&settings)?);
        }
    }

    Ok(())
}
