//! gr: Convert grid references and coordinates between coordinate systems
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use gridref::prelude::*;
use log::{debug, trace};

/// GR: Convert grid references between national grids, UTM and latitude/longitude.
///
/// Each reference is read in the text format of the source system, carried
/// through an earth centered position, and written in the text format of
/// the target system.
#[derive(Parser, Debug)]
#[clap(name = "gr")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert grid references from one coordinate system to another
    Convert {
        /// The coordinate system of the input, e.g. "OSGB" or "UTM 32N"
        #[clap(short, long)]
        from: String,

        /// The coordinate system of the output
        #[clap(short, long)]
        to: String,

        /// Datum of the input, instead of the default of its system
        #[clap(long)]
        from_datum: Option<String>,

        /// Ellipsoid of the input, instead of the default of its system
        #[clap(long)]
        from_ellipsoid: Option<String>,

        /// Datum of the output, instead of the default of its system
        #[clap(long)]
        to_datum: Option<String>,

        /// Ellipsoid of the output, instead of the default of its system
        #[clap(long)]
        to_ellipsoid: Option<String>,

        /// Also report grid convergence and point scale factor
        #[clap(short, long)]
        details: bool,

        /// The grid references to convert
        #[clap(required = true)]
        args: Vec<String>,
    },

    /// List the available coordinate systems, datums or ellipsoids
    List {
        #[clap(value_enum, default_value = "systems")]
        what: Listing,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Listing {
    Systems,
    Datums,
    Ellipsoids,
}

// A coordinate system with its ellipsoid and datum resolved
struct Frame {
    system: CoordinateSystem,
    core: &'static dyn ProjectionCore,
    ellipsoid: &'static Ellipsoid,
    datum: &'static Datum,
}

impl Frame {
    fn new(
        system: &str,
        ellipsoid: Option<&str>,
        datum: Option<&str>,
    ) -> Result<Frame, anyhow::Error> {
        let system = CoordinateSystem::named(system)?;
        let core = system.core()?;
        let ellipsoid = match ellipsoid {
            Some(name) => Ellipsoid::named(name)?,
            None => core.default_ellipsoid(),
        };
        let datum = match datum {
            Some(name) => Datum::named(name)?,
            None => core.default_datum(),
        };
        debug!("{system}: {ellipsoid}, {datum}");
        Ok(Frame {
            system,
            core,
            ellipsoid,
            datum,
        })
    }
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    trace!("{options:#?}");

    match options.command {
        Command::Convert {
            from,
            to,
            from_datum,
            from_ellipsoid,
            to_datum,
            to_ellipsoid,
            details,
            args,
        } => {
            let source = Frame::new(&from, from_ellipsoid.as_deref(), from_datum.as_deref())
                .with_context(|| format!("Source system '{from}'"))?;
            let target = Frame::new(&to, to_ellipsoid.as_deref(), to_datum.as_deref())
                .with_context(|| format!("Target system '{to}'"))?;

            for text in args {
                let point =
                    Projection::make_point(source.core, &text, source.ellipsoid, source.datum)
                        .with_context(|| format!("Cannot read '{text}' as {}", source.system))?;
                let result =
                    Projection::new(target.core, point.position(), target.ellipsoid, target.datum)
                        .with_context(|| format!("Cannot convert '{text}' to {}", target.system))?;

                if details {
                    println!(
                        "{result}    convergence {:.6}°  scale {:.8}",
                        result.grid_convergence(),
                        result.point_scale_factor()
                    );
                } else {
                    println!("{result}");
                }
            }
        }

        Command::List { what } => match what {
            Listing::Systems => {
                for system in CoordinateSystem::all() {
                    let core = system.core()?;
                    println!(
                        "{:<20} {:<24} {}",
                        system.to_string(),
                        core.default_ellipsoid().to_string(),
                        core.default_datum()
                    );
                }
            }
            Listing::Datums => {
                for datum in Datum::all() {
                    println!("{datum}");
                }
            }
            Listing::Ellipsoids => {
                for ellps in Ellipsoid::all() {
                    println!(
                        "{:<24} a = {:.3}  1/f = {:.9}",
                        ellps.to_string(),
                        ellps.semimajor_axis(),
                        1. / ellps.flattening()
                    );
                }
            }
        },
    }

    Ok(())
}
