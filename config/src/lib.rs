use std::env;
use std::path::PathBuf;
use anyhow::{Result, bail};
use tracing::debug;


/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "profile=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments given, only the usage banner is printed.
    Banner,
    Process {
        image_path: PathBuf,
        output_dir: PathBuf,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub invocation: Invocation,
}

impl Config {
    pub fn from_args() -> Result<Self> {
        Self::parse(env::args().skip(1))
    }
    pub fn parse<I, T>(args: I) -> Result<Self>
    where I: IntoIterator<Item = T>, T: Into<String> {
        let args = args.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();

        let invocation = match args.as_slice() {
            [] => Invocation::Banner,
            [image, output] => {
                if image.is_empty() || output.is_empty() {
                    bail!("Image path and output dir can't be empty")
                }

                Invocation::Process {
                    image_path: PathBuf::from(image),
                    output_dir: PathBuf::from(output),
                }
            },
            _ => bail!("Expected <image_path> <output_dir>, got {} argument(s)", args.len()),
        };

        debug!("Resolved invocation {:?}", invocation);

        Ok(Self { invocation })
    }
}
