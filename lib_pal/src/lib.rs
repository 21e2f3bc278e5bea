pub mod characters;
pub mod constants;
pub mod container;
pub mod palette;
pub mod recolor;

use log::LevelFilter;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

pub use crate::container::{decode, encode, Record, Variant};
pub use crate::palette::{Color, Palette};
pub use crate::recolor::{recolor, recolor_image, recolor_pixels};

/// Sets up `env_logger` for the library and its front ends.
///
/// Logs go to `log_file` when given, stderr otherwise. `RUST_LOG` is applied
/// on top of `level`.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> io::Result<()> {
    let mut builder = env_logger::Builder::new();
    if let Some(path) = log_file {
        let target = Box::new(File::create(path)?);
        builder.target(env_logger::Target::Pipe(target));
    }

    builder
        .filter(Some("lib_pal"), level)
        .filter(Some("palgrim"), level)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init()
        .map_err(io::Error::other)
}
