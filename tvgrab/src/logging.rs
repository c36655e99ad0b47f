use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::Path,
};

use anyhow::Result;
use env_logger::{Builder, Env, Target, fmt::Formatter};
use log::Record;

/// Sends every formatted record to the log file and mirrors it on stderr.
pub struct TeeWriter<W: Write> {
    file: File,
    console: W,
}

impl<W: Write> TeeWriter<W> {
    pub fn new(file: File, console: W) -> Self {
        Self { file, console }
    }
}

impl<W: Write> Write for TeeWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)?;
        self.console.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()?;
        self.console.flush()
    }
}

/// Opens the log file for appending, creating its directory first.
pub fn open_log_file(path: impl AsRef<Path>) -> io::Result<File> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    OpenOptions::new().create(true).append(true).open(path)
}

fn format_record(buf: &mut Formatter, record: &Record<'_>) -> io::Result<()> {
    let timestamp = buf.timestamp();
    writeln!(buf, "{} - {} - {}", timestamp, record.level(), record.args())
}

/// `info` unless `RUST_LOG` says otherwise.
pub fn init_logging(log_path: impl AsRef<Path>) -> Result<()> {
    let file = open_log_file(log_path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(TeeWriter::new(file, io::stderr()))))
        .format(format_record)
        .try_init()?;

    Ok(())
}
