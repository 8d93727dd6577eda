use clap::{Parser, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use wapgate::{Dialect, Gateway, GatewayBuilder, GatewayConfig, GatewayError};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DialectArg {
    Wml,
    Si,
    Sl,
    Ota,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Wml => Dialect::Wml,
            DialectArg::Si => Dialect::Si,
            DialectArg::Sl => Dialect::Sl,
            DialectArg::Ota => Dialect::Ota,
        }
    }
}

/// Compiles WML, SI, SL and OTA provisioning documents to WBXML.
#[derive(Debug, Parser)]
#[command(name = "wapgate", version)]
struct Cli {
    /// Source documents.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Document type; inferred from the extension (.wml, .si, .sl, .xml) when omitted.
    #[arg(short, long, value_enum)]
    dialect: Option<DialectArg>,

    /// Output file (single input only). Defaults to the input name with a trailing `c`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Character set of WML sources.
    #[arg(long)]
    charset: Option<String>,

    /// WBXML version label for WML output, e.g. 1.3.
    #[arg(long)]
    wbxml_version: Option<String>,

    /// Print a hex dump instead of writing output files.
    #[arg(long)]
    hex: bool,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match GatewayConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => GatewayConfig::default(),
    };
    let filter = config.log_filter().unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .init();

    if cli.output.is_some() && cli.files.len() > 1 {
        log::error!("--output can only be used with a single input file");
        return ExitCode::FAILURE;
    }

    let mut builder = GatewayBuilder::new().with_config(config);
    if let Some(charset) = &cli.charset {
        builder = builder.with_default_charset(charset.clone());
    }
    if let Some(version) = &cli.wbxml_version {
        builder = builder.with_wbxml_version(version.clone());
    }
    let gateway = builder.build();

    let failures = compile_all(&gateway, &cli)
        .into_iter()
        .filter(|(path, result)| match result {
            Ok(()) => false,
            Err(e) => {
                log::error!("{}: {}", path.display(), e);
                true
            }
        })
        .count();

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        log::error!("{} of {} files failed", failures, cli.files.len());
        ExitCode::FAILURE
    }
}

#[cfg(feature = "parallel")]
fn compile_all<'a>(gateway: &Gateway, cli: &'a Cli) -> Vec<(&'a Path, Result<(), GatewayError>)> {
    use rayon::prelude::*;
    cli.files
        .par_iter()
        .map(|path| (path.as_path(), compile_file(gateway, cli, path)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn compile_all<'a>(gateway: &Gateway, cli: &'a Cli) -> Vec<(&'a Path, Result<(), GatewayError>)> {
    cli.files
        .iter()
        .map(|path| (path.as_path(), compile_file(gateway, cli, path)))
        .collect()
}

fn compile_file(gateway: &Gateway, cli: &Cli, path: &Path) -> Result<(), GatewayError> {
    let dialect = cli
        .dialect
        .map(Dialect::from)
        .or_else(|| Dialect::from_extension(path))
        .ok_or_else(|| {
            GatewayError::UnsupportedContentType(format!(
                "cannot tell the document type of {}, use --dialect",
                path.display()
            ))
        })?;
    let source = fs::read(path)?;
    let bytes = gateway.compile(dialect, &source, None, None)?;

    if cli.hex {
        println!("{}:", path.display());
        print!("{}", hex_dump(&bytes));
        return Ok(());
    }

    let target = cli.output.clone().unwrap_or_else(|| binary_path(path));
    fs::write(&target, &bytes)?;
    log::info!(
        "{} -> {} ({} bytes, {})",
        path.display(),
        target.display(),
        bytes.len(),
        dialect.converter().target_type
    );
    Ok(())
}

/// `deck.wml` -> `deck.wmlc`
fn binary_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push("c");
    PathBuf::from(name)
}

fn hex_dump(bytes: &[u8]) -> String {
    let mut dump = String::new();
    for (row, chunk) in bytes.chunks(16).enumerate() {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
        dump.push_str(&format!("{:08x}  {}\n", row * 16, hex.join(" ")));
    }
    dump
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_path_appends_c() {
        assert_eq!(binary_path(Path::new("a/deck.wml")), PathBuf::from("a/deck.wmlc"));
        assert_eq!(binary_path(Path::new("push.si")), PathBuf::from("push.sic"));
    }

    #[test]
    fn hex_dump_rows() {
        let bytes: Vec<u8> = (0..18).collect();
        let dump = hex_dump(&bytes);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("00000000  00 01 02"));
        assert_eq!(lines[1], "00000010  10 11");
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
