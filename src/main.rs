use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use inclimap::convert::driver;
use inclimap::ingest::transcode;
use inclimap::web::{self, Config};

const DEFAULT_OUTPUT: &str = "gps_map.html";

#[derive(Parser)]
#[command(name = "inclimap")]
#[command(about = "GPS and inclination field-data capture")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a collected CSV (or JSON) export into an interactive map
    Convert {
        input: PathBuf,
        /// Output document path
        #[arg(default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// Run the ingestion server
    Serve {
        /// Configuration file (defaults apply when omitted)
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { input, output } => convert(&input, &output),
        Commands::Serve { config } => serve(config.as_deref()),
    }
}

fn convert(input: &Path, output: &Path) -> ExitCode {
    // JSON exports are transcoded to a sibling CSV first.
    let input = if input.extension().is_some_and(|e| e.eq_ignore_ascii_case("json")) {
        match transcode::json_to_csv_file(input) {
            Ok(path) => {
                println!("Transcoded {} to {}", input.display(), path.display());
                path
            }
            Err(e) => {
                eprintln!("Error transcoding {}: {}", input.display(), e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        input.to_path_buf()
    };

    match driver::convert_file(&input, output) {
        Ok(report) => {
            println!("Map created: {}", report.output.display());
            println!("  accepted: {}", report.accepted);
            if !report.rejections.is_empty() {
                println!("  rejected: {}", report.rejections.len());
                for rejection in &report.rejections {
                    println!("    row {}: {}", rejection.row, rejection.error);
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Conversion failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn serve(config_path: Option<&str>) -> ExitCode {
    let config = match config_path {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error reading config: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = runtime.block_on(web::run_server(config)) {
        eprintln!("Server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
