use std::io;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Report, Result};
use tracing_subscriber::EnvFilter;

use linesheet::{SheetUi, UiOptions};

#[derive(Debug, Parser)]
#[command(
    name = "linesheet",
    version,
    about = "Terminal entry sheet for line protection calculation workbooks"
)]
struct Cli {
    /// Upload endpoint that turns the submission into a workbook
    #[arg(long = "endpoint", value_name = "URL", default_value = linesheet::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Directory the generated workbook is saved into
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// CSV file to pre-fill into the attachment field
    #[arg(long = "csv", value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Title shown at the top of the UI
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Quit immediately on Ctrl+Q even with unsaved changes
    #[arg(long = "no-confirm-exit")]
    no_confirm_exit: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();
    let cli = Cli::parse();

    let mut options = UiOptions::default()
        .with_endpoint(cli.endpoint)
        .with_output_dir(cli.output_dir)
        .with_confirm_exit(!cli.no_confirm_exit);
    if let Some(title) = cli.title {
        options = options.with_title(title);
    }

    let mut ui = SheetUi::new().with_options(options);
    if let Some(csv) = cli.csv {
        ui = ui.with_csv_path(csv.display().to_string());
    }
    ui.run().map_err(Report::msg)?;
    Ok(())
}

fn init_tracing() {
    // Logs go to stderr; the alternate screen hides them until exit.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}
