use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tgconst::cli::output::{self, OutputFormat};
use tgconst::config::ConfigLayer;
use tgconst::{Config, Generator, TransformFormat};

#[derive(Parser, Debug)]
#[command(name = "tgconst")]
#[command(version, about = "Generate string constants from Go struct tags", long_about = None)]
struct Cli {
    /// Directory containing the Go sources
    #[arg(value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Tag key to generate constants for (repeatable; all keys if omitted)
    #[arg(short, long = "tag", value_name = "TAG")]
    tags: Vec<String>,

    /// Skip fields that carry no tag
    #[arg(long, overrides_with = "no_only_tagged")]
    only_tagged: bool,

    /// Derive values for untagged fields even if a config file says otherwise
    #[arg(long, overrides_with = "only_tagged")]
    no_only_tagged: bool,

    /// Value format for untagged fields (snakecase, lispcase, camelcase, pascalcase, mirror)
    #[arg(short, long, value_name = "FORMAT")]
    missing_tag_format: Option<TransformFormat>,

    /// Also generate for all subdirectories
    #[arg(short, long, overrides_with = "no_recursive")]
    recursive: bool,

    /// Only generate for DIR itself even if a config file says otherwise
    #[arg(long, overrides_with = "recursive")]
    no_recursive: bool,

    /// One constant per field without the tag suffix (not supported yet)
    #[arg(long)]
    no_suffix: bool,

    /// Formatter command the generated code is piped through (default: gofmt)
    #[arg(long, value_name = "CMD")]
    formatter: Option<String>,

    /// Write the generated code without running the formatter
    #[arg(long)]
    no_fmt: bool,

    /// Print the generated code instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Report format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

impl Cli {
    /// Settings given on the command line; everything else comes from config files.
    fn config_layer(&self) -> ConfigLayer {
        ConfigLayer {
            tags: (!self.tags.is_empty()).then(|| self.tags.clone()),
            only_tagged_fields: switch(self.only_tagged, self.no_only_tagged),
            missing_tag_val_format: self.missing_tag_format,
            recursive: switch(self.recursive, self.no_recursive),
            no_suffix: self.no_suffix.then_some(true),
            format_output: if self.no_fmt {
                Some(false)
            } else {
                self.formatter.as_ref().map(|_| true)
            },
            formatter: self
                .formatter
                .as_ref()
                .map(|cmd| cmd.split_whitespace().map(str::to_string).collect()),
        }
    }
}

fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "tgconst", &mut io::stdout());
        return Ok(());
    }

    let colored = !cli.no_color;
    let text_output = matches!(cli.format, OutputFormat::Text);

    // Load configuration
    let config = Config::load(cli.config_layer())?;

    for warning in config.warnings() {
        output::print_warning(&warning, colored);
    }

    if text_output && !cli.stdout {
        output::print_start(&cli.dir, config.recursive, colored);
    }

    let generator = Generator::new(&config).dry_run(cli.stdout);
    let report = match generator.run(&cli.dir) {
        Ok(report) => report,
        Err(err) => {
            output::print_error(&err, colored);
            std::process::exit(1);
        }
    };

    for warning in &report.warnings {
        output::print_warning(warning, colored);
    }

    output::print_report(&report, cli.stdout, colored, &cli.format);

    Ok(())
}
