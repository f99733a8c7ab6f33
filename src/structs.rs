use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
}
