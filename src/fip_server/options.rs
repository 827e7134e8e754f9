use clap::Parser;

#[derive(Clone, Debug, Parser)]
pub struct FIPServerOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[arg(short, long, default_value_t = 10)]
    pub size: usize,

    #[arg(short, long, default_value_t = 6)]
    pub colours: usize,

    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short = 'b', long, default_value_t = false)]
    pub vs_bot: bool,
}
