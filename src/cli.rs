use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[clap(
    name = "pricing-bridge",
    about = "Streams paginated AWS Pricing product listings for EC2"
)]
pub struct Cli {
    /// Configuration file overriding the defaults
    #[clap(long)]
    pub config: Option<String>,

    /// AWS region override
    #[clap(long)]
    pub region: Option<String>,

    /// Page size override
    #[clap(long)]
    pub max_results: Option<i32>,

    /// Number of pages to fetch; 0 follows continuation tokens until the
    /// catalog is exhausted
    #[clap(long, default_value_t = 1)]
    pub pages: usize,

    /// Serve scripted fixture pages instead of calling AWS
    #[clap(long)]
    pub offline: bool,
}
