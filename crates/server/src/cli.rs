use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(name = "exercise tracker server")]
pub struct Cli {
    #[clap(long, env, default_value = "exercise_tracker.sqlite")]
    pub sqlite_connection_string: String,
    #[clap(long, env, default_value = "3000")]
    pub port: u16,
    #[clap(long, env, default_value = "127.0.0.1")]
    pub bind_addr: String,
}
