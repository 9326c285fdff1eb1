#![deny(warnings)]

use anyhow::Result;
use env_logger::Env;
use fragfill::args::Args;
use fragfill::{fill_form, open_callback_page};
use std::env;

fn init_logger() {
    let has_debug_flag = env::args().any(|s| s.eq("--debug") || s.eq("-d"));
    let default_filter = if has_debug_flag { "debug" } else { "warn" };

    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let args = Args::parse().await?;

    let mut page = open_callback_page(&args).await?;
    let form = fill_form(&mut page, args.format())?;

    println!("{}", form.output);
    form.outcome
}
