use std::process;

use clap::Parser;
use colored::Colorize;
use seqstats::{cli::Args, run};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    let default_filter = if args.quiet { "error" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if !args.quiet {
        println!(
            "{}: {}",
            "data".bold(),
            args.path
                .as_deref()
                .map_or_else(|| "stdin".to_string(), |p| p.display().to_string())
                .underline()
                .bold()
                .blue()
        );
        println!(
            "{}: {}",
            "reading frame".bold(),
            args.frame.to_string().blue().bold()
        );
        if let Some(n) = args.repeat_len {
            println!("{}: {}", "repeat length".bold(), n.to_string().blue().bold());
        }
        println!();
    }

    if let Err(e) = run::run(&args) {
        eprintln!(
            "{}\n {}",
            "Application error:".blue().bold(),
            e.to_string().blue()
        );
        drop(e);
        process::exit(1);
    }
}
