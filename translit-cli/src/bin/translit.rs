use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use translit_cli::{build_converter, convert_text, load_layout_file};

#[derive(Parser, Debug)]
#[command(author, version, about = "Batch script transliteration", long_about = None)]
struct Args {
    /// Layout data file
    layouts: PathBuf,

    /// Layout name (not needed with --list)
    layout: Option<String>,

    /// Input text file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Convert in the reverse direction
    #[arg(short, long)]
    reverse: bool,

    /// Leave markup tags untouched
    #[arg(short, long)]
    skip_markup: bool,

    /// List available layouts and exit
    #[arg(short, long)]
    list: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let file = load_layout_file(&args.layouts)?;

    if args.list {
        for summary in file.list() {
            println!("{}\t{}", summary.name, summary.description);
        }
        return Ok(());
    }

    let Some(name) = args.layout.as_deref() else {
        bail!("layout name required unless --list is given");
    };
    let layout = file.layout(name)?;
    let converter = build_converter(&layout, args.reverse);

    if args.verbose {
        eprintln!(
            "Using layout '{}' ({}), {} entries",
            layout.name,
            layout.description,
            layout.table.len()
        );
    }

    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read input file {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("cannot read stdin")?;
            buffer
        }
    };

    print!("{}", convert_text(&converter, &text, args.skip_markup));
    Ok(())
}
