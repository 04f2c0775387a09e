use std::path::PathBuf;

use clap::Parser;
use translit_cli::{build_converter, load_layout};

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect a transliteration layout", long_about = None)]
struct Args {
    /// Layout data file
    layouts: PathBuf,

    /// Layout name
    layout: String,

    /// Also dump every table entry
    #[arg(short, long)]
    entries: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match load_layout(&args.layouts, &args.layout) {
        Ok(layout) => {
            let converter = build_converter(&layout, false);

            println!("Layout:         {}", layout.name);
            println!("Description:    {}", layout.description);
            println!("Case sensitive: {}", layout.case_sensitive);
            println!("Entries:        {}", layout.table.len());
            println!("Max source len: {}", converter.max_source_len());
            println!("Max target len: {}", converter.max_target_len());
            println!("Backspaces:     {}", converter.has_backspaces());

            if args.entries {
                println!();
                for entry in &layout.table {
                    let flag = if entry.special_case { "  [special]" } else { "" };
                    println!("{:?} => {:?}{}", entry.source, entry.target, flag);
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
