//! Apply live money-field formatting to a text and cursor position

use anyhow::Result;
use clap::Parser;
use compound_interest::format_live_input;

#[derive(Parser, Debug)]
#[command(about = "Format field text with grouping separators and remap the cursor")]
struct Args {
    /// Raw field text
    text: String,

    /// Cursor position (characters from the start); defaults to the end
    #[arg(short, long)]
    cursor: Option<usize>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cursor = args.cursor.unwrap_or_else(|| args.text.chars().count());
    let formatted = format_live_input(&args.text, cursor);

    if args.json {
        println!("{}", serde_json::to_string(&formatted)?);
    } else {
        println!("{:?} (cursor {})", formatted.text, formatted.cursor);
    }
    Ok(())
}
