use clap::Parser;
use log::{debug, info};
use pastree::render::{ends_open, render_to_string};
use pastree::{samples::Sample, AstResult, RenderStyle, SyntaxNode};
use std::io::{self, BufWriter, Write};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Draws syntax trees of a Pascal-like language",
    long_about = "Draws syntax trees of a Pascal-like language.\n\
                 Builds the bundled sample trees and prints them as indented ASCII trees.\n\
                 \n\
                 Example usage:\n\
                 pastree                           # Print every sample\n\
                 pastree loop                      # Print the while loop sample\n\
                 pastree program --style uniform   # Draw every statement\n\
                 pastree --verbose                 # Log what gets built"
)]
struct Cli {
    // Sample to print, all of them when omitted
    #[arg(value_enum)]
    sample: Option<Sample>,

    // Which statements get drawn
    #[arg(short, long, value_enum, default_value_t = RenderStyle::Reference)]
    style: RenderStyle,

    // Show the sample source above each tree
    #[arg(long)]
    show_source: bool,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn print_sample(sample: Sample, args: &Cli, out: &mut dyn Write) -> AstResult<()> {
    let tokens = sample.tokens();
    debug!("{:?}: {} tokens", sample, tokens.len());
    let tree = sample.build(&tokens)?;
    debug!(
        "{:?}: {} nodes rooted at '{}' ({})",
        sample,
        tree.as_node().size(),
        tree.lexeme().source(),
        tree.lexeme().position()
    );

    if args.show_source {
        writeln!(out, "{}", sample.source())?;
        writeln!(out)?;
    }
    let rendered = render_to_string(tree.as_ref(), args.style)?;
    out.write_all(rendered.as_bytes())?;
    if ends_open(&rendered) {
        writeln!(out)?;
    }
    Ok(())
}

fn run(args: &Cli) -> AstResult<()> {
    let samples = match args.sample {
        Some(sample) => vec![sample],
        None => Sample::ALL.to_vec(),
    };
    info!("rendering {} sample(s) in {} style", samples.len(), args.style);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (i, sample) in samples.into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        print_sample(sample, args, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let args = Cli::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(&args) {
        fatal(&e.to_string());
    }
}
