use ansi_term::{Colour, Style};
use clap::Parser;
use gsharp::lang::Category;
use gsharp::mach::{Options, Runtime};
use log::{debug, info, warn, LevelFilter};
use simple_logger::SimpleLogger;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Translate a G# program into plain G-code.
#[derive(Parser, Debug)]
#[command(name = "gsharp", version)]
struct Args {
    /// G# program to translate
    input: PathBuf,
    /// Where to write the G-code, standard output when omitted
    output: Option<PathBuf>,
    /// Skip lines starting with '/'
    #[arg(short, long)]
    block_delete: bool,
    /// No spaces between words
    #[arg(short, long)]
    compact: bool,
    /// Keep the output in lowercase
    #[arg(short, long)]
    lowercase: bool,
    /// Decimal places of substituted values
    #[arg(short, long, default_value_t = 3)]
    precision: usize,
    /// More logging, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

pub fn main() {
    let args = Args::parse();
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(error) = SimpleLogger::new().with_level(level).init() {
        eprintln!("{}", error);
    }
    info!("gsharp {}", gsharp::VERSION);

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!("Error setting Ctrl-C handler: {}", error);
    }

    if let Err(error) = convert(&args, &interrupted) {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

fn convert(args: &Args, interrupted: &AtomicBool) -> Result<()> {
    let code = std::fs::read_to_string(&args.input)?;
    let mut runtime = Runtime::new(Options {
        block_delete: args.block_delete,
        pretty_format: !args.compact,
        uppercase: !args.lowercase,
        precision: args.precision,
    });
    runtime.load(&code)?;

    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    loop {
        if interrupted.load(Ordering::SeqCst) {
            output.flush()?;
            return Err(format!("BREAK IN {}", runtime.current_line_number()).into());
        }
        let line = match runtime.step() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(error) => {
                output.flush()?;
                if let Some(number) = error.line_number() {
                    if let Ok(source) = runtime.source_line(number) {
                        info!("{}: {}", number, source);
                    }
                }
                return Err(error.into());
            }
        };
        for category in Category::ALL.iter() {
            if let Some(text) = runtime.take_message(*category) {
                report(*category, &text);
            }
        }
        if !line.is_empty() {
            writeln!(output, "{}", line)?;
        }
    }
    output.flush()?;
    debug!("finished after line {}", runtime.current_line_number());
    Ok(())
}

fn report(category: Category, text: &str) {
    let style = match category {
        Category::Message => Style::new().bold(),
        Category::Print => Style::new(),
        Category::Debug => Colour::Yellow.normal(),
        Category::Log => Colour::Cyan.normal(),
    };
    eprintln!("{} {}", style.paint(category.to_string()), text);
}
