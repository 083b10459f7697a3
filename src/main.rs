use std::path::{Path, PathBuf};
use testbridge::test::{
    convert_run, discover_cases, FrameworkFrameFilter, HostEnvironment, RunDocument, TestConverter,
};
use testbridge::Result;

const USAGE: &str =
    "Usage: testbridge <discover|convert> <binary> <document.json> [--out <dir>] [--interactive]";

#[derive(Debug, Default, PartialEq)]
struct Options {
    out_dir: Option<PathBuf>,
    /// Treat the host as the interactive IDE regardless of detection.
    interactive: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    match (args.get(1).map(|s| s.as_str()), args.get(2), args.get(3)) {
        (Some("discover"), Some(binary), Some(document)) => {
            let options = parse_options(&args[4..]).unwrap_or_else(|msg| usage_error(&msg));
            let doc = RunDocument::load(Path::new(document))?;
            let mut converter = build_converter(Path::new(binary), &doc, &options);
            let cases = discover_cases(&mut converter, &doc)?;
            println!("{}", serde_json::to_string_pretty(&cases)?);
            Ok(())
        }
        (Some("convert"), Some(binary), Some(document)) => {
            let options = parse_options(&args[4..]).unwrap_or_else(|msg| usage_error(&msg));
            let doc = RunDocument::load(Path::new(document))?;
            let mut converter = build_converter(Path::new(binary), &doc, &options);
            let run = convert_run(&mut converter, &doc)?;
            if let Some(dir) = &options.out_dir {
                let path = testbridge::test::output::write_report(dir, converter.source(), &run)?;
                eprintln!("Report written to {}", path.display());
            }
            println!("{}", serde_json::to_string_pretty(&run.results)?);
            Ok(())
        }
        _ => usage_error(USAGE),
    }
}

fn build_converter(binary: &Path, doc: &RunDocument, options: &Options) -> TestConverter {
    let project_root = std::env::current_dir().ok();
    let settings = testbridge::config::resolve(project_root.as_deref());
    let mut host = HostEnvironment::detect(&settings.interactive_executable);
    if options.interactive {
        host = host.with_interactive_host(true);
    }
    TestConverter::new(binary, doc.index_cases(), host)
        .with_trace_filter(Box::new(FrameworkFrameFilter::with_extra(settings.hidden_frames)))
}

fn parse_options(rest: &[String]) -> std::result::Result<Options, String> {
    let mut options = Options::default();
    let mut iter = rest.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--out" => {
                let dir = iter.next().ok_or_else(|| "--out requires a directory".to_string())?;
                options.out_dir = Some(PathBuf::from(dir));
            }
            "--interactive" => options.interactive = true,
            other => return Err(format!("Unknown option '{}'\n{}", other, USAGE)),
        }
    }
    Ok(options)
}

fn usage_error(msg: &str) -> ! {
    eprintln!("{}", msg);
    std::process::exit(1);
}
