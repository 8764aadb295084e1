use clap::Parser;
use env_logger::Env;
use regionpath::colors::ColorScheme;
use regionpath::display::display_report;
use regionpath::json_output::{create_json_output, print_json_output};
use regionpath::{Args, run};

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let colors = ColorScheme::new(!args.no_color && !args.json);

    match run(&args) {
        Ok(report) if args.json => print_json_output(&create_json_output(&report)),
        Ok(report) => display_report(&report, &colors, args.quiet),
        Err(error) => {
            eprintln!("{}", colors.error(&format!("❌ Error: {error:#}")));
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}
