extern crate daybook as lib;

use chrono::Local;
use flexi_logger::{FileSpec, Logger};
use lib::context::Context;
use lib::events::Dispatcher;
use lib::ui::App;
use nix::sys::termios;
use std::io::stdout;
use std::path::PathBuf;
use structopt::StructOpt;
use unsegen::base::Terminal;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "dbk",
    about = "Daybook - a date picker with per-day notes."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only show the calendar non-interactively"
    )]
    pub show: bool,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    const STDOUT: std::os::unix::io::RawFd = 0;
    let orig_attr = std::sync::Mutex::new(
        termios::tcgetattr(STDOUT).expect("Failed to get terminal attributes"),
    );

    std::panic::set_hook(Box::new(move |info| {
        // Switch to main terminal screen
        println!("{}{}", termion::screen::ToMainScreen, termion::cursor::Show);

        let _ = termios::tcsetattr(STDOUT, termios::SetArg::TCSANOW, &orig_attr.lock().unwrap());

        println!("Daybook ran into a fatal error!");
        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    let context = Context::new(Local::now().date_naive());

    let stdout = stdout();
    let term = Terminal::new(stdout.lock())?;

    if args.show {
        let mut term = term;
        App::new(&config, context).render(&mut term);
        return Ok(());
    }

    let dispatcher = Dispatcher::from_config(&config);
    let mut app = App::new(&config, context);

    app.run(dispatcher, term)
}
