use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{self, Clear, ClearType},
};

use pingscope::{source, App, Theme};

#[derive(Parser, Debug)]
#[command(name = "pingscope")]
#[command(about = "ASCII oscilloscope for ping latency")]
struct Args {
    /// Host to probe
    #[arg(default_value = "google.com")]
    target: String,

    /// Generate synthetic samples instead of running ping
    #[arg(long)]
    simulate: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let source = source::for_target(&args.target, args.simulate)?;
    let mut app = App::new(source, args.target, Theme::auto_detect());

    run_loop(&mut app)
}

/// Pull one sample, redraw, repeat until the probe's output ends or the
/// process is interrupted.
fn run_loop(app: &mut App) -> Result<()> {
    let mut stdout = io::stdout();

    while app.tick()? {
        let (cols, rows) = terminal::size()?;
        let frame = app.render_frame(
            (cols as usize).saturating_sub(2),
            (rows as usize).saturating_sub(2),
        );

        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        writeln!(stdout, "{}", frame.join("\n"))?;
        stdout.flush()?;
    }

    Ok(())
}
