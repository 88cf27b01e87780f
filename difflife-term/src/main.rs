use anyhow::{bail, Context, Result};
use ca_formats::rle::Rle;
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use difflife::{Grid, NeighborCounts, SparseDiffGrid, World};
use rand::{rngs::StdRng, SeedableRng};
use std::{
    fs::File,
    io::{self, Stdout, Write},
    panic,
    path::PathBuf,
    time::{Duration, Instant},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(
    name = "difflife-term",
    about = "Conway's Game of Life on a torus, drawn in the terminal"
)]
struct Args {
    /// Grid width in cells (default: fit the terminal).
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells (default: fit the terminal).
    #[arg(long)]
    height: Option<usize>,

    /// Number of generations to run.
    #[arg(long, default_value_t = 10000)]
    generations: u64,

    /// Time between generations, in milliseconds.
    #[arg(long, default_value_t = 67)]
    interval: u64,

    /// Seed for the random initial grid.
    #[arg(long)]
    seed: Option<u64>,

    /// RLE pattern to start from instead of a random grid.
    #[arg(long)]
    pattern: Option<PathBuf>,

    /// Show the live-neighbor count of every cell.
    #[arg(long)]
    debug: bool,

    /// Keep neighbor counts in hash maps instead of dense arrays.
    #[arg(long)]
    sparse: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let (width, height) = dimensions(&args)?;
    let grid = initial_grid(&args, width, height)?;
    info!(
        width,
        height,
        population = grid.population(),
        sparse = args.sparse,
        "starting run"
    );

    if args.sparse {
        run(World::<SparseDiffGrid>::with_counts(grid), &args)
    } else {
        run(World::new(grid), &args)
    }
}

fn dimensions(args: &Args) -> Result<(usize, usize)> {
    let (width, height) = match (args.width, args.height) {
        (Some(width), Some(height)) => (width, height),
        (width, height) => {
            let (columns, rows) = terminal::size().context("failed to query terminal size")?;
            (
                width.unwrap_or((columns as usize).saturating_sub(render::BORDER_COLUMNS) / 2),
                height.unwrap_or((rows as usize).saturating_sub(render::BORDER_ROWS + 1)),
            )
        }
    };
    if width == 0 || height == 0 {
        bail!("grid must be at least 1x1, got {}x{}", width, height);
    }
    Ok((width, height))
}

fn initial_grid(args: &Args, width: usize, height: usize) -> Result<Grid> {
    if let Some(path) = &args.pattern {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        let rle = Rle::new_from_file(file)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return Grid::from_rle(rle, width, height)
            .with_context(|| format!("failed to load {}", path.display()));
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(Grid::new_random(width, height, &mut rng))
}

fn run<C: NeighborCounts>(mut world: World<C>, args: &Args) -> Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen, cursor::Hide)
        .context("failed to enter alternate screen")?;
    restore_on_panic();

    let result = run_loop(&mut world, args, &mut stdout);

    if let Err(err) = leave_screen(&mut stdout) {
        error!(?err, "failed to leave alternate screen");
    }
    if let Err(err) = terminal::disable_raw_mode() {
        error!(?err, "failed to disable raw mode");
    }
    info!(
        generation = world.get_generation(),
        population = world.population(),
        "run finished"
    );
    result
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, cursor::Show, LeaveAlternateScreen)
}

/// Puts the terminal back before the default hook prints the panic message.
fn restore_on_panic() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = leave_screen(&mut io::stdout());
        let _ = terminal::disable_raw_mode();
        default_hook(info);
    }));
}

fn run_loop<C: NeighborCounts>(
    world: &mut World<C>,
    args: &Args,
    stdout: &mut Stdout,
) -> Result<()> {
    let interval = Duration::from_millis(args.interval);
    for _ in 0..args.generations {
        let frame_start = Instant::now();
        queue!(stdout, cursor::MoveTo(0, 0))?;
        if args.debug {
            render::draw_debug(stdout, world)?;
        } else {
            render::draw_grid(stdout, world.grid())?;
        }
        stdout.flush().context("failed to draw frame")?;

        world.step();

        if quit_requested(frame_start + interval)? {
            break;
        }
    }
    Ok(())
}

/// Waits until `deadline`, returning early with `true` if the user asks to quit.
fn quit_requested(deadline: Instant) -> Result<bool> {
    loop {
        let now = Instant::now();
        if now >= deadline || !event::poll(deadline - now)? {
            return Ok(false);
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(true)
                }
                _ => {}
            }
        }
    }
}
