mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::filter::EnvFilter;

use flappy_bird::config::{Config, DEFAULT_SCORE_FILE};
use flappy_bird::highscore::FileScoreStore;
use flappy_bird::session::{GameEvent, Session};

#[derive(Parser, Debug)]
#[command(about = "Flappy bird with powerups, in your terminal")]
struct Args {
    /// file holding the high score
    #[arg(long, default_value = DEFAULT_SCORE_FILE)]
    score_file: PathBuf,

    /// frames per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// seed for obstacle and powerup placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// write logs here (filtered by RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Logs go to a file because the terminal is in raw mode.  Without a file
/// no subscriber is installed.
fn init_logging(path: Option<&PathBuf>) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Translate a key press into a game event.
fn map_key(key: KeyEvent) -> Option<GameEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(GameEvent::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameEvent::Quit)
        }
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(GameEvent::Jump),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameEvent::ToggleNoCollision),
        _ => None,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn game_loop<W: Write>(
    out: &mut W,
    args: &Args,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let frame = Duration::from_secs(1) / args.fps.max(1);
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let store = FileScoreStore::new(args.score_file.clone());
    let start = Instant::now();
    let mut session = Session::new(Config::default(), store, rng, 0);

    while session.is_running() {
        let frame_start = Instant::now();
        let now = start.elapsed().as_millis() as u64;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut inputs = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(key) = ev {
                inputs.extend(map_key(key));
            }
        }

        session.frame(inputs, now);
        if !session.is_running() {
            break;
        }

        if let Err(err) = display::render(out, session.state(), session.theme(), now) {
            session.quit();
            return Err(err);
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &args, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("running game loop")
}
