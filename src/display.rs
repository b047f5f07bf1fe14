/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// world units into terminal cells and cells into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use flappy_bird::entities::{GameState, GameStatus, Mood, PowerupKind, Rect};
use flappy_bird::session::Theme;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_DAY: Color = Color::Rgb { r: 135, g: 206, b: 250 };
const C_NIGHT: Color = Color::Rgb { r: 25, g: 25, b: 112 };
const C_OBSTACLE: Color = Color::Rgb { r: 0, g: 250, b: 0 };
const C_AVATAR: Color = Color::Rgb { r: 255, g: 210, b: 60 };
const C_AVATAR_FACE: Color = Color::Black;
const C_SHIELD: Color = Color::Rgb { r: 255, g: 255, b: 0 };
const C_DOUBLE: Color = Color::Rgb { r: 160, g: 32, b: 240 };
const C_SLOW: Color = Color::Rgb { r: 255, g: 255, b: 255 };
const C_TEXT: Color = Color::White;
const C_CHEAT: Color = Color::Rgb { r: 255, g: 0, b: 0 };
const C_HINT: Color = Color::DarkGrey;

/// Maps world units onto the terminal.  The last row is kept for the
/// controls hint.
struct Viewport {
    cols: u16,
    rows: u16,
    sx: f32,
    sy: f32,
}

impl Viewport {
    fn new(state: &GameState, cols: u16, rows: u16) -> Self {
        let play_rows = rows.saturating_sub(1);
        Viewport {
            cols,
            rows: play_rows,
            sx: cols as f32 / state.config.world_width,
            sy: play_rows as f32 / state.config.world_height,
        }
    }

    /// Cell span `(col, row, width, height)` covered by `rect`, clipped to
    /// the play area.  `None` when nothing is visible.
    fn cells(&self, rect: &Rect) -> Option<(u16, u16, u16, u16)> {
        let c0 = (rect.left() * self.sx).floor().max(0.0);
        let c1 = (rect.right() * self.sx).ceil().min(self.cols as f32);
        let r0 = (rect.top() * self.sy).floor().max(0.0);
        let r1 = (rect.bottom() * self.sy).ceil().min(self.rows as f32);
        if c1 <= c0 || r1 <= r0 {
            return None;
        }
        Some((c0 as u16, r0 as u16, (c1 - c0) as u16, (r1 - r0) as u16))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    theme: Theme,
    now: u64,
) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let view = Viewport::new(state, cols, rows);
    let background = match theme {
        Theme::Day => C_DAY,
        Theme::Night => C_NIGHT,
    };

    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_background(out, &view, background)?;

    for obstacle in &state.obstacles {
        fill_rect(out, &view, &obstacle.top, C_OBSTACLE)?;
        fill_rect(out, &view, &obstacle.bottom, C_OBSTACLE)?;
    }
    for powerup in &state.powerups {
        fill_rect(out, &view, &powerup.rect, powerup_color(powerup.kind))?;
    }

    draw_avatar(out, &view, state)?;
    draw_hud(out, state, background, now)?;
    draw_controls_hint(out, state, rows)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, cols, rows)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn powerup_color(kind: PowerupKind) -> Color {
    match kind {
        PowerupKind::Shield => C_SHIELD,
        PowerupKind::DoubleScore => C_DOUBLE,
        PowerupKind::SlowMotion => C_SLOW,
    }
}

// ── Shapes ────────────────────────────────────────────────────────────────────

fn draw_background<W: Write>(out: &mut W, view: &Viewport, color: Color) -> std::io::Result<()> {
    let blank = " ".repeat(view.cols as usize);
    out.queue(style::SetBackgroundColor(color))?;
    for row in 0..view.rows {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print(&blank))?;
    }
    Ok(())
}

fn fill_rect<W: Write>(
    out: &mut W,
    view: &Viewport,
    rect: &Rect,
    color: Color,
) -> std::io::Result<()> {
    let Some((col, row, w, h)) = view.cells(rect) else {
        return Ok(());
    };
    let span = " ".repeat(w as usize);
    out.queue(style::SetBackgroundColor(color))?;
    for dy in 0..h {
        out.queue(cursor::MoveTo(col, row + dy))?;
        out.queue(Print(&span))?;
    }
    Ok(())
}

fn draw_avatar<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    let avatar = &state.avatar;
    fill_rect(out, view, &avatar.rect, C_AVATAR)?;

    // Face on the middle row, if the body is wide enough to hold it
    let face = match avatar.mood {
        Mood::Happy => "^v^",
        Mood::Sad => ";_;",
    };
    if let Some((col, row, w, h)) = view.cells(&avatar.rect) {
        let face_w = face.chars().count() as u16;
        let col = if w >= face_w { col + (w - face_w) / 2 } else { col };
        out.queue(cursor::MoveTo(col, row + h / 2))?;
        out.queue(style::SetForegroundColor(C_AVATAR_FACE))?;
        out.queue(Print(face))?;
    }
    Ok(())
}

// ── HUD (top-left) ────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    state: &GameState,
    background: Color,
    now: u64,
) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(background))?;
    out.queue(style::SetForegroundColor(C_TEXT))?;

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(Print(format!("Score: {}", state.score)))?;
    out.queue(cursor::MoveTo(1, 1))?;
    out.queue(Print(format!("High Score: {}", state.high_score)))?;

    if let Some(effect) = state.effect.filter(|e| e.is_live(now)) {
        out.queue(cursor::MoveTo(1, 2))?;
        out.queue(Print(format!(
            "{} ACTIVE {:>2}s",
            effect.kind.label(),
            effect.seconds_left(now)
        )))?;
    }

    if state.no_collision {
        out.queue(cursor::MoveTo(1, 3))?;
        out.queue(style::SetForegroundColor(C_CHEAT))?;
        out.queue(Print("CHEAT MODE ON"))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, state: &GameState, rows: u16) -> std::io::Result<()> {
    let action = match state.status {
        GameStatus::Active => "Jump",
        GameStatus::GameOver => "Restart",
    };
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(format!("SPACE : {}   P : No-collision   Q : Quit", action)))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let score_line = format!("Score: {}  High Score: {}", state.score, state.high_score);
    let new_best = state.score > 0 && state.score >= state.high_score;

    let lines: &[(&str, Color)] = &[
        ("╔══════════════════════╗", Color::Red),
        ("║      GAME  OVER      ║", Color::Red),
        ("╚══════════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
        (if new_best { "★ NEW BEST ★" } else { "" }, Color::Yellow),
        ("Press SPACE to restart", Color::White),
    ];

    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2);

    out.queue(style::SetBackgroundColor(Color::Black))?;
    for (i, (msg, color)) in lines.iter().enumerate() {
        if msg.is_empty() {
            continue;
        }
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
