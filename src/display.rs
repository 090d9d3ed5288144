//! Rendering layer. All terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! state into terminal commands.  The 800×600 play field is scaled to
//! whatever size the terminal currently has.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::compute::obstacle_height;
use crate::constants::*;
use crate::entities::{GameState, GameStatus, ObstacleKind};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_GROUND: Color = Color::DarkGrey;
const C_PLAYER: Color = Color::Magenta;
const C_OBSTACLE: Color = Color::Green;
const C_STONE: Color = Color::Grey;
const C_BULLET: Color = Color::White;
const C_BIRD: Color = Color::Red;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (tw, th) = terminal::size()?;

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_ground(out, tw, th)?;

    for obs in &state.obstacles {
        let color = match obs.kind {
            ObstacleKind::Normal => C_OBSTACLE,
            ObstacleKind::Stone => C_STONE,
        };
        fill_rect(
            out, tw, th,
            obs.x, obs.y, OBSTACLE_WIDTH, obstacle_height(obs.kind),
            color,
        )?;
    }

    for bullet in &state.bullets {
        fill_rect(out, tw, th, bullet.x, bullet.y, BULLET_WIDTH, BULLET_HEIGHT, C_BULLET)?;
    }

    if state.bird.active {
        fill_rect(out, tw, th, state.bird.x, state.bird.y, BIRD_WIDTH, BIRD_HEIGHT, C_BIRD)?;
    }

    fill_rect(
        out, tw, th,
        state.player.x, state.player.y, PLAYER_WIDTH, PLAYER_HEIGHT,
        C_PLAYER,
    )?;

    draw_hud(out, state)?;
    draw_controls_hint(out, th)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, tw, th)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, th.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Play-field → terminal scaling ─────────────────────────────────────────────

fn col(x: i32, tw: u16) -> i32 {
    (x as i64 * tw as i64 / SCREEN_WIDTH as i64) as i32
}

fn row(y: i32, th: u16) -> i32 {
    (y as i64 * th as i64 / SCREEN_HEIGHT as i64) as i32
}

/// Draw a filled play-field rectangle as a block of colored cells, at least
/// 1×1 so thin entities (bullets) stay visible on small terminals.
fn fill_rect<W: Write>(
    out: &mut W,
    tw: u16,
    th: u16,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    color: Color,
) -> std::io::Result<()> {
    let x1 = col(x + w, tw).max(col(x, tw) + 1).min(tw as i32);
    let y1 = row(y + h, th).max(row(y, th) + 1).min(th as i32);
    let x0 = col(x, tw).max(0);
    let y0 = row(y, th).max(0);
    if x0 >= x1 || y0 >= y1 {
        return Ok(());
    }

    out.queue(style::SetBackgroundColor(color))?;
    let run = " ".repeat((x1 - x0) as usize);
    for r in y0..y1 {
        out.queue(cursor::MoveTo(x0 as u16, r as u16))?;
        out.queue(Print(&run))?;
    }
    out.queue(style::SetBackgroundColor(Color::Reset))?;
    Ok(())
}

fn draw_ground<W: Write>(out: &mut W, tw: u16, th: u16) -> std::io::Result<()> {
    fill_rect(out, tw, th, 0, GROUND_Y, SCREEN_WIDTH, GROUND_HEIGHT, C_GROUND)
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}", state.score)))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, th: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, th.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → : Move   ↑ : Jump   X : Shoot   ↓ : Duck   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    tw: u16,
    th: u16,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.score);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
        ("ENTER - Restart   Q - Quit", Color::White),
    ];

    let cx = tw / 2;
    let start_row = (th / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let r = start_row + i as u16;
        let c = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(c, r))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
