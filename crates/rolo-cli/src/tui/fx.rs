//! Decorative drifting-particle background.
//!
//! Purely cosmetic: an arena of plain value structs rebuilt every tick and
//! painted as dim glyphs into empty cells before the widgets render. Carries
//! no application state.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

const DENSITY_DIVISOR: u16 = 40;
const GLYPHS: [char; 3] = ['·', '∙', '•'];

#[derive(Debug, Clone, Copy)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    life: u16,
    glyph: char,
}

/// Tiny xorshift64 PRNG; decorative drift has no quality requirement.
#[derive(Debug)]
struct Rng(u64);

impl Rng {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn unit(&mut self) -> f32 {
        (self.next() % 10_000) as f32 / 10_000.0
    }
}

#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    rng: Rng,
}

impl ParticleField {
    pub fn new() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9E37_79B9)
            | 1;
        Self {
            particles: Vec::new(),
            rng: Rng(seed),
        }
    }

    fn spawn(&mut self, area: Rect) -> Particle {
        let glyph = GLYPHS[(self.rng.next() % GLYPHS.len() as u64) as usize];
        Particle {
            x: area.x as f32 + self.rng.unit() * area.width.max(1) as f32,
            y: area.y as f32 + self.rng.unit() * area.height.max(1) as f32,
            vx: (self.rng.unit() - 0.5) * 0.6,
            vy: -0.1 - self.rng.unit() * 0.25,
            life: 40 + (self.rng.next() % 120) as u16,
            glyph,
        }
    }

    /// Advance one tick, respawning expired or escaped particles.
    pub fn step(&mut self, area: Rect) {
        let target = ((area.width / DENSITY_DIVISOR.max(1)) as usize + 1) * 6;
        while self.particles.len() < target {
            let p = self.spawn(area);
            self.particles.push(p);
        }

        let mut next = Vec::with_capacity(self.particles.len());
        for mut p in self.particles.drain(..) {
            p.x += p.vx;
            p.y += p.vy;
            p.life = p.life.saturating_sub(1);
            let inside = p.x >= area.x as f32
                && p.x < area.right() as f32
                && p.y >= area.y as f32
                && p.y < area.bottom() as f32;
            if p.life > 0 && inside {
                next.push(p);
            }
        }
        self.particles = next;
    }

    /// Paint particles into cells that are still blank.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(Color::DarkGray);
        for p in &self.particles {
            let x = p.x as u16;
            let y = p.y as u16;
            if x >= area.x && x < area.right() && y >= area.y && y < area.bottom() {
                let cell = &mut buf[(x, y)];
                if cell.symbol() == " " {
                    cell.set_char(p.glyph);
                    cell.set_style(style);
                }
            }
        }
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}
