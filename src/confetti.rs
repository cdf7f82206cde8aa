//! Layout for the decorative confetti burst on the home page.

pub const PIECE_COUNT: usize = 200;
pub const BURST_MILLIS: u32 = 5_000;
pub const COLORS: [&str; 4] = ["#456789", "#5499c7", "#f39c12", "#394b59"];

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub left_px: f64,
    pub size_px: f64,
    pub rotation_deg: f64,
    pub delay_ms: u32,
    pub fall_ms: u32,
    pub color: &'static str,
}

impl ConfettiPiece {
    pub fn style(&self, fall_px: f64) -> String {
        format!(
            "left: {:.1}px; width: {:.1}px; height: {:.1}px; background: {}; \
             --confetti-rotate: {:.0}deg; --confetti-fall: {:.0}px; \
             animation-delay: {}ms; animation-duration: {}ms;",
            self.left_px,
            self.size_px,
            self.size_px * 0.4,
            self.color,
            self.rotation_deg,
            fall_px,
            self.delay_ms,
            self.fall_ms,
        )
    }
}

/// xorshift32; the burst only needs to look random.
struct Scatter(u32);

impl Scatter {
    fn next_unit(&mut self) -> f64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        f64::from(x) / f64::from(u32::MAX)
    }
}

/// Spreads `count` pieces across a viewport `width` pixels wide.
pub fn scatter(count: usize, width: f64, seed: u32) -> Vec<ConfettiPiece> {
    let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    let mut rng = Scatter(seed.max(1));

    (0..count)
        .map(|index| ConfettiPiece {
            left_px: rng.next_unit() * width,
            size_px: 6.0 + rng.next_unit() * 8.0,
            rotation_deg: rng.next_unit() * 720.0 - 360.0,
            delay_ms: (rng.next_unit() * 1_000.0) as u32,
            fall_ms: 2_500 + (rng.next_unit() * 1_500.0) as u32,
            color: COLORS[index % COLORS.len()],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pieces_stay_within_the_viewport() {
        let pieces = scatter(PIECE_COUNT, 800.0, 7);

        assert_eq!(pieces.len(), PIECE_COUNT);
        assert!(pieces.iter().all(|piece| (0.0..=800.0).contains(&piece.left_px)));
    }

    #[test]
    fn every_piece_lands_before_the_burst_ends() {
        let pieces = scatter(PIECE_COUNT, 1024.0, 42);

        assert!(pieces
            .iter()
            .all(|piece| piece.delay_ms + piece.fall_ms <= BURST_MILLIS));
    }

    #[test]
    fn same_seed_gives_same_layout() {
        assert_eq!(scatter(20, 500.0, 9), scatter(20, 500.0, 9));
        assert_ne!(scatter(20, 500.0, 9), scatter(20, 500.0, 10));
    }

    #[test]
    fn degenerate_widths_collapse_to_the_left_edge() {
        assert!(scatter(5, f64::NAN, 3).iter().all(|piece| piece.left_px == 0.0));
        assert!(scatter(5, -10.0, 3).iter().all(|piece| piece.left_px == 0.0));
    }

    #[test]
    fn colors_cycle_through_the_palette() {
        let pieces = scatter(8, 100.0, 1);

        assert_eq!(pieces[0].color, COLORS[0]);
        assert_eq!(pieces[5].color, COLORS[1]);
    }

    #[test]
    fn style_carries_position_and_timing() {
        let piece = ConfettiPiece {
            left_px: 12.0,
            size_px: 10.0,
            rotation_deg: 90.0,
            delay_ms: 100,
            fall_ms: 3_000,
            color: "#456789",
        };
        let style = piece.style(720.0);

        assert!(style.contains("left: 12.0px"));
        assert!(style.contains("--confetti-fall: 720px"));
        assert!(style.contains("animation-duration: 3000ms"));
    }
}
