//! A one-bar, sixteen-step drum pattern.

use saavy_drums::VoiceId;

pub const STEPS: usize = 16;

/// Which voices strike on each step, written as `x` / `.` grid rows.
pub struct Pattern {
    rows: [[bool; STEPS]; VoiceId::COUNT],
}

impl Pattern {
    /// Parse one row per voice, in [`VoiceId::ALL`] order. Missing rows are empty.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut grid = [[false; STEPS]; VoiceId::COUNT];
        for (voice_row, row) in grid.iter_mut().zip(rows) {
            let cells = row.chars().filter(|c| !c.is_whitespace());
            for (step, cell) in voice_row.iter_mut().zip(cells) {
                *step = cell == 'x';
            }
        }
        Self { rows: grid }
    }

    pub fn hits(&self, step: usize) -> impl Iterator<Item = VoiceId> + '_ {
        VoiceId::ALL
            .into_iter()
            .filter(move |voice| self.rows[voice.index()][step % STEPS])
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::from_rows(&[
            "x... .... x.x. ....", // BD
            ".... x... .... x...", // SD
            "x.x. x.x. x.x. x...", // CH
            ".... .... .... ..x.", // OH
            ".... .... .... ....", // MT
            ".... .... .... ....", // HT
            "..x. .... .... .x..", // RS
            ".... x... .... x...", // CP
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_has_four_on_the_floor_hats() {
        let pattern = Pattern::default();
        let first: Vec<VoiceId> = pattern.hits(0).collect();
        assert_eq!(first, vec![VoiceId::Kick, VoiceId::ClosedHat]);
        assert!(pattern.hits(14).any(|v| v == VoiceId::OpenHat));
        assert_eq!(pattern.hits(1).count(), 0);
    }
}
