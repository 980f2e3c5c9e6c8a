use super::Board;

impl Board {
    /// Static material evaluation from the maximizing side's perspective.
    ///
    /// Sum over all live pieces of 3 for a king and 1 for a man, positive
    /// for Black (the engine's side), negative for White. Zero-sum and
    /// antisymmetric: recoloring every piece negates the score. There are
    /// no positional terms.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let mut score = 0;
        for row in &self.cells {
            for cell in row.iter().flatten() {
                score += cell.color().sign() * cell.value();
            }
        }
        score
    }
}
