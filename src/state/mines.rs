// Minesweeper board state: a fixed grid with a scattered mine mask.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    mines: Vec<Vec<bool>>,
}

impl Board {
    /// Scatter `count` mines with the browser RNG.
    pub fn generate(width: usize, height: usize, count: usize) -> Self {
        Self::place(width, height, count, js_sys::Math::random)
    }

    /// Rejection-sample distinct cells until `count` mines are placed.
    /// `count` is clamped to the board area.
    pub fn place(
        width: usize,
        height: usize,
        count: usize,
        mut rand: impl FnMut() -> f64,
    ) -> Self {
        let mut mines = vec![vec![false; width]; height];
        let area = width * height;
        let mut placed = 0;
        while placed < count.min(area) {
            let idx = ((rand() * area as f64) as usize).min(area - 1);
            let (y, x) = (idx / width, idx % width);
            if !mines[y][x] {
                mines[y][x] = true;
                placed += 1;
            }
        }
        Self {
            width,
            height,
            mines,
        }
    }

    pub fn is_mine(&self, x: usize, y: usize) -> bool {
        self.mines
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    pub fn mine_count(&self) -> usize {
        self.mines
            .iter()
            .map(|row| row.iter().filter(|m| **m).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Deterministic stand-in for Math.random: walks the unit interval so
    // successive samples land on fresh cells.
    fn stepper() -> impl FnMut() -> f64 {
        let mut i = 0usize;
        move || {
            let v = i as f64 / 100.0;
            i += 1;
            v
        }
    }

    #[test]
    fn board_has_requested_dimensions_and_mine_count() {
        let board = Board::place(10, 10, 10, stepper());
        assert_eq!(board.width, 10);
        assert_eq!(board.height, 10);
        assert_eq!(board.mine_count(), 10);
    }

    #[test]
    fn mine_count_is_clamped_to_the_area() {
        let board = Board::place(3, 3, 50, stepper());
        assert_eq!(board.mine_count(), 9);
    }

    #[test]
    fn out_of_range_lookups_are_not_mines() {
        let board = Board::place(2, 2, 0, stepper());
        assert!(!board.is_mine(5, 5));
        assert_eq!(board.mine_count(), 0);
    }
}
