use rand::Rng;

/// Largest value either operand can take.
pub const LARGEST_OPERAND: u16 = 255;

/// One binary-addition practice problem: `x + y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdditionProblem {
    /// The first operand.
    pub x: u16,
    /// The second operand.
    pub y: u16,
}

impl AdditionProblem {
    /// Draws a fresh problem with both operands in `0..=LARGEST_OPERAND`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self { x: rng.gen_range(0..=LARGEST_OPERAND),
               y: rng.gen_range(0..=LARGEST_OPERAND), }
    }

    /// The sum the learner is asked to compute.
    #[must_use]
    pub const fn sum(&self) -> u16 {
        self.x + self.y
    }

    /// Renders the worksheet: operand rows in binary and decimal side by
    /// side, then the rule the solution goes under. Both number columns are
    /// right-aligned to the widest entry, the solution row included, so the
    /// revealed sum lines up with the operands.
    ///
    /// # Example
    /// ```
    /// use hexplain::quiz::addition::AdditionProblem;
    ///
    /// let problem = AdditionProblem { x: 5, y: 3 };
    /// let lines = problem.worksheet();
    ///
    /// assert_eq!(lines.len(), 3);
    /// assert!(lines[0].contains("101"));
    /// assert!(lines[1].contains("| "));
    /// ```
    #[must_use]
    pub fn worksheet(&self) -> Vec<String> {
        let (bin_width, dec_width) = self.column_widths();

        vec![format!("   {:>bin_width$}     |     {:>dec_width$}",
                     format!("{:b}", self.x),
                     self.x),
             format!(" + {:>bin_width$}     |   + {:>dec_width$}",
                     format!("{:b}", self.y),
                     self.y),
             format!("___{}____ | ____{}", "_".repeat(bin_width), "_".repeat(dec_width)),]
    }

    /// Renders the solution row, aligned with the worksheet.
    #[must_use]
    pub fn solution_row(&self) -> String {
        let (bin_width, dec_width) = self.column_widths();

        format!("   {:>bin_width$}     |     {:>dec_width$}",
                format!("{:b}", self.sum()),
                self.sum())
    }

    fn column_widths(&self) -> (usize, usize) {
        let values = [self.x, self.y, self.sum()];
        let bin_width = values.iter().map(|v| format!("{v:b}").len()).max().unwrap_or(1);
        let dec_width = values.iter().map(|v| v.to_string().len()).max().unwrap_or(1);

        (bin_width, dec_width)
    }
}
