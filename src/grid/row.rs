/// Editable columns of one generation-unit row, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridColumn {
    Name,
    RatedMva,
    Quantity,
    PowerFactor,
    ReactiveMvar,
}

impl GridColumn {
    pub const EDITABLE: [GridColumn; 5] = [
        GridColumn::Name,
        GridColumn::RatedMva,
        GridColumn::Quantity,
        GridColumn::PowerFactor,
        GridColumn::ReactiveMvar,
    ];

    pub fn index(self) -> usize {
        Self::EDITABLE
            .iter()
            .position(|col| *col == self)
            .unwrap_or(0)
    }
}

/// One line item of the PRC-025 synchronous criteria grid. Entered cells are
/// raw text buffers; derived cells hold the formatted display string, where
/// an empty string renders as a blank cell.
#[derive(Debug, Clone, Default)]
pub struct RowState {
    pub name: String,
    pub rated_mva: String,
    pub quantity: String,
    pub power_factor: String,
    pub reactive_mvar: String,

    pub total_mva: String,
    pub real_mw: String,
    pub reactive_calc: String,

    /// Cells flagged by a failed save, indexed by `GridColumn::index()` for
    /// the four required columns (name, MVA, quantity, PF).
    pub flagged: [bool; 4],
}

impl RowState {
    pub fn cell(&self, column: GridColumn) -> &str {
        match column {
            GridColumn::Name => &self.name,
            GridColumn::RatedMva => &self.rated_mva,
            GridColumn::Quantity => &self.quantity,
            GridColumn::PowerFactor => &self.power_factor,
            GridColumn::ReactiveMvar => &self.reactive_mvar,
        }
    }

    pub fn cell_mut(&mut self, column: GridColumn) -> &mut String {
        match column {
            GridColumn::Name => &mut self.name,
            GridColumn::RatedMva => &mut self.rated_mva,
            GridColumn::Quantity => &mut self.quantity,
            GridColumn::PowerFactor => &mut self.power_factor,
            GridColumn::ReactiveMvar => &mut self.reactive_mvar,
        }
    }

    /// Recomputes the derived cells from the entered ones. The blank versus
    /// non-blank branching matches the source spreadsheet: a derived cell
    /// stays blank until every operand it needs is numeric, and the
    /// calculated MVAR additionally yields to a manually entered MVAR, an
    /// empty name, or a power factor outside [-1, 1].
    pub fn recalc(&mut self) {
        let mva = parse_number(&self.rated_mva);
        let qty = parse_number(&self.quantity);
        let pf = parse_number(&self.power_factor);

        let total = match (mva, qty) {
            (Some(mva), Some(qty)) => Some(mva * qty),
            _ => None,
        };
        self.total_mva = total.map(format_fixed1).unwrap_or_default();

        let real = match (total, pf) {
            (Some(total), Some(pf)) => Some(total * pf),
            _ => None,
        };
        self.real_mw = real.map(format_fixed1).unwrap_or_default();

        let manual_mvar = !self.reactive_mvar.trim().is_empty();
        self.reactive_calc = match (total, pf) {
            (Some(total), Some(pf))
                if !manual_mvar
                    && !self.name.trim().is_empty()
                    && (-1.0..=1.0).contains(&pf) =>
            {
                let mvar = total * (1.0 - pf * pf).sqrt();
                if mvar.is_finite() {
                    format_fixed1(mvar)
                } else {
                    String::new()
                }
            }
            _ => String::new(),
        };
    }

    pub fn clear(&mut self) {
        *self = RowState::default();
    }

    pub fn clear_flags(&mut self) {
        self.flagged = [false; 4];
    }

    /// True when every entered cell is blank.
    pub fn is_blank(&self) -> bool {
        GridColumn::EDITABLE
            .iter()
            .all(|col| self.cell(*col).trim().is_empty())
    }
}

pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

pub(crate) fn parse_or_zero(raw: &str) -> f64 {
    parse_number(raw).unwrap_or(0.0)
}

pub(crate) fn format_fixed1(value: f64) -> String {
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, mva: &str, qty: &str, pf: &str, mvar: &str) -> RowState {
        let mut row = RowState {
            name: name.to_string(),
            rated_mva: mva.to_string(),
            quantity: qty.to_string(),
            power_factor: pf.to_string(),
            reactive_mvar: mvar.to_string(),
            ..RowState::default()
        };
        row.recalc();
        row
    }

    #[test]
    fn total_is_capacity_times_quantity() {
        let row = row("GenA", "2", "3", "", "");
        assert_eq!(row.total_mva, "6.0");
        assert_eq!(row.real_mw, "", "real power needs a power factor");
    }

    #[test]
    fn worked_example_at_pf_point_nine() {
        let row = row("GenA", "2", "3", "0.9", "");
        assert_eq!(row.total_mva, "6.0");
        assert_eq!(row.real_mw, "5.4");
        // 6 × sin(acos(0.9)) = 2.615…, one decimal
        assert_eq!(row.reactive_calc, "2.6");
    }

    #[test]
    fn manual_mvar_suppresses_calculated_mvar() {
        let row = row("GenA", "2", "3", "0.9", "1.5");
        assert_eq!(row.reactive_calc, "");
        assert_eq!(row.real_mw, "5.4", "real power is unaffected");
    }

    #[test]
    fn blank_name_suppresses_calculated_mvar() {
        let row = row("", "2", "3", "0.9", "");
        assert_eq!(row.total_mva, "6.0");
        assert_eq!(row.reactive_calc, "");
    }

    #[test]
    fn out_of_range_power_factor_suppresses_calculated_mvar() {
        let row = row("GenA", "2", "3", "1.2", "");
        assert_eq!(row.reactive_calc, "");
        assert_eq!(row.real_mw, "7.2", "real power has no range guard");
        let row = self::row("GenA", "2", "3", "-1.5", "");
        assert_eq!(row.reactive_calc, "");
    }

    #[test]
    fn negative_power_factor_within_range_computes() {
        let row = row("GenA", "4", "1", "-0.8", "");
        assert_eq!(row.real_mw, "-3.2");
        assert_eq!(row.reactive_calc, "2.4");
    }

    #[test]
    fn non_numeric_operands_leave_derived_blank() {
        let row = row("GenA", "abc", "3", "0.9", "");
        assert_eq!(row.total_mva, "");
        assert_eq!(row.real_mw, "");
        assert_eq!(row.reactive_calc, "");
    }

    #[test]
    fn unity_power_factor_gives_zero_mvar() {
        let row = row("GenA", "5", "2", "1", "");
        assert_eq!(row.reactive_calc, "0.0");
    }
}
