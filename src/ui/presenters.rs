use crate::io::OutputWriter;

pub struct ShipPresenter;

impl ShipPresenter {
    /// Notification block printed after every move, followed by a blank line.
    pub fn show_movement(
        type_name: &str,
        direction: &str,
        distance: i32,
        fuel_used: i32,
        output: &mut dyn OutputWriter,
    ) {
        output.writeln(&format!("Moving the {}.", type_name));
        output.writeln(&format!("Direction: {}", direction));
        output.writeln(&format!("Distance: {} km(s)", distance));
        output.writeln(&format!("Fuel used: {} litre(s)", fuel_used));
        output.writeln("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::MockOutput;

    #[test]
    fn movement_block_layout() {
        let mut out = MockOutput::new();
        ShipPresenter::show_movement("Starfighter", "east", 1, 1, &mut out);
        assert_eq!(
            out.text(),
            "Moving the Starfighter.\nDirection: east\nDistance: 1 km(s)\nFuel used: 1 litre(s)\n\n"
        );
    }

    #[test]
    fn negative_values_printed_verbatim() {
        let mut out = MockOutput::new();
        ShipPresenter::show_movement("Battlecruiser", "south", -2, -4, &mut out);
        assert!(out.text().contains("Distance: -2 km(s)"));
        assert!(out.text().contains("Fuel used: -4 litre(s)"));
    }
}
