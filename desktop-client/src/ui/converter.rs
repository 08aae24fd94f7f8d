use common::tools::base_converter::{convert, Radix};
use eframe::egui;

pub struct ConverterPanel {
    fields: [String; 4],
    error: Option<String>,
}

impl ConverterPanel {
    pub fn new() -> Self {
        Self {
            fields: Default::default(),
            error: None,
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui) {
        ui.heading("Number converter");
        ui.add_space(6.0);

        let mut edited = None;
        egui::Grid::new("base_converter_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                for (index, radix) in Radix::ALL.iter().enumerate() {
                    ui.label(radix.label());
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.fields[index])
                            .desired_width(320.0)
                            .font(egui::TextStyle::Monospace),
                    );
                    if response.changed() {
                        edited = Some(index);
                    }
                    ui.end_row();
                }
            });

        if let Some(index) = edited {
            self.apply_edit(index);
        }

        if let Some(error) = &self.error {
            ui.colored_label(egui::Color32::from_rgb(0xE0, 0x60, 0x60), error);
        }
    }

    /// Recomputes every other field from the one just edited. Invalid input
    /// clears them.
    fn apply_edit(&mut self, index: usize) {
        let source = Radix::ALL[index];
        let input = self.fields[index].clone();

        if input.trim().is_empty() {
            self.clear_others(index);
            self.error = None;
            return;
        }

        match convert(source, &input) {
            Ok(conversion) => {
                for (other, radix) in Radix::ALL.iter().enumerate() {
                    if other != index {
                        self.fields[other] = conversion.get(*radix).to_string();
                    }
                }
                self.error = None;
            }
            Err(e) => {
                self.clear_others(index);
                self.error = Some(e);
            }
        }
    }

    fn clear_others(&mut self, index: usize) {
        for (other, field) in self.fields.iter_mut().enumerate() {
            if other != index {
                field.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_fills_other_fields() {
        let mut panel = ConverterPanel::new();
        panel.fields[1] = "1010".to_string();

        panel.apply_edit(1);

        assert_eq!(panel.fields, ["10", "1010", "12", "A"].map(String::from));
        assert!(panel.error.is_none());
    }

    #[test]
    fn test_invalid_edit_clears_other_fields() {
        let mut panel = ConverterPanel::new();
        panel.fields[0] = "42".to_string();
        panel.apply_edit(0);

        panel.fields[3] = "XYZ".to_string();
        panel.apply_edit(3);

        assert_eq!(panel.fields, ["", "", "", "XYZ"].map(String::from));
        assert!(panel.error.is_some());
    }
}
