use std::time::{Duration, Instant};
use common::games::SessionRng;
use common::log;
use common::tools::subnet::{parse_cidr_notation, QuizAnswer, QuizVerdict, SubnetInfo, SubnetQuestion};
use eframe::egui;

const VERDICT_DISPLAY_TIME: Duration = Duration::from_secs(10);

pub struct SubnetQuizPanel {
    rng: SessionRng,
    question: SubnetQuestion,
    answer: QuizAnswer,
    verdict: Option<(QuizVerdict, Instant)>,
    calculator_input: String,
}

impl SubnetQuizPanel {
    pub fn new() -> Self {
        let mut rng = SessionRng::from_random();
        let question = SubnetQuestion::generate(&mut rng);
        Self {
            rng,
            question,
            answer: QuizAnswer::default(),
            verdict: None,
            calculator_input: String::new(),
        }
    }

    pub fn render(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        self.expire_verdict(ctx);

        ui.heading("Subnetting quiz");
        ui.add_space(6.0);
        ui.label(self.question.prompt());
        ui.add_space(6.0);

        let answering = self.verdict.is_none();
        egui::Grid::new("subnet_quiz_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Subnet mask");
                ui.add_enabled(answering, egui::TextEdit::singleline(&mut self.answer.subnet_mask));
                ui.end_row();
                ui.label("Total hosts");
                ui.add_enabled(answering, egui::TextEdit::singleline(&mut self.answer.total_addresses));
                ui.end_row();
                ui.label("Network address");
                ui.add_enabled(answering, egui::TextEdit::singleline(&mut self.answer.network_address));
                ui.end_row();
                ui.label("Broadcast address");
                ui.add_enabled(answering, egui::TextEdit::singleline(&mut self.answer.broadcast_address));
                ui.end_row();
            });

        ui.add_space(6.0);
        if ui.add_enabled(answering, egui::Button::new("Check")).clicked() {
            self.submit();
        }

        if let Some((verdict, _)) = &self.verdict {
            render_verdict(ui, verdict);
        }

        ui.add_space(16.0);
        ui.separator();
        self.render_calculator(ui);
    }

    fn submit(&mut self) {
        let verdict = self.question.check(&self.answer);
        log!("Subnet quiz answer for {}/{}: {:?}", self.question.info.address, self.question.info.prefix, verdict);
        self.verdict = Some((verdict, Instant::now()));
    }

    fn expire_verdict(&mut self, ctx: &egui::Context) {
        let Some((_, shown_at)) = &self.verdict else {
            return;
        };

        let elapsed = shown_at.elapsed();
        if elapsed >= VERDICT_DISPLAY_TIME {
            self.next_question();
        } else {
            ctx.request_repaint_after(VERDICT_DISPLAY_TIME - elapsed);
        }
    }

    fn next_question(&mut self) {
        self.question = SubnetQuestion::generate(&mut self.rng);
        self.answer.clear();
        self.verdict = None;
    }

    fn render_calculator(&mut self, ui: &mut egui::Ui) {
        ui.label("Calculator (address/prefix)");
        ui.add(egui::TextEdit::singleline(&mut self.calculator_input).hint_text("192.168.1.10/24"));

        if self.calculator_input.trim().is_empty() {
            return;
        }

        match parse_cidr_notation(&self.calculator_input)
            .and_then(|(address, prefix)| SubnetInfo::calculate(address, prefix))
        {
            Ok(info) => {
                ui.monospace(format!("Mask:      {}", info.mask));
                ui.monospace(format!("Network:   {}", info.network));
                ui.monospace(format!("Broadcast: {}", info.broadcast));
                ui.monospace(format!("Addresses: {}", info.total_addresses));
            }
            Err(e) => {
                ui.weak(e);
            }
        }
    }
}

fn render_verdict(ui: &mut egui::Ui, verdict: &QuizVerdict) {
    ui.add_space(6.0);
    match verdict {
        QuizVerdict::Correct => {
            ui.colored_label(egui::Color32::from_rgb(0x60, 0xC0, 0x60), "Correct!");
        }
        QuizVerdict::Incorrect { expected } => {
            ui.colored_label(egui::Color32::from_rgb(0xE0, 0x60, 0x60), "Incorrect. The correct answers are:");
            ui.monospace(format!("Subnet mask:       {}", expected.subnet_mask));
            ui.monospace(format!("Total hosts:       {}", expected.total_addresses));
            ui.monospace(format!("Network address:   {}", expected.network_address));
            ui.monospace(format!("Broadcast address: {}", expected.broadcast_address));
        }
    }
}
