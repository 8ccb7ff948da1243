// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Écran : registre (gros, aligné à droite) + ligne des opérations en attente
// - Pavé tactile : chiffres, + − × ÷, 1/x x² √ ±, =, C / CE / DEL
// - Clavier : géré dans app.rs (table de liaison du noyau)

use eframe::egui;

use calculatrice_pile::noyau::{ActionTouche, Genre, Operateur, Touche};

use super::etat::{AppCalc, TAILLE_ECRAN};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice à pile");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.separator();

        ui.checkbox(
            &mut self.reglages.signaler_non_fini,
            "Signaler les résultats non finis (∞, NaN)",
        );
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let ecran = self.ecran();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // Ligne des opérations : garde sa hauteur même vide.
                    let ops = if ecran.operations.is_empty() {
                        " "
                    } else {
                        ecran.operations.as_str()
                    };
                    ui.label(egui::RichText::new(ops).monospace().weak());
                    ui.label(
                        egui::RichText::new(&ecran.registre)
                            .monospace()
                            .size(TAILLE_ECRAN),
                    );
                });
            });

        if let Some(msg) = self.avertissement() {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, msg);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        use Genre::*;

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_action(ui, "C", "Remise à zéro totale", ActionTouche::ToutEffacer);
                self.bouton_action(ui, "CE", "Efface le nombre en cours", ActionTouche::EffacerEntree);
                self.bouton_action(ui, "DEL", "Efface le dernier chiffre", ActionTouche::Retour);
                self.bouton_op(ui, Division);
                ui.end_row();

                self.bouton_op(ui, Inverse);
                self.bouton_op(ui, Carre);
                self.bouton_op(ui, Racine);
                self.bouton_op(ui, Multiplication);
                ui.end_row();

                self.bouton_chiffre(ui, '7');
                self.bouton_chiffre(ui, '8');
                self.bouton_chiffre(ui, '9');
                self.bouton_op(ui, Soustraction);
                ui.end_row();

                self.bouton_chiffre(ui, '4');
                self.bouton_chiffre(ui, '5');
                self.bouton_chiffre(ui, '6');
                self.bouton_op(ui, Addition);
                ui.end_row();

                self.bouton_chiffre(ui, '1');
                self.bouton_chiffre(ui, '2');
                self.bouton_chiffre(ui, '3');
                self.bouton_op(ui, Egal);
                ui.end_row();

                self.bouton_op(ui, Negation);
                self.bouton_chiffre(ui, '0');
                self.bouton_chiffre(ui, '.');
                ui.label("");
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: Option<&str>, touche: Touche) {
        let mut resp = ui.add_sized([64.0, 40.0], egui::Button::new(label));
        if let Some(tip) = tip {
            resp = resp.on_hover_text(tip);
        }
        if resp.clicked() {
            self.touche(touche);
        }
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, c: char) {
        self.bouton(ui, &c.to_string(), None, Touche::Chiffre(c));
    }

    fn bouton_op(&mut self, ui: &mut egui::Ui, genre: Genre) {
        let symbole = Operateur::de(genre).symbole;
        self.bouton(ui, symbole, None, Touche::Operateur(genre));
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: ActionTouche) {
        self.bouton(ui, label, Some(tip), Touche::Action(action));
    }
}
