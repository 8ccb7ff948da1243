// src/app.rs
//
// Calculatrice à pile — module App (racine)
// -----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Router le clavier physique vers la table de liaison du noyau
//
// Clavier :
// - Event::Text  => chiffres, "." ",", "+ - * /", "="
// - Event::Key   => Enter, Backspace, Escape (CE), Delete (C)
// Les touches imprimables ne passent QUE par Event::Text (sinon double saisie).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

/// Touches non imprimables reconnues par le noyau.
fn nom_touche(key: egui::Key) -> Option<&'static str> {
    match key {
        egui::Key::Enter => Some("Enter"),
        egui::Key::Backspace => Some("Backspace"),
        egui::Key::Escape => Some("Escape"),
        egui::Key::Delete => Some("Delete"),
        _ => None,
    }
}

impl AppCalc {
    fn clavier(&mut self, ctx: &egui::Context) {
        let evenements = ctx.input(|i| i.events.clone());
        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => self.texte_clavier(&texte),
                egui::Event::Key {
                    key, pressed: true, ..
                } => {
                    if let Some(nom) = nom_touche(key) {
                        self.calc.touche_nommee(nom);
                    }
                }
                _ => {}
            }
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
