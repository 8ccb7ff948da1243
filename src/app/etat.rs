//! src/app/etat.rs
//!
//! État UI : la session du noyau + ce que l’écran montre.
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par `Calculatrice` (noyau).
//! - L’écran ne garde que du texte rendu, jamais de référence vers le noyau.

use calculatrice_pile::noyau::rendu::pile_en_texte;
use calculatrice_pile::noyau::{Affichage, Calculatrice, Instantane, Touche};

/// Taille du texte du registre.
pub const TAILLE_ECRAN: f32 = 30.0;

/// Réglages de l’application.
#[derive(Clone, Debug)]
pub struct Reglages {
    /// Ajoute un avertissement quand le registre vaut ±∞ ou NaN
    /// (la valeur reste affichée telle quelle).
    pub signaler_non_fini: bool,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            signaler_non_fini: true,
        }
    }
}

/// Adaptateur d’affichage egui : texte figé au dernier rendu.
#[derive(Clone, Debug, Default)]
pub struct Ecran {
    pub registre: String,
    pub operations: String,
    pub non_fini: bool,
}

impl Affichage for Ecran {
    fn rendre(&mut self, instantane: &Instantane<'_>) {
        self.registre.clear();
        self.registre.push_str(instantane.texte);
        self.operations = pile_en_texte(instantane.pile);
        self.non_fini = !instantane.est_fini();
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub calc: Calculatrice<Ecran>,
    pub reglages: Reglages,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            calc: Calculatrice::new(Ecran::default()),
            reglages: Reglages::default(),
        }
    }
}

impl AppCalc {
    pub fn ecran(&self) -> &Ecran {
        self.calc.affichage()
    }

    pub fn touche(&mut self, touche: Touche) {
        self.calc.touche(touche);
    }

    /// Texte tapé au clavier : chaque caractère passe par la table de liaison.
    pub fn texte_clavier(&mut self, texte: &str) {
        let mut buf = [0u8; 4];
        for c in texte.chars() {
            self.calc.touche_nommee(c.encode_utf8(&mut buf));
        }
    }

    /// Avertissement à montrer sous l’écran, s’il y a lieu.
    pub fn avertissement(&self) -> Option<&'static str> {
        (self.reglages.signaler_non_fini && self.ecran().non_fini).then_some("résultat non fini")
    }
}
