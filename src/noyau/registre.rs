//! Registre : le nombre en cours de saisie.
//!
//! Contrats :
//! - `valeur == lire_valeur(texte)` après chaque mutation par saisie.
//! - `neuf == true` tant qu’aucun chiffre n’a été tapé depuis le dernier
//!   `clear()` / `restart()` ; le prochain chiffre commence alors un nouveau nombre.
//! - Saisie hors domaine (second point, retour arrière sur registre neuf) : ignorée.

use super::rendu::{lire_valeur, texte_canonique};

const TEXTE_INITIAL: &str = "0";

#[derive(Clone, Debug, PartialEq)]
pub struct Registre {
    texte: String,
    valeur: f64,
    neuf: bool,
}

impl Default for Registre {
    fn default() -> Self {
        Self {
            texte: TEXTE_INITIAL.to_string(),
            valeur: 0.0,
            neuf: true,
        }
    }
}

impl Registre {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texte(&self) -> &str {
        &self.texte
    }

    pub fn valeur(&self) -> f64 {
        self.valeur
    }

    pub fn est_neuf(&self) -> bool {
        self.neuf
    }

    /// Vrai si des chiffres ont été tapés depuis le dernier restart/clear.
    pub fn changed(&self) -> bool {
        !self.neuf
    }

    /// Pousse un chiffre ou le point décimal.
    /// Tout autre caractère est ignoré.
    pub fn push(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') {
            return;
        }

        if self.neuf {
            self.texte.clear();
            if c == '.' {
                self.texte.push('0');
            }
            self.texte.push(c);
            self.neuf = false;
        } else {
            // Un seul point par nombre.
            if c == '.' && self.texte.contains('.') {
                return;
            }
            self.texte.push(c);
        }
        self.valeur = lire_valeur(&self.texte);
    }

    /// Efface le dernier caractère tapé. Sans effet sur un registre neuf.
    pub fn pop_last(&mut self) {
        if self.neuf {
            return;
        }
        self.texte.pop();
        if self.texte.is_empty() || self.texte == "-" {
            self.clear();
        } else {
            self.valeur = lire_valeur(&self.texte);
        }
    }

    /// Retour à l’état initial : "0", 0, neuf.
    pub fn clear(&mut self) {
        self.texte.clear();
        self.texte.push_str(TEXTE_INITIAL);
        self.valeur = 0.0;
        self.neuf = true;
    }

    /// Marque neuf sans toucher au texte ni à la valeur.
    pub fn restart(&mut self) {
        self.neuf = true;
    }

    /// Dépose un résultat calculé. L’état neuf/changé est laissé à l’appelant.
    pub fn set_value(&mut self, x: f64) {
        self.valeur = x;
        self.texte = texte_canonique(x);
    }
}
