// src/noyau/operateurs.rs
//
// Table des opérateurs (statique, immuable)
// -----------------------------------------
// - binaires : + - (classe 1), × ÷ (classe 2)
// - immédiats : 1/x, x², √, ± (classe IMMEDIATE, arité 1)
// - "=" : arité 1 mais traité à part par le moteur (jamais par la voie immédiate)
//
// L’arité découle de la fonction elle-même (Action::Unaire / Action::Binaire).

use std::fmt;

/// Classe de précédence. Plus grand = lie plus fort.
pub type Precedence = u8;

/// Un opérateur de cette classe s’applique tout de suite au registre.
/// Il ne peut donc pas avoir plus d’un opérande.
pub const IMMEDIATE: Precedence = 4;

/// Nature de l’opérateur (remplace la comparaison par identité d’objet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Genre {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Inverse,
    Carre,
    Racine,
    Negation,
    Egal,
}

/// Fonction de combinaison.
#[derive(Clone, Copy)]
pub enum Action {
    Unaire(fn(f64) -> f64),
    Binaire(fn(f64, f64) -> f64),
}

#[derive(Clone, Copy)]
pub struct Operateur {
    pub genre: Genre,
    pub precedence: Precedence,
    pub symbole: &'static str,
    /// Variante balisée pour la ligne de pile HTML.
    pub symbole_html: &'static str,
    pub action: Action,
}

impl Operateur {
    pub fn arite(&self) -> usize {
        match self.action {
            Action::Unaire(_) => 1,
            Action::Binaire(_) => 2,
        }
    }

    pub fn est_immediat(&self) -> bool {
        self.precedence == IMMEDIATE
    }

    /// Applique l’opérateur unaire à `x`.
    /// Un opérateur binaire renvoie `x` inchangé (ne doit pas arriver côté moteur).
    pub fn appliquer(&self, x: f64) -> f64 {
        match self.action {
            Action::Unaire(f) => f(x),
            Action::Binaire(_) => x,
        }
    }

    /// Combine `gauche` (opérande dépilé) et `droite` (valeur courante).
    /// Un opérateur unaire s’applique à `droite`.
    pub fn combiner(&self, gauche: f64, droite: f64) -> f64 {
        match self.action {
            Action::Binaire(f) => f(gauche, droite),
            Action::Unaire(f) => f(droite),
        }
    }

    /// Entrée de table pour un genre donné.
    pub fn de(genre: Genre) -> &'static Operateur {
        // La table est rangée dans l’ordre des variantes de Genre.
        &TABLE[genre as usize]
    }
}

impl PartialEq for Operateur {
    fn eq(&self, other: &Self) -> bool {
        self.genre == other.genre
    }
}

impl fmt::Debug for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operateur")
            .field("genre", &self.genre)
            .field("arite", &self.arite())
            .field("precedence", &self.precedence)
            .finish()
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole)
    }
}

/* ------------------------ Table ------------------------ */

pub static TABLE: [Operateur; 9] = [
    Operateur {
        genre: Genre::Addition,
        precedence: 1,
        symbole: "+",
        symbole_html: "+",
        action: Action::Binaire(|a, b| a + b),
    },
    Operateur {
        genre: Genre::Soustraction,
        precedence: 1,
        symbole: "−",
        symbole_html: "-",
        action: Action::Binaire(|a, b| a - b),
    },
    Operateur {
        genre: Genre::Multiplication,
        precedence: 2,
        symbole: "×",
        symbole_html: "*",
        action: Action::Binaire(|a, b| a * b),
    },
    Operateur {
        genre: Genre::Division,
        precedence: 2,
        symbole: "÷",
        symbole_html: "&#xF7;",
        action: Action::Binaire(|a, b| a / b),
    },
    Operateur {
        genre: Genre::Inverse,
        precedence: IMMEDIATE,
        symbole: "1/x",
        symbole_html: "1/x",
        action: Action::Unaire(|x| 1.0 / x),
    },
    Operateur {
        genre: Genre::Carre,
        precedence: IMMEDIATE,
        symbole: "x²",
        symbole_html: "x<sup>2</sup>",
        action: Action::Unaire(|x| x * x),
    },
    Operateur {
        genre: Genre::Racine,
        precedence: IMMEDIATE,
        symbole: "√",
        symbole_html: "&#x221A;",
        action: Action::Unaire(f64::sqrt),
    },
    Operateur {
        genre: Genre::Negation,
        precedence: IMMEDIATE,
        symbole: "±",
        symbole_html: "+/-",
        action: Action::Unaire(|x| -x),
    },
    Operateur {
        genre: Genre::Egal,
        precedence: IMMEDIATE,
        symbole: "=",
        symbole_html: "=",
        action: Action::Unaire(|x| x),
    },
];
