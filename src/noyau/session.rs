//! Session : un moteur + un affichage, construits une fois.
//!
//! Chaque touche est traitée jusqu’au bout, puis l’affichage reçoit un
//! instantané en lecture seule (jamais conservé d’une touche à l’autre).

use tracing::{trace, warn};

use super::moteur::Moteur;
use super::operateurs::{Genre, Operateur};
use super::pile::{Entree, Pile};
use super::rendu::{pile_en_html, pile_en_texte};
use super::touches::{ActionTouche, Touche};

/// État visible après une touche. Emprunté le temps d’un rendu.
#[derive(Clone, Copy, Debug)]
pub struct Instantane<'a> {
    pub texte: &'a str,
    pub valeur: f64,
    pub pile: &'a Pile,
}

impl Instantane<'_> {
    pub fn est_fini(&self) -> bool {
        self.valeur.is_finite()
    }
}

/// Adaptateur d’affichage : reçoit un rendu après chaque touche traitée.
pub trait Affichage {
    fn rendre(&mut self, instantane: &Instantane<'_>);
}

/// Rendu figé (texte du registre + ligne de pile en texte et en HTML).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rendu {
    pub ecran: String,
    pub operations: String,
    pub operations_html: String,
    pub pile: Vec<Entree>,
}

/// Affichage qui garde la trace de chaque rendu (tests, débogage).
#[derive(Clone, Debug, Default)]
pub struct Journal {
    pub rendus: Vec<Rendu>,
}

impl Journal {
    pub fn dernier(&self) -> Option<&Rendu> {
        self.rendus.last()
    }
}

impl Affichage for Journal {
    fn rendre(&mut self, instantane: &Instantane<'_>) {
        self.rendus.push(Rendu {
            ecran: instantane.texte.to_string(),
            operations: pile_en_texte(instantane.pile),
            operations_html: pile_en_html(instantane.pile),
            pile: instantane.pile.entrees().collect(),
        });
    }
}

#[derive(Clone, Debug)]
pub struct Calculatrice<A: Affichage> {
    moteur: Moteur,
    affichage: A,
}

impl<A: Affichage> Calculatrice<A> {
    pub fn new(affichage: A) -> Self {
        let mut calc = Self {
            moteur: Moteur::new(),
            affichage,
        };
        calc.rendre();
        calc
    }

    pub fn moteur(&self) -> &Moteur {
        &self.moteur
    }

    pub fn affichage(&self) -> &A {
        &self.affichage
    }

    /// Texte du registre (lecture numérique).
    pub fn ecran(&self) -> &str {
        self.moteur.registre().texte()
    }

    pub fn valeur(&self) -> f64 {
        self.moteur.registre().valeur()
    }

    pub fn chiffre(&mut self, c: char) {
        self.moteur.registre_mut().push(c);
        self.rendre();
    }

    pub fn operer(&mut self, genre: Genre) {
        self.moteur.operer(Operateur::de(genre));
        self.rendre();
    }

    pub fn action(&mut self, action: ActionTouche) {
        match action {
            ActionTouche::ToutEffacer => self.moteur.effacer(),
            ActionTouche::EffacerEntree => self.moteur.registre_mut().clear(),
            ActionTouche::Retour => self.moteur.registre_mut().pop_last(),
        }
        self.rendre();
    }

    /// Action désignée par son code numérique. Un code inconnu est journalisé, puis ignoré.
    pub fn action_par_code(&mut self, code: u8) {
        match ActionTouche::depuis_code(code) {
            Ok(a) => self.action(a),
            Err(e) => warn!("{e}"),
        }
    }

    pub fn touche(&mut self, touche: Touche) {
        trace!(?touche, "touche");
        match touche {
            Touche::Chiffre(c) => self.chiffre(c),
            Touche::Operateur(g) => self.operer(g),
            Touche::Action(a) => self.action(a),
        }
    }

    /// Touche désignée par son nom (voir `touches::liaison`).
    /// Renvoie false si le nom n’est lié à rien.
    pub fn touche_nommee(&mut self, nom: &str) -> bool {
        match nom.parse::<Touche>() {
            Ok(t) => {
                self.touche(t);
                true
            }
            Err(e) => {
                trace!("{e}");
                false
            }
        }
    }

    /// Enchaîne des touches d’une seule lettre ("2+3*4=").
    /// Lettres : chiffres, '.', '+ - * /', '=', 'r' (1/x), 'q' (x²), 's' (√),
    /// 'n' (±), 'C', 'E' (CE), '<' (retour). Le reste est ignoré.
    pub fn saisir(&mut self, touches: &str) {
        for c in touches.chars() {
            let t = match c {
                'r' => Touche::Operateur(Genre::Inverse),
                'q' => Touche::Operateur(Genre::Carre),
                's' => Touche::Operateur(Genre::Racine),
                'n' => Touche::Operateur(Genre::Negation),
                'C' => Touche::Action(ActionTouche::ToutEffacer),
                'E' => Touche::Action(ActionTouche::EffacerEntree),
                '<' => Touche::Action(ActionTouche::Retour),
                _ if c.is_whitespace() => continue,
                _ => {
                    let mut buf = [0u8; 4];
                    self.touche_nommee(c.encode_utf8(&mut buf));
                    continue;
                }
            };
            self.touche(t);
        }
    }

    fn rendre(&mut self) {
        let registre = self.moteur.registre();
        let instantane = Instantane {
            texte: registre.texte(),
            valeur: registre.valeur(),
            pile: self.moteur.pile(),
        };
        self.affichage.rendre(&instantane);
    }
}
