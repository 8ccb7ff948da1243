//! Moteur d’évaluation : la chose qui calcule vraiment.
//!
//! Trois voies, testées dans l’ordre, pour chaque opérateur reçu :
//! 1. `=`        : réduit toute la pile sur la valeur du registre.
//! 2. immédiat   : 1/x, x², √, ± appliqués tout de suite au registre.
//! 3. binaire    : différé sur la pile, ou réduction partielle selon la précédence.
//!
//! La pile range des paires (opérande gauche, opérateur en attente). Un opérateur
//! en attente n’est réduit que lorsqu’aucun opérateur de précédence inférieure ou
//! égale n’arrive après lui.

use tracing::debug;

use super::operateurs::{Genre, Operateur};
use super::pile::Pile;
use super::registre::Registre;

#[derive(Clone, Debug, Default)]
pub struct Moteur {
    registre: Registre,
    pile: Pile,
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registre(&self) -> &Registre {
        &self.registre
    }

    pub fn registre_mut(&mut self) -> &mut Registre {
        &mut self.registre
    }

    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    /// Remise à zéro totale (registre + pile).
    pub fn effacer(&mut self) {
        self.registre.clear();
        self.pile.clear();
        debug!("remise à zéro");
    }

    /// Traite un opérateur contre le registre et la pile.
    pub fn operer(&mut self, op: &'static Operateur) {
        if op.genre == Genre::Egal {
            self.egal();
        } else if op.est_immediat() || op.arite() == 1 {
            self.immediat(op);
        } else {
            self.binaire(op);
            // Après un opérateur, la saisie repart de zéro.
            self.registre.restart();
        }
    }

    /// "=" : toute la pile est réduite, de haut en bas.
    fn egal(&mut self) {
        let Some(sommet) = self.pile.sommet().copied() else {
            debug!("= sans calcul en attente");
            return;
        };

        let mut valeur = self.registre.valeur();
        if !self.registre.changed() {
            // Rien de tapé depuis le dernier opérateur : l’opérateur du sommet
            // reste en l’air, son opérande est déjà la valeur affichée.
            self.pile.depiler();
            valeur = sommet.operande;
        }
        while let Some(p) = self.pile.depiler() {
            valeur = p.operateur.combiner(p.operande, valeur);
        }

        debug!(valeur, "= réduit la pile");
        self.registre.set_value(valeur);
        self.registre.restart();
    }

    fn immediat(&mut self, op: &'static Operateur) {
        // ± n’agit que sur une valeur fraîchement tapée.
        if op.genre == Genre::Negation && !self.registre.changed() {
            debug!("± ignoré sur valeur non saisie");
            return;
        }

        let x = op.appliquer(self.registre.valeur());
        self.registre.set_value(x);
        debug!(op = op.symbole, valeur = x, "opérateur immédiat");

        if !self.pile.is_empty() && !self.registre.changed() {
            // Le registre vient de la dernière entrée : l’opération binaire
            // en attente est remplacée par le résultat immédiat.
            self.pile.depiler();
        }
    }

    fn binaire(&mut self, op: &'static Operateur) {
        let valeur = self.registre.valeur();

        let Some(prec) = self.pile.operateur_au_sommet() else {
            self.pile.empiler(valeur, op);
            debug!(op = op.symbole, valeur, "premier opérateur en attente");
            return;
        };

        if !self.registre.changed() {
            // Deux opérateurs de suite : le dernier gagne. La paire du dessous
            // est réduite si elle lie au moins aussi fort que le nouveau.
            if let Some(haut) = self.pile.depiler() {
                let profondeur = self.pile.profondeur();
                let op2 = self.reduire(op, haut.operande);
                if self.pile.profondeur() < profondeur {
                    self.registre.set_value(op2);
                }
                self.pile.empiler(op2, op);
            }
            debug!(ancien = prec.symbole, nouveau = op.symbole, "opérateur remplacé");
            return;
        }

        if op.precedence > prec.precedence {
            // L’opérateur en attente doit patienter : le nouveau lie plus fort.
            self.pile.empiler(valeur, op);
            debug!(op = op.symbole, profondeur = self.pile.profondeur(), "différé");
            return;
        }

        let op2 = self.reduire(op, valeur);
        debug!(op = op.symbole, total = op2, "réduction partielle");
        self.registre.set_value(op2);
        self.pile.empiler(op2, op);
    }

    /// Réduit les paires du sommet tant que leur opérateur lie au moins
    /// aussi fort que `op`. Renvoie le total obtenu à partir de `op2`.
    fn reduire(&mut self, op: &Operateur, mut op2: f64) -> f64 {
        while let Some(sommet) = self.pile.operateur_au_sommet() {
            if op.precedence > sommet.precedence {
                break;
            }
            if let Some(p) = self.pile.depiler() {
                op2 = p.operateur.combiner(p.operande, op2);
            }
        }
        op2
    }
}
